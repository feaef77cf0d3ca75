//! 카드 상세 placeholder 페이지

use crate::models::page::CardType;
use crate::ui::LocaleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetailPage {
    card: CardType,
}

impl CardDetailPage {
    pub fn new(card: CardType) -> Self {
        Self { card }
    }

    pub fn card(&self) -> CardType {
        self.card
    }

    pub fn title(&self, locale: &LocaleStore) -> String {
        locale.text(&self.card.title_key(), Some(self.card.default_title()))
    }

    /// 본문 안내 문장 (카드 제목 포함)
    pub fn placeholder(&self, locale: &LocaleStore) -> String {
        let title = self.title(locale);
        locale.format(
            "card.placeholder",
            "This is the {title} page. Detailed analysis will appear here.",
            &[("title", title.as_str())],
        )
    }
}
