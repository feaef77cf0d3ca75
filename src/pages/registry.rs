//! 페이지 레지스트리 - 페이지 키 → 페이지 인스턴스 / 현재 언어 제목

use crate::models::page::PageKey;
use crate::models::PageId;
use crate::pages::ai_chat::{ChatConfig, ChatPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::help::HelpPage;
use crate::pages::settings::SettingsPage;
use crate::pages::{CardDetailPage, Page};
use crate::ui::i18n::LanguagePack;
use crate::ui::{LocaleStore, ThemeStore};
use std::rc::Rc;

/// 언어 팩 기준 탭 제목
pub fn page_title(pack: &LanguagePack, key: PageKey) -> String {
    match key {
        PageKey::Primary(page) => pack.text(page.title_key(), Some(page.default_title())),
        PageKey::CardDetail(card) => pack.text(&card.title_key(), Some(card.default_title())),
    }
}

pub struct PageRegistry {
    theme: Rc<ThemeStore>,
    locale: Rc<LocaleStore>,
    chat: ChatConfig,
}

impl PageRegistry {
    pub fn new(theme: Rc<ThemeStore>, locale: Rc<LocaleStore>, chat: ChatConfig) -> Self {
        Self {
            theme,
            locale,
            chat,
        }
    }

    /// 현재 언어 기준 제목
    pub fn title(&self, key: PageKey) -> String {
        page_title(&self.locale.active_pack(), key)
    }

    /// 페이지 인스턴스 생성 (탭이 새로 열릴 때만 호출)
    pub fn build(&self, key: PageKey) -> Page {
        tracing::debug!(?key, "building page");
        match key {
            PageKey::Primary(PageId::Home) => Page::Dashboard(DashboardPage::new()),
            PageKey::Primary(PageId::Ai) => Page::Chat(ChatPage::new(
                self.chat,
                Rc::clone(&self.theme),
                Rc::clone(&self.locale),
            )),
            PageKey::Primary(PageId::Settings) => Page::Settings(SettingsPage::new(
                Rc::clone(&self.theme),
                Rc::clone(&self.locale),
            )),
            PageKey::Primary(PageId::Help) => Page::Help(HelpPage::new()),
            PageKey::CardDetail(card) => Page::CardDetail(CardDetailPage::new(card)),
        }
    }
}
