use crate::ui::i18n::LanguagePack;
use crate::ui::theme::Theme;
use std::rc::Rc;

/// 스토어 변경 알림
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// 활성 테마 변경 (새 테마 데이터 포함)
    Theme { name: String, theme: Rc<Theme> },
    /// 활성 언어 변경 (새 언어 팩 포함)
    Language { code: String, pack: Rc<LanguagePack> },
}

impl StoreEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::Theme { .. } => "theme",
            StoreEvent::Language { .. } => "language",
        }
    }
}
