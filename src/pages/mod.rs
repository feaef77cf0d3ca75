// Pages - 탭이 소유하는 페이지 상태
pub mod ai_chat;
pub mod card_detail;
pub mod dashboard;
pub mod help;
pub mod input_buffer;
pub mod registry;
pub mod settings;

pub use ai_chat::{ChatConfig, ChatPage};
pub use card_detail::CardDetailPage;
pub use dashboard::DashboardPage;
pub use help::HelpPage;
pub use registry::PageRegistry;
pub use settings::SettingsPage;

use std::time::Instant;

/// 탭 하나에 담기는 페이지
pub enum Page {
    Dashboard(DashboardPage),
    Chat(ChatPage),
    Settings(SettingsPage),
    Help(HelpPage),
    CardDetail(CardDetailPage),
}

impl Page {
    /// 이벤트 루프 tick. 화면을 다시 그려야 하면 true
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Page::Chat(chat) => chat.tick(now) > 0,
            _ => false,
        }
    }

    /// 문자 입력을 직접 받는 페이지인지
    pub fn accepts_text(&self) -> bool {
        matches!(self, Page::Chat(_))
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Page::Dashboard(_) => "Dashboard",
            Page::Chat(_) => "Chat",
            Page::Settings(_) => "Settings",
            Page::Help(_) => "Help",
            Page::CardDetail(_) => "CardDetail",
        };
        f.write_str(name)
    }
}
