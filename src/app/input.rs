use super::App;
use crate::core::actions::find_action;
use crate::models::CardType;
use crate::pages::{ChatPage, DashboardPage, HelpPage, Page, SettingsPage};
use crate::ui::FocusArea;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

/// PageUp/PageDown 한 번에 움직이는 줄 수
const SCROLL_PAGE_LINES: usize = 5;

/// 페이지 키 처리 결과 중 셸이 이어서 처리할 것
enum PageCommand {
    OpenCard(CardType),
}

impl App {
    /// 키 입력 처리
    ///
    /// 채팅 입력 중인 문자 → 전역 단축키 → 포커스 영역(사이드바/페이지) 순서로 처리하고,
    /// 처리 중 발생한 스토어 알림을 마지막에 반영한다.
    pub fn handle_key(&mut self, modifiers: KeyModifiers, code: KeyCode, now: Instant) {
        if !self.typed_into_chat(modifiers, code) {
            if let Some(action) = find_action(modifiers, code) {
                self.execute_action(action);
            } else {
                match self.layout.focus() {
                    FocusArea::Sidebar => self.handle_sidebar_keys(code),
                    FocusArea::Content => self.handle_page_keys(modifiers, code, now),
                }
            }
        }
        self.drain_store_events();
    }

    /// 채팅 페이지가 포커스를 가진 상태의 일반 문자 입력
    fn typed_into_chat(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        let KeyCode::Char(c) = code else {
            return false;
        };
        if !(modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT) {
            return false;
        }
        if self.layout.focus() != FocusArea::Content {
            return false;
        }
        if !self.tabs.current().is_some_and(|tab| tab.page.accepts_text()) {
            return false;
        }
        if let Some(Page::Chat(chat)) = self.tabs.current_page_mut() {
            chat.input_mut().insert_char(c);
        }
        true
    }

    fn handle_sidebar_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.sidebar.select_prev(),
            KeyCode::Down => self.sidebar.select_next(),
            KeyCode::Enter => {
                let page = self.sidebar.selected();
                self.navigate(page);
                self.layout.set_focus(FocusArea::Content);
            }
            KeyCode::Esc => self.layout.set_focus(FocusArea::Content),
            _ => {}
        }
    }

    fn handle_page_keys(&mut self, modifiers: KeyModifiers, code: KeyCode, now: Instant) {
        let command = match self.tabs.current_page_mut() {
            Some(Page::Dashboard(dashboard)) => dashboard_keys(dashboard, code),
            Some(Page::Chat(chat)) => {
                chat_keys(chat, modifiers, code, now);
                None
            }
            Some(Page::Settings(settings)) => {
                settings_keys(settings, code);
                None
            }
            Some(Page::Help(help)) => {
                help_keys(help, code);
                None
            }
            Some(Page::CardDetail(_)) | None => None,
        };

        if let Some(PageCommand::OpenCard(card)) = command {
            self.open_card(card);
        }
    }
}

fn dashboard_keys(dashboard: &mut DashboardPage, code: KeyCode) -> Option<PageCommand> {
    match code {
        KeyCode::Left => dashboard.move_left(),
        KeyCode::Right => dashboard.move_right(),
        KeyCode::Up => dashboard.move_up(),
        KeyCode::Down => dashboard.move_down(),
        KeyCode::Enter => return Some(PageCommand::OpenCard(dashboard.activate())),
        _ => {}
    }
    None
}

fn chat_keys(chat: &mut ChatPage, modifiers: KeyModifiers, code: KeyCode, now: Instant) {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Backspace) | (KeyModifiers::CONTROL, KeyCode::Char('h')) => {
            chat.input_mut().delete_prev_word()
        }
        (_, KeyCode::Backspace) => chat.input_mut().backspace(),
        (_, KeyCode::Delete) => chat.input_mut().delete(),
        (_, KeyCode::Left) => chat.input_mut().left(),
        (_, KeyCode::Right) => chat.input_mut().right(),
        (_, KeyCode::Home) => chat.input_mut().home(),
        (_, KeyCode::End) => chat.input_mut().end(),
        (_, KeyCode::Enter) => {
            chat.submit(now);
        }
        (_, KeyCode::Up) => chat.scroll_up(1),
        (_, KeyCode::Down) => chat.scroll_down(1),
        (_, KeyCode::PageUp) => chat.scroll_up(SCROLL_PAGE_LINES),
        (_, KeyCode::PageDown) => chat.scroll_down(SCROLL_PAGE_LINES),
        _ => {}
    }
}

fn settings_keys(settings: &mut SettingsPage, code: KeyCode) {
    match code {
        KeyCode::Up => settings.focus_prev(),
        KeyCode::Down => settings.focus_next(),
        KeyCode::Left => {
            settings.select_prev_option();
        }
        KeyCode::Right | KeyCode::Enter => {
            settings.select_next_option();
        }
        _ => {}
    }
}

fn help_keys(help: &mut HelpPage, code: KeyCode) {
    match code {
        KeyCode::Up => help.scroll_up(),
        KeyCode::Down => help.scroll_down(),
        KeyCode::PageUp => {
            for _ in 0..SCROLL_PAGE_LINES {
                help.scroll_up();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..SCROLL_PAGE_LINES {
                help.scroll_down();
            }
        }
        KeyCode::Home => help.scroll_to_top(),
        _ => {}
    }
}
