use super::App;
use crate::core::actions::Action;
use crate::core::events::StoreEvent;
use crate::models::{CardType, PageId, PageKey};
use crate::utils::display::capitalize;
use std::sync::mpsc::TryRecvError;

impl App {
    /// 기본 페이지로 이동 (이미 열려 있으면 그 탭으로 전환)
    pub fn navigate(&mut self, page: PageId) {
        let key = PageKey::Primary(page);
        let title = self.registry.title(key);
        let registry = &self.registry;
        let index = self
            .tabs
            .open(key, title, key.icon(), || registry.build(key));
        tracing::debug!(page = page.id(), index, "navigate");
        self.sync_sidebar();
    }

    /// 카드 상세 탭 열기 (매번 새 탭)
    pub fn open_card(&mut self, card: CardType) {
        let key = PageKey::CardDetail(card);
        let title = self.registry.title(key);
        let registry = &self.registry;
        self.tabs
            .open(key, title, key.icon(), || registry.build(key));
        self.sync_sidebar();
    }

    /// 현재 탭 닫기 (0번 탭은 보호)
    pub fn close_current_tab(&mut self) {
        let index = self.tabs.current_index();
        self.close_tab(index);
    }

    pub fn close_tab(&mut self, index: usize) {
        match self.tabs.close(index) {
            Ok(true) => self.sync_sidebar(),
            Ok(false) => {
                let message = self
                    .locale
                    .text("status.tab_protected", Some("The first tab cannot be closed"));
                self.set_toast(&message);
            }
            Err(err) => tracing::warn!(index, error = %err, "close tab failed"),
        }
    }

    pub fn next_tab(&mut self) {
        self.tabs.next_tab();
        self.sync_sidebar();
    }

    pub fn prev_tab(&mut self) {
        self.tabs.prev_tab();
        self.sync_sidebar();
    }

    /// 탭 선택 (범위 밖이면 무시)
    pub fn switch_tab(&mut self, index: usize) {
        if let Err(err) = self.tabs.set_current(index) {
            tracing::warn!(index, error = %err, "switch tab failed");
            return;
        }
        self.sync_sidebar();
    }

    /// 현재 탭의 기본 페이지를 사이드바에 표시, 카드 탭이면 모두 해제
    fn sync_sidebar(&mut self) {
        match self.tabs.current().and_then(|tab| tab.key.primary()) {
            Some(page) => self.sidebar.activate(page),
            None => self.sidebar.deactivate_all(),
        }
    }

    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::NavigateHome
            | Action::NavigateAi
            | Action::NavigateSettings
            | Action::NavigateHelp => {
                if let Some(page) = action.target_page() {
                    self.navigate(page);
                }
            }
            Action::NextTab => self.next_tab(),
            Action::PrevTab => self.prev_tab(),
            Action::CloseTab => self.close_current_tab(),
            Action::SelectTab(index) => self.switch_tab(index),
            Action::ToggleFocus => self.layout.toggle_focus(),
        }
    }

    /// 쌓인 스토어 알림 반영. 반영한 것이 있으면 true
    pub(crate) fn drain_store_events(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.inbox.try_recv() {
                Ok(event) => {
                    self.apply_store_event(&event);
                    changed = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    fn apply_store_event(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Theme { name, theme } => {
                let display = theme
                    .display_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| capitalize(name));
                let label = self
                    .locale
                    .text(&format!("settings.themes.{}", name), Some(display.as_str()));
                let message = self.locale.format(
                    "status.theme_changed",
                    "Theme changed to {theme}",
                    &[("theme", label.as_str())],
                );
                self.set_toast(&message);
            }
            StoreEvent::Language { code, .. } => {
                let registry = &self.registry;
                self.tabs
                    .rename_on_locale_change(|key| registry.title(key));
                self.sidebar.relabel(&self.locale);
                self.layout.set_rtl(self.locale.is_rtl());

                let language = self.locale.active_language().display_name();
                let message = self.locale.format(
                    "status.language_changed",
                    "Language changed to {language}",
                    &[("language", language)],
                );
                tracing::debug!(code = %code, titles = ?self.tabs.titles(), "relabeled shell");
                self.set_toast(&message);
            }
        }
    }
}
