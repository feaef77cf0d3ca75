use crate::models::page::PageId;
use crate::ui::i18n::LocaleStore;

/// 사이드바 탐색 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page: PageId,
    pub icon: &'static str,
    /// 현재 언어 기준 레이블
    pub label: String,
    pub active: bool,
}

/// 사이드바 상태
///
/// 활성 항목은 최대 1개. 첫 탐색 전에는 활성 항목이 없다.
#[derive(Debug, Clone)]
pub struct SidebarNav {
    entries: Vec<NavEntry>,
    /// 키보드 커서 위치
    selected: usize,
}

impl Default for SidebarNav {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarNav {
    pub fn new() -> Self {
        Self {
            entries: PageId::ALL
                .into_iter()
                .map(|page| NavEntry {
                    page,
                    icon: page.icon(),
                    label: page.default_title().to_string(),
                    active: false,
                })
                .collect(),
            selected: 0,
        }
    }

    /// `page` 항목만 활성화 (나머지는 모두 비활성)
    pub fn activate(&mut self, page: PageId) {
        for entry in &mut self.entries {
            entry.active = entry.page == page;
        }
        if let Some(index) = self.entries.iter().position(|entry| entry.page == page) {
            self.selected = index;
        }
    }

    /// 모든 항목 비활성화 (카드 상세 탭이 현재 탭일 때)
    pub fn deactivate_all(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
        }
    }

    /// 활성 항목
    pub fn active(&self) -> Option<PageId> {
        self.entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.page)
    }

    /// 현재 언어로 레이블 갱신
    pub fn relabel(&mut self, locale: &LocaleStore) {
        for entry in &mut self.entries {
            entry.label = locale.text(entry.page.nav_key(), Some(entry.page.default_title()));
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn selected(&self) -> PageId {
        self.entries[self.selected].page
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.entries.len() - 1
        } else {
            self.selected - 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::LanguagePack;
    use std::collections::HashMap;

    fn active_count(nav: &SidebarNav) -> usize {
        nav.entries().iter().filter(|entry| entry.active).count()
    }

    #[test]
    fn test_initially_no_entry_active() {
        let nav = SidebarNav::new();
        assert_eq!(nav.entries().len(), 4);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_activate_is_full_replace() {
        let mut nav = SidebarNav::new();
        for page in PageId::ALL {
            nav.activate(page);
            assert_eq!(nav.active(), Some(page));
            assert_eq!(active_count(&nav), 1);
            assert_eq!(nav.selected(), page);
        }

        nav.deactivate_all();
        assert_eq!(active_count(&nav), 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut nav = SidebarNav::new();
        nav.select_prev();
        assert_eq!(nav.selected(), PageId::Help);
        nav.select_next();
        assert_eq!(nav.selected(), PageId::Home);
    }

    #[test]
    fn test_relabel_from_locale() {
        let mut entries = HashMap::new();
        entries.insert("sidebar.ai".to_string(), "Yapay Zeka".to_string());
        let locale = LocaleStore::from_packs(vec![
            LanguagePack::new("en", HashMap::new()),
            LanguagePack::new("tr", entries),
        ]);
        assert!(locale.set_active("tr"));

        let mut nav = SidebarNav::new();
        nav.relabel(&locale);
        let labels: Vec<&str> = nav.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "Yapay Zeka", "Settings", "Help"]);
    }
}
