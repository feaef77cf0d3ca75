//! 도움말 페이지
//!
//! 내용은 렌더링 시점마다 현재 언어로 다시 만든다. 페이지는 스크롤 위치만 보관한다.

use crate::core::actions::generate_help_entries;
use crate::ui::LocaleStore;

const ABOUT_CONTENT: &str = "NovaSEO is a powerful SEO and backlink analysis tool designed to help you \
optimize your website and improve your search engine rankings. With advanced features and a \
user-friendly interface, NovaSEO makes it easy to analyze your site's performance and identify \
opportunities for improvement.";

const FEATURES_CONTENT: &str = "• Comprehensive SEO Analysis\n\
• Detailed Backlink Mapping\n\
• Competitor Analysis\n\
• Keyword Research\n\
• AI-Powered Recommendations\n\
• Performance Tracking\n\
• Custom Reports\n\
• Multi-Language Support";

/// 도움말 섹션 (제목 + 본문 줄)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: String,
    pub lines: Vec<String>,
    /// 줄바꿈 없이 공백을 그대로 유지 (단축키 표)
    pub preformatted: bool,
}

/// 현재 언어 기준 도움말 섹션 목록
pub fn help_sections(locale: &LocaleStore) -> Vec<HelpSection> {
    let about = HelpSection {
        title: locale.text("help.about.title", Some("About NovaSEO")),
        lines: vec![locale.text("help.about.content", Some(ABOUT_CONTENT))],
        preformatted: false,
    };

    let features = HelpSection {
        title: locale.text("help.features.title", Some("Key Features")),
        lines: locale
            .text("help.features.content", Some(FEATURES_CONTENT))
            .lines()
            .map(str::to_string)
            .collect(),
        preformatted: false,
    };

    let mut key_lines = Vec::new();
    for (category, items) in generate_help_entries(locale) {
        key_lines.push(format!("[{}]", category));
        for (keys, label) in items {
            key_lines.push(format!("  {:<12} {}", keys, label));
        }
    }
    let keys = HelpSection {
        title: locale.text("help.keys.title", Some("Keyboard Shortcuts")),
        lines: key_lines,
        preformatted: true,
    };

    vec![about, features, keys]
}

#[derive(Debug, Clone, Default)]
pub struct HelpPage {
    scroll: u16,
}

impl HelpPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// 렌더러가 내용 높이에 맞춰 보정
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::LanguagePack;

    #[test]
    fn test_default_sections() {
        let sections = help_sections(&LocaleStore::builtin());
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "About NovaSEO");
        assert_eq!(sections[1].title, "Key Features");
        assert_eq!(sections[1].lines.len(), 8);
        assert!(sections[2].preformatted);
        assert!(sections[2].lines.iter().any(|line| line.starts_with("  ^W ")));
    }

    #[test]
    fn test_sections_are_translated() {
        let locale = LocaleStore::from_packs(vec![LanguagePack::new(
            "ru",
            [("help.features.title".to_string(), "Основные возможности".to_string())]
                .into_iter()
                .collect(),
        )]);
        locale.set_active("ru");
        assert_eq!(help_sections(&locale)[1].title, "Основные возможности");
    }

    #[test]
    fn test_scroll_bounds() {
        let mut page = HelpPage::new();
        page.scroll_up();
        assert_eq!(page.scroll(), 0);
        page.scroll_down();
        page.scroll_down();
        page.clamp_scroll(1);
        assert_eq!(page.scroll(), 1);
        page.scroll_to_top();
        assert_eq!(page.scroll(), 0);
    }
}
