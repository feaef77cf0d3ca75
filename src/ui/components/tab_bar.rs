// Tab bar component - 열린 페이지 탭 표시
//
// 탭이 많으면 제목을 균등하게 줄인다. 0번 탭에는 닫기 표시가 없다.

use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use crate::utils::display::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 탭 하나의 표시 정보
#[derive(Debug, Clone)]
pub struct TabLabel {
    pub icon: Icon,
    pub title: String,
    pub closable: bool,
}

pub struct TabBar<'a> {
    tabs: &'a [TabLabel],
    current: usize,
    bg_color: Color,
    text_color: Color,
    active_bg_color: Color,
    active_text_color: Color,
    separator_color: Color,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [TabLabel]) -> Self {
        Self {
            tabs,
            current: 0,
            bg_color: Color::Rgb(26, 26, 26),
            text_color: Color::Rgb(224, 224, 224),
            active_bg_color: Color::Rgb(36, 36, 36),
            active_text_color: Color::White,
            separator_color: Color::Rgb(51, 51, 51),
        }
    }

    pub fn current(mut self, index: usize) -> Self {
        self.current = index;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("tabs.bg_color");
        self.text_color = theme.color("tabs.text_color");
        self.active_bg_color = theme.color("tabs.active_bg_color");
        self.active_text_color = theme.color("tabs.active_text_color");
        self.separator_color = theme.color("tabs.hover_color");
        self
    }

    /// 탭 하나에 쓸 수 있는 제목 폭
    fn title_budget(&self, total_width: usize) -> usize {
        if self.tabs.is_empty() {
            return 0;
        }
        // " ◉ " + 제목 + " ×" + "│"
        let per_tab = total_width / self.tabs.len();
        per_tab.saturating_sub(7).max(1)
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let budget = self.title_budget(area.width as usize);
        let mut spans = Vec::new();
        for (index, tab) in self.tabs.iter().enumerate() {
            let active = index == self.current;
            let (fg, bg) = if active {
                (self.active_text_color, self.active_bg_color)
            } else {
                (self.text_color, self.bg_color)
            };
            let mut style = Style::default().fg(fg).bg(bg);
            if active {
                style = style.add_modifier(Modifier::BOLD);
            }

            let title = if tab.title.width() > budget {
                truncate_end(&tab.title, budget)
            } else {
                tab.title.clone()
            };

            spans.push(Span::styled(" ", style));
            spans.push(Span::styled(
                tab.icon.glyph,
                Style::default().fg(tab.icon.color).bg(bg),
            ));
            spans.push(Span::styled(format!(" {}", title), style));
            spans.push(Span::styled(if tab.closable { " ×" } else { "  " }, style));
            spans.push(Span::styled("│", Style::default().fg(self.separator_color)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(title: &str, closable: bool) -> TabLabel {
        TabLabel {
            icon: Icon {
                glyph: "⌂",
                color: Color::White,
            },
            title: title.to_string(),
            closable,
        }
    }

    fn rendered(tabs: &[TabLabel], width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(tabs).current(1).render(area, &mut buf);
        (0..width)
            .filter_map(|x| buf.cell((x, 0)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_first_tab_has_no_close_mark() {
        let tabs = vec![label("Dashboard", false), label("Settings", true)];
        let text = rendered(&tabs, 60);
        assert!(text.contains("Dashboard  │"));
        assert!(text.contains("Settings ×"));
    }

    #[test]
    fn test_titles_shrink_when_crowded() {
        let tabs: Vec<TabLabel> = (0..4)
            .map(|i| label(&format!("Competitor Analysis {}", i), i > 0))
            .collect();
        let text = rendered(&tabs, 60);
        assert!(text.contains("…"));
        assert!(!text.contains("Competitor Analysis 0"));
    }
}
