// Help view component - 도움말 섹션 목록 (세로 스크롤)

use crate::pages::help::HelpSection;
use crate::ui::theme::Theme;
use crate::utils::display::{truncate_end, wrap_text};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HelpView<'a> {
    title: &'a str,
    sections: &'a [HelpSection],
    scroll: u16,
    bg_color: Color,
    title_color: Color,
    section_title_color: Color,
    text_color: Color,
    border_color: Color,
    accent_color: Color,
}

impl<'a> HelpView<'a> {
    pub fn new(title: &'a str, sections: &'a [HelpSection]) -> Self {
        Self {
            title,
            sections,
            scroll: 0,
            bg_color: Color::Rgb(18, 18, 18),
            title_color: Color::White,
            section_title_color: Color::White,
            text_color: Color::Rgb(224, 224, 224),
            border_color: Color::Rgb(51, 51, 51),
            accent_color: Color::Rgb(157, 78, 221),
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("main.bg_color");
        self.title_color = theme.color("help.title_color");
        self.section_title_color = theme.color("help.section_title_color");
        self.text_color = theme.color("help.text_color");
        self.border_color = theme.color("help.border_color");
        self.accent_color = theme.color("accent_color");
        self
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn body_lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width.saturating_sub(2) as usize;
        let mut lines = Vec::new();
        for section in self.sections {
            lines.push(Line::from(vec![
                Span::styled("▌", Style::default().fg(self.accent_color)),
                Span::styled(
                    format!(" {}", section.title),
                    Style::default()
                        .fg(self.section_title_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(self.border_color),
            )));
            for text in &section.lines {
                let rows = if section.preformatted {
                    vec![truncate_end(text, width)]
                } else {
                    wrap_text(text, width)
                };
                for row in rows {
                    lines.push(Line::from(Span::styled(
                        format!(" {}", row),
                        Style::default().fg(self.text_color),
                    )));
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }

    /// 스크롤 가능한 최대 줄 수
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let (_, body) = Self::split(area);
        let total = self.body_lines(body.width).len();
        total.saturating_sub(body.height as usize).min(u16::MAX as usize) as u16
    }
}

impl Widget for HelpView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        let (title_area, body_area) = Self::split(area);

        Paragraph::new(Span::styled(
            format!(" {}", self.title),
            Style::default()
                .fg(self.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        let lines = self.body_lines(body_area.width);
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(body_area, buf);
    }
}
