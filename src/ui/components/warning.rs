// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시되는 경고 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::theme::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen<'a> {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    title: &'a str,
    /// 크기가 치환된 번역 문구 (없으면 영어 기본값)
    current_label: Option<String>,
    required_label: Option<String>,
    warning_color: Color,
    bg_color: Color,
    accent_color: Color,
}

impl Default for WarningScreen<'_> {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            title: "Terminal Too Small",
            current_label: None,
            required_label: None,
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(18, 18, 18),
            accent_color: Color::Rgb(157, 78, 221),
        }
    }
}

impl<'a> WarningScreen<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 번역된 문구 설정
    pub fn labels(mut self, title: &'a str, current: String, required: String) -> Self {
        self.title = title;
        self.current_label = Some(current);
        self.required_label = Some(required);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("main.bg_color");
        self.accent_color = theme.color("accent_color");
        self
    }
}

impl Widget for WarningScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (width, height) = self.current_size;
        let current = self
            .current_label
            .unwrap_or_else(|| format!("Current: {}x{}", width, height));
        let required = self
            .required_label
            .unwrap_or_else(|| format!("Required: {}x{}", MIN_WIDTH, MIN_HEIGHT));

        let lines = vec![
            Line::from(Span::styled(
                "⚠",
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                current,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                required,
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
