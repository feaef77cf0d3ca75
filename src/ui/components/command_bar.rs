// Command bar component - 하단 커맨드 바 컴포넌트
//
// 현재 언어로 번역된 단축키 목록 표시

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// 단축키 (F1, ^W, ...)
    pub key: String,
    /// 레이블 (Home, Close, ...)
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar<'a> {
    commands: &'a [CommandItem],
    bg_color: Color,
    /// 전경색 (키)
    key_fg_color: Color,
    /// 전경색 (레이블)
    label_fg_color: Color,
}

impl<'a> CommandBar<'a> {
    pub fn new(commands: &'a [CommandItem]) -> Self {
        Self {
            commands,
            bg_color: Color::Rgb(18, 18, 18),
            key_fg_color: Color::Rgb(157, 78, 221),
            label_fg_color: Color::Rgb(224, 224, 224),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("main.bg_color");
        self.key_fg_color = theme.color("accent_color");
        self.label_fg_color = theme.color("main.text_color");
        self
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(cmd.key.as_str(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.as_str(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
