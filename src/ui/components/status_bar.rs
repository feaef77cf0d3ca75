// Status bar component - 상태바 컴포넌트
//
// 왼쪽: 알림 메시지 또는 탭 위치, 오른쪽: 활성 테마/언어

use crate::ui::theme::Theme;
use crate::utils::display::fit_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 잠시 표시되는 알림
    message: Option<&'a str>,
    /// 현재 탭 위치 (1부터, 전체)
    tab_position: (usize, usize),
    /// "Theme: Cyber" 형태의 레이블
    theme_label: &'a str,
    language_label: &'a str,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
    dim_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            message: None,
            tab_position: (1, 1),
            theme_label: "",
            language_label: "",
            bg_color: Color::Rgb(26, 26, 26),
            fg_color: Color::Rgb(224, 224, 224),
            accent_color: Color::Rgb(157, 78, 221),
            dim_color: Color::Rgb(102, 102, 102),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn tab_position(mut self, current: usize, total: usize) -> Self {
        self.tab_position = (current, total);
        self
    }

    pub fn theme_label(mut self, label: &'a str) -> Self {
        self.theme_label = label;
        self
    }

    pub fn language_label(mut self, label: &'a str) -> Self {
        self.language_label = label;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("sidebar.bg_color");
        self.fg_color = theme.color("sidebar.text_color");
        self.accent_color = theme.color("accent_color");
        self.dim_color = theme.color("sidebar.version_color");
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (left_info, left_style) = match self.message {
            Some(message) => (
                format!(" {}", message),
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                format!(" [{}/{}]", self.tab_position.0, self.tab_position.1),
                Style::default().fg(self.dim_color),
            ),
        };
        let right_info = format!("{} │ {} ", self.theme_label, self.language_label);

        // 왼쪽은 오른쪽 정보를 뺀 나머지 폭에 맞춤 (긴 메시지는 생략)
        let left_width = (area.width as usize).saturating_sub(right_info.width());

        let spans = vec![
            Span::styled(fit_width(&left_info, left_width), left_style),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
