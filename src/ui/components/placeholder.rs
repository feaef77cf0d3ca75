// Placeholder component - 카드 상세 페이지 (내용 준비 중)

use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use crate::utils::display::wrap_text;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct Placeholder<'a> {
    icon: Icon,
    title: &'a str,
    message: &'a str,
    bg_color: Color,
    title_color: Color,
    text_color: Color,
    border_color: Color,
}

impl<'a> Placeholder<'a> {
    pub fn new(icon: Icon, title: &'a str, message: &'a str) -> Self {
        Self {
            icon,
            title,
            message,
            bg_color: Color::Rgb(18, 18, 18),
            title_color: Color::White,
            text_color: Color::Rgb(224, 224, 224),
            border_color: Color::Rgb(51, 51, 51),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("main.bg_color");
        self.title_color = theme.color("main.title_color");
        self.text_color = theme.color("main.text_color");
        self.border_color = theme.color("cards.border_color");
        self
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                self.icon.span(),
                Span::styled(
                    format!(" {}", self.title),
                    Style::default()
                        .fg(self.title_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];
        for text in wrap_text(self.message, inner.width.saturating_sub(4) as usize) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(self.text_color),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_title_and_message() {
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        let icon = Icon {
            glyph: "⚒",
            color: Color::White,
        };
        Placeholder::new(icon, "Site Audit", "This is the Site Audit page.")
            .render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect()
        };
        assert!(row(2).contains("Site Audit"));
        assert!(row(4).contains("This is the Site Audit page."));
    }
}
