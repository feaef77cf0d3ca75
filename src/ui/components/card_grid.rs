// Card grid component - 대시보드 카드 그리드
//
// 카드마다 아이콘, 제목, 설명, 빈 차트 영역을 그린다.

use crate::ui::icons::Icon;
use crate::ui::theme::Theme;
use crate::utils::display::{truncate_end, wrap_text};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// 카드 하나의 표시 정보
#[derive(Debug, Clone)]
pub struct CardTile {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

pub struct CardGrid<'a> {
    cards: &'a [CardTile],
    columns: usize,
    selected: usize,
    focused: bool,
    page_title: &'a str,
    empty_chart_label: &'a str,
    bg_color: Color,
    page_bg_color: Color,
    page_title_color: Color,
    title_color: Color,
    text_color: Color,
    border_color: Color,
    selected_border_color: Color,
    chart_bg_color: Color,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [CardTile]) -> Self {
        Self {
            cards,
            columns: 4,
            selected: 0,
            focused: false,
            page_title: "",
            empty_chart_label: "",
            bg_color: Color::Rgb(36, 36, 36),
            page_bg_color: Color::Rgb(18, 18, 18),
            page_title_color: Color::White,
            title_color: Color::White,
            text_color: Color::Rgb(224, 224, 224),
            border_color: Color::Rgb(51, 51, 51),
            selected_border_color: Color::Rgb(157, 78, 221),
            chart_bg_color: Color::Rgb(26, 26, 26),
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn page_title(mut self, title: &'a str) -> Self {
        self.page_title = title;
        self
    }

    pub fn empty_chart_label(mut self, label: &'a str) -> Self {
        self.empty_chart_label = label;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("cards.bg_color");
        self.page_bg_color = theme.color("main.bg_color");
        self.page_title_color = theme.color("main.title_color");
        self.title_color = theme.color("cards.title_color");
        self.text_color = theme.color("cards.text_color");
        self.border_color = theme.color("cards.border_color");
        self.selected_border_color = theme.color("accent_color");
        self.chart_bg_color = theme.color("cards.chart_bg_color");
        self
    }

    fn render_card(&self, index: usize, card: &CardTile, area: Rect, buf: &mut Buffer) {
        let selected = index == self.selected;
        let border_style = if selected && self.focused {
            Style::default()
                .fg(self.selected_border_color)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(self.selected_border_color)
        } else {
            Style::default().fg(self.border_color)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let mut lines = vec![Line::from(vec![
            card.icon.span(),
            Span::styled(
                format!(" {}", truncate_end(&card.title, width.saturating_sub(2))),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        for line in wrap_text(&card.description, width).into_iter().take(2) {
            lines.push(Line::from(Span::styled(
                line,
                Style::default().fg(self.text_color),
            )));
        }
        let text_height = (lines.len() as u16).min(inner.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(text_height), Constraint::Min(0)])
            .split(inner);
        Paragraph::new(lines).render(chunks[0], buf);

        // 빈 차트 영역
        let chart = chunks[1];
        if chart.height > 0 {
            buf.set_style(chart, Style::default().bg(self.chart_bg_color));
            let label_area = Rect {
                y: chart.y + chart.height / 2,
                height: 1,
                ..chart
            };
            Paragraph::new(Span::styled(
                self.empty_chart_label,
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center)
            .render(label_area, buf);
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.page_bg_color));
        if area.height < 2 {
            return;
        }

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);
        Paragraph::new(Span::styled(
            format!(" {}", self.page_title),
            Style::default()
                .fg(self.page_title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .render(sections[0], buf);

        let rows: Vec<&[CardTile]> = self.cards.chunks(self.columns).collect();
        if rows.is_empty() {
            return;
        }
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
            .split(sections[1]);

        for (row_index, (row, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
            let column_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, self.columns as u32); self.columns])
                .split(*row_area);
            for (column, card) in row.iter().enumerate() {
                let index = row_index * self.columns + column;
                self.render_card(index, card, column_areas[column], buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles() -> Vec<CardTile> {
        (0..8)
            .map(|i| CardTile {
                icon: Icon {
                    glyph: "↗",
                    color: Color::White,
                },
                title: format!("Card {}", i),
                description: "Track rankings".to_string(),
            })
            .collect()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_all_cards_in_two_rows() {
        let cards = tiles();
        let area = Rect::new(0, 0, 100, 21);
        let mut buf = Buffer::empty(area);
        CardGrid::new(&cards)
            .page_title("Dashboard")
            .empty_chart_label("No data yet")
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Dashboard"));
        for i in 0..8 {
            assert!(text.contains(&format!("Card {}", i)), "missing card {}", i);
        }
        assert!(text.contains("No data yet"));
    }
}
