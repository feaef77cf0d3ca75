// Sidebar component - 사이드바 탐색 컴포넌트
//
// 앱 제목, 탐색 항목(아이콘 + 레이블), 하단 버전 표시

use crate::models::NavEntry;
use crate::ui::icons::IconProvider;
use crate::ui::theme::Theme;
use crate::utils::display::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Sidebar<'a> {
    entries: &'a [NavEntry],
    icons: &'a dyn IconProvider,
    title: &'a str,
    version: &'a str,
    /// 키보드 커서 위치
    selected: usize,
    /// 사이드바에 포커스가 있는지
    focused: bool,
    /// 아이콘만 표시
    compact: bool,
    /// 오른쪽 배치 (테두리/정렬 반전)
    rtl: bool,
    bg_color: Color,
    title_color: Color,
    text_color: Color,
    active_bg_color: Color,
    active_text_color: Color,
    border_color: Color,
    icon_color: Color,
    version_color: Color,
    focus_color: Color,
}

impl<'a> Sidebar<'a> {
    pub fn new(entries: &'a [NavEntry], icons: &'a dyn IconProvider) -> Self {
        Self {
            entries,
            icons,
            title: "NovaSEO",
            version: "",
            selected: 0,
            focused: false,
            compact: false,
            rtl: false,
            bg_color: Color::Rgb(26, 26, 26),
            title_color: Color::Rgb(157, 78, 221),
            text_color: Color::Rgb(224, 224, 224),
            active_bg_color: Color::Rgb(51, 26, 73),
            active_text_color: Color::White,
            border_color: Color::Rgb(51, 51, 51),
            icon_color: Color::Rgb(157, 78, 221),
            version_color: Color::Rgb(102, 102, 102),
            focus_color: Color::Rgb(157, 78, 221),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn version(mut self, version: &'a str) -> Self {
        self.version = version;
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

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("sidebar.bg_color");
        self.title_color = theme.color("sidebar.title_color");
        self.text_color = theme.color("sidebar.text_color");
        self.active_bg_color = theme.color("sidebar.active_color");
        self.active_text_color = theme.color("sidebar.active_text_color");
        self.border_color = theme.color("sidebar.border_color");
        self.icon_color = theme.color("sidebar.icon_color");
        self.version_color = theme.color("sidebar.version_color");
        self.focus_color = theme.color("accent_color");
        self
    }

    fn entry_line(&self, index: usize, entry: &NavEntry, width: usize) -> Line<'static> {
        let icon = self.icons.resolve(entry.icon, self.icon_color);
        let cursor = if self.focused && index == self.selected {
            "▸"
        } else {
            " "
        };

        let (fg, bg) = if entry.active {
            (self.active_text_color, self.active_bg_color)
        } else {
            (self.text_color, self.bg_color)
        };
        let mut label_style = Style::default().fg(fg).bg(bg);
        if entry.active {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let cursor_span = Span::styled(cursor, Style::default().fg(self.focus_color).bg(bg));
        let icon_span = Span::styled(icon.glyph, Style::default().fg(icon.color).bg(bg));

        if self.compact {
            return Line::from(vec![cursor_span, Span::styled(" ", label_style), icon_span]);
        }

        // 커서 + 공백 + 아이콘 + 공백
        let label_width = width.saturating_sub(4);
        let label = truncate_end(&entry.label, label_width);
        if self.rtl {
            Line::from(vec![
                Span::styled(format!("{} ", label), label_style),
                icon_span,
                Span::styled(" ", label_style),
                cursor_span,
            ])
        } else {
            Line::from(vec![
                cursor_span,
                Span::styled(" ", label_style),
                icon_span,
                Span::styled(format!(" {}", label), label_style),
            ])
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let border_color = if self.focused {
            self.focus_color
        } else {
            self.border_color
        };
        let block = Block::default()
            .borders(if self.rtl {
                Borders::LEFT
            } else {
                Borders::RIGHT
            })
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let alignment = if self.rtl {
            Alignment::Right
        } else {
            Alignment::Left
        };

        let mut lines = Vec::new();
        if !self.compact {
            lines.push(
                Line::from(Span::styled(
                    truncate_end(self.title, width.saturating_sub(1)),
                    Style::default()
                        .fg(self.title_color)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
        }
        lines.push(Line::from(""));
        for (index, entry) in self.entries.iter().enumerate() {
            lines.push(self.entry_line(index, entry, width).alignment(alignment));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines).render(inner, buf);

        if !self.compact && !self.version.is_empty() && inner.height > 0 {
            let version_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Span::styled(
                self.version,
                Style::default().fg(self.version_color),
            ))
            .alignment(Alignment::Center)
            .render(version_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageId, SidebarNav};
    use crate::ui::icons::GlyphIconProvider;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_renders_labels_and_active_marker() {
        let mut nav = SidebarNav::new();
        nav.activate(PageId::Settings);
        let icons = GlyphIconProvider::default();
        let area = Rect::new(0, 0, 24, 12);
        let mut buf = Buffer::empty(area);

        Sidebar::new(nav.entries(), &icons)
            .selected(nav.selected_index())
            .focused(true)
            .version("v1.0.0")
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("NovaSEO"));
        assert!(row_text(&buf, 2).contains("Dashboard"));
        let settings_row = row_text(&buf, 6);
        assert!(settings_row.contains("▸"));
        assert!(settings_row.contains("Settings"));
        assert!(row_text(&buf, 11).contains("v1.0.0"));
    }

    #[test]
    fn test_compact_mode_hides_labels() {
        let nav = SidebarNav::new();
        let icons = GlyphIconProvider::default();
        let area = Rect::new(0, 0, 6, 10);
        let mut buf = Buffer::empty(area);

        Sidebar::new(nav.entries(), &icons)
            .compact(true)
            .render(area, &mut buf);

        assert!(!row_text(&buf, 1).contains("Dashboard"));
        assert!(row_text(&buf, 1).contains("⌂"));
    }
}
