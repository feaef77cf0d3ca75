// Settings view component - 테마/언어 선택 화면

use crate::pages::settings::{SettingsLabels, SettingsOption, SettingsSection};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct SettingsView<'a> {
    labels: &'a SettingsLabels,
    active_theme: &'a str,
    active_language: &'a str,
    /// 테마 순서와 같은 미리보기 색상
    previews: &'a [Color],
    focus: SettingsSection,
    focused: bool,
    bg_color: Color,
    title_color: Color,
    section_bg_color: Color,
    section_title_color: Color,
    text_color: Color,
    border_color: Color,
    control_color: Color,
    accent_color: Color,
}

impl<'a> SettingsView<'a> {
    pub fn new(labels: &'a SettingsLabels) -> Self {
        Self {
            labels,
            active_theme: "",
            active_language: "",
            previews: &[],
            focus: SettingsSection::default(),
            focused: true,
            bg_color: Color::Rgb(18, 18, 18),
            title_color: Color::White,
            section_bg_color: Color::Rgb(36, 36, 36),
            section_title_color: Color::White,
            text_color: Color::Rgb(224, 224, 224),
            border_color: Color::Rgb(51, 51, 51),
            control_color: Color::Rgb(102, 102, 102),
            accent_color: Color::Rgb(157, 78, 221),
        }
    }

    pub fn active(mut self, theme: &'a str, language: &'a str) -> Self {
        self.active_theme = theme;
        self.active_language = language;
        self
    }

    pub fn previews(mut self, previews: &'a [Color]) -> Self {
        self.previews = previews;
        self
    }

    pub fn focus(mut self, focus: SettingsSection) -> Self {
        self.focus = focus;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("main.bg_color");
        self.title_color = theme.color("settings.title_color");
        self.section_bg_color = theme.color("settings.section_bg_color");
        self.section_title_color = theme.color("settings.section_title_color");
        self.text_color = theme.color("settings.text_color");
        self.border_color = theme.color("settings.border_color");
        self.control_color = theme.color("settings.control_border_color");
        self.accent_color = theme.color("accent_color");
        self
    }

    fn render_section(&self, section: SettingsSection, area: Rect, buf: &mut Buffer) {
        let (title, options, active, swatches): (&str, &[SettingsOption], &str, &[Color]) =
            match section {
                SettingsSection::Theme => (
                    &self.labels.theme_title,
                    &self.labels.themes,
                    self.active_theme,
                    self.previews,
                ),
                SettingsSection::Language => (
                    &self.labels.language_title,
                    &self.labels.languages,
                    self.active_language,
                    &[],
                ),
            };
        let section_focused = self.focused && self.focus == section;
        let border_style = if section_focused {
            Style::default().fg(self.accent_color)
        } else {
            Style::default().fg(self.border_color)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if section_focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.section_title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.section_bg_color));

        let lines: Vec<Line> = options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let selected = option.id == active;
                let (mark, mark_color) = if selected {
                    ("(●)", self.accent_color)
                } else {
                    ("( )", self.control_color)
                };
                let mut label_style = Style::default().fg(self.text_color);
                if selected {
                    label_style = label_style.add_modifier(Modifier::BOLD);
                }
                let mut spans = vec![
                    Span::styled(format!(" {} ", mark), Style::default().fg(mark_color)),
                    Span::styled(option.label.clone(), label_style),
                ];
                if let Some(color) = swatches.get(index) {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled("■■", Style::default().fg(*color)));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        let theme_height = self.labels.themes.len() as u16 + 2;
        let language_height = self.labels.languages.len() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(theme_height),
                Constraint::Length(language_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled(
            format!(" {}", self.labels.title),
            Style::default()
                .fg(self.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .render(chunks[0], buf);

        self.render_section(SettingsSection::Theme, chunks[1], buf);
        self.render_section(SettingsSection::Language, chunks[2], buf);

        Paragraph::new(Span::styled(
            format!(" {}", self.labels.hint),
            Style::default()
                .fg(self.control_color)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, label: &str) -> SettingsOption {
        SettingsOption {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    fn labels() -> SettingsLabels {
        SettingsLabels {
            title: "Settings".to_string(),
            theme_title: "Theme".to_string(),
            language_title: "Language".to_string(),
            hint: "hint".to_string(),
            themes: vec![option("cyber", "Cyber"), option("matrix", "Matrix")],
            languages: vec![option("en", "English"), option("ar", "العربية")],
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_marks_active_options() {
        let labels = labels();
        let previews = [Color::Red, Color::Green];
        let area = Rect::new(0, 0, 50, 16);
        let mut buf = Buffer::empty(area);
        SettingsView::new(&labels)
            .active("matrix", "en")
            .previews(&previews)
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Settings"));
        assert!(row_text(&buf, 2).contains("Theme"));
        assert!(row_text(&buf, 3).contains("( ) Cyber"));
        assert!(row_text(&buf, 4).contains("(●) Matrix"));
        assert!(row_text(&buf, 4).contains("■■"));
        assert!(row_text(&buf, 6).contains("Language"));
        assert!(row_text(&buf, 7).contains("(●) English"));
        assert!(row_text(&buf, 15).contains("hint"));
    }
}
