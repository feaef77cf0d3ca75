// Chat view component - AI 어시스턴트 대화 화면
//
// 제목 | 대화 기록 (아래 기준 스크롤) | 입력 상자

use crate::models::chat::ChatMessage;
use crate::pages::input_buffer::InputBuffer;
use crate::ui::theme::Theme;
use crate::utils::display::wrap_text;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const INPUT_HEIGHT: u16 = 3;

pub struct ChatView<'a> {
    messages: &'a [ChatMessage],
    input: &'a InputBuffer,
    title: &'a str,
    user_label: &'a str,
    assistant_label: &'a str,
    placeholder: &'a str,
    /// 응답 대기 중이면 표시할 문구
    typing: Option<&'a str>,
    /// 맨 아래에서 위로 올린 줄 수
    scroll: usize,
    focused: bool,
    rtl: bool,
    bg_color: Color,
    title_color: Color,
    input_bg_color: Color,
    input_text_color: Color,
    input_border_color: Color,
    focus_color: Color,
    user_bubble_color: Color,
    user_text_color: Color,
    user_border_color: Color,
    ai_bubble_color: Color,
    ai_text_color: Color,
    ai_border_color: Color,
}

impl<'a> ChatView<'a> {
    pub fn new(messages: &'a [ChatMessage], input: &'a InputBuffer) -> Self {
        Self {
            messages,
            input,
            title: "AI Assistant",
            user_label: "You",
            assistant_label: "Nova",
            placeholder: "",
            typing: None,
            scroll: 0,
            focused: true,
            rtl: false,
            bg_color: Color::Rgb(26, 26, 26),
            title_color: Color::White,
            input_bg_color: Color::Rgb(51, 51, 51),
            input_text_color: Color::Rgb(224, 224, 224),
            input_border_color: Color::Rgb(68, 68, 68),
            focus_color: Color::Rgb(157, 78, 221),
            user_bubble_color: Color::Rgb(51, 26, 73),
            user_text_color: Color::White,
            user_border_color: Color::Rgb(157, 78, 221),
            ai_bubble_color: Color::Rgb(51, 51, 51),
            ai_text_color: Color::Rgb(224, 224, 224),
            ai_border_color: Color::Rgb(68, 68, 68),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn sender_labels(mut self, user: &'a str, assistant: &'a str) -> Self {
        self.user_label = user;
        self.assistant_label = assistant;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn typing(mut self, typing: Option<&'a str>) -> Self {
        self.typing = typing;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.color("chat.bg_color");
        self.title_color = theme.color("chat.title_color");
        self.input_bg_color = theme.color("chat.input_field_color");
        self.input_text_color = theme.color("chat.input_text_color");
        self.input_border_color = theme.color("chat.input_border_color");
        self.focus_color = theme.color("accent_color");
        self.user_bubble_color = theme.color("chat.user_bubble_color");
        self.user_text_color = theme.color("chat.user_text_color");
        self.user_border_color = theme.color("chat.user_border_color");
        self.ai_bubble_color = theme.color("chat.ai_bubble_color");
        self.ai_text_color = theme.color("chat.ai_text_color");
        self.ai_border_color = theme.color("chat.ai_border_color");
        self
    }

    /// (제목, 대화 기록, 입력 상자) 영역
    fn split(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(INPUT_HEIGHT),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// 대화 기록 전체 줄 (위에서 아래 순서)
    fn transcript_lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let bubble_width = (width * 3 / 4).max(8).min(width);
        let mut lines = Vec::new();

        for message in self.messages {
            let user = message.is_user();
            let (label, text_color, bubble_color, border_color) = if user {
                (
                    self.user_label,
                    self.user_text_color,
                    self.user_bubble_color,
                    self.user_border_color,
                )
            } else {
                (
                    self.assistant_label,
                    self.ai_text_color,
                    self.ai_bubble_color,
                    self.ai_border_color,
                )
            };
            // 사용자 말풍선은 읽기 방향의 끝쪽
            let alignment = match (user, self.rtl) {
                (true, false) | (false, true) => Alignment::Right,
                _ => Alignment::Left,
            };

            lines.push(
                Line::from(vec![
                    Span::styled(
                        label.to_string(),
                        Style::default()
                            .fg(border_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" · {}", message.time_label()),
                        Style::default().fg(self.ai_border_color),
                    ),
                ])
                .alignment(alignment),
            );
            for body in wrap_text(&message.text, bubble_width.saturating_sub(2)) {
                lines.push(
                    Line::from(Span::styled(
                        format!(" {} ", body),
                        Style::default().fg(text_color).bg(bubble_color),
                    ))
                    .alignment(alignment),
                );
            }
            lines.push(Line::from(""));
        }

        if let Some(typing) = self.typing {
            lines.push(Line::from(Span::styled(
                typing.to_string(),
                Style::default()
                    .fg(self.ai_border_color)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }

    /// 스크롤 가능한 최대 줄 수
    pub fn max_scroll(&self, area: Rect) -> usize {
        let (_, transcript, _) = Self::split(area);
        self.transcript_lines(transcript.width)
            .len()
            .saturating_sub(transcript.height as usize)
    }

    /// 입력 커서의 화면 좌표
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (_, _, input) = Self::split(area);
        let inner_width = input.width.saturating_sub(2);
        let offset = (self.input.width_before_cursor() as u16).min(inner_width.saturating_sub(1));
        (input.x + 1 + offset, input.y + 1)
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        if area.height < INPUT_HEIGHT + 2 {
            return;
        }
        let (title_area, transcript_area, input_area) = Self::split(area);

        Paragraph::new(Span::styled(
            format!(" {}", self.title),
            Style::default()
                .fg(self.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        // 아래 기준 스크롤: 마지막 줄이 바닥에 붙는다
        let lines = self.transcript_lines(transcript_area.width);
        let visible = transcript_area.height as usize;
        let max_scroll = lines.len().saturating_sub(visible);
        let scroll = self.scroll.min(max_scroll);
        let start = max_scroll - scroll;
        let shown: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();
        let pad = visible.saturating_sub(shown.len()) as u16;
        let body_area = Rect {
            y: transcript_area.y + pad,
            height: transcript_area.height - pad,
            ..transcript_area
        };
        Paragraph::new(shown).render(body_area, buf);

        let border_color = if self.focused {
            self.focus_color
        } else {
            self.input_border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.input_bg_color));
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let content = if self.input.is_empty() {
            Span::styled(
                self.placeholder.to_string(),
                Style::default()
                    .fg(self.input_border_color)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            // 커서가 보이도록 앞부분을 잘라낸다
            let width = inner.width as usize;
            let before = self.input.width_before_cursor();
            let skip = before.saturating_sub(width.saturating_sub(1));
            let mut skipped = 0;
            let visible: String = self
                .input
                .value()
                .chars()
                .skip_while(|c| {
                    let w = unicode_width::UnicodeWidthChar::width(*c).unwrap_or(1);
                    if skipped < skip {
                        skipped += w;
                        true
                    } else {
                        false
                    }
                })
                .collect();
            Span::styled(visible, Style::default().fg(self.input_text_color))
        };
        Paragraph::new(content).render(inner, buf);
    }
}
