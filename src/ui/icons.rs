// Icon provider - 논리 아이콘 이름을 화면에 그릴 수 있는 아이콘으로 변환
//
// 실제 아이콘 그리기는 외부 제공자 몫이고, 기본 구현은 글리프 테이블이다.

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use serde::{Deserialize, Serialize};

/// 렌더링 가능한 아이콘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: Color,
}

impl Icon {
    pub fn span(&self) -> Span<'static> {
        Span::styled(self.glyph, Style::default().fg(self.color))
    }
}

/// 아이콘 제공자
pub trait IconProvider {
    fn resolve(&self, name: &str, color: Color) -> Icon;
}

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// 유니코드 기호 (기본)
    #[default]
    Unicode,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

/// 글리프 테이블 기반 아이콘 제공자
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIconProvider {
    mode: IconMode,
}

impl GlyphIconProvider {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn glyph(&self, name: &str) -> &'static str {
        match self.mode {
            IconMode::Unicode => match name {
                "home" => "⌂",
                "robot" => "◉",
                "settings" => "⚙",
                "help" => "?",
                "chart-line" => "↗",
                "link" => "∞",
                "target" => "◎",
                "search" => "⌕",
                "activity" => "∿",
                "file-text" => "≣",
                "tool" => "⚒",
                "file" => "▤",
                "send" => "➤",
                _ => "•",
            },
            IconMode::Ascii => match name {
                "home" => "[H]",
                "robot" => "[A]",
                "settings" => "[S]",
                "help" => "[?]",
                "chart-line" => "[~]",
                "link" => "[&]",
                "target" => "[o]",
                "search" => "[/]",
                "activity" => "[^]",
                "file-text" => "[=]",
                "tool" => "[T]",
                "file" => "[F]",
                "send" => ">",
                _ => "*",
            },
        }
    }
}

impl IconProvider for GlyphIconProvider {
    fn resolve(&self, name: &str, color: Color) -> Icon {
        Icon {
            glyph: self.glyph(name),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        let provider = GlyphIconProvider::default();
        let icon = provider.resolve("settings", Color::Red);
        assert_eq!(icon.glyph, "⚙");
        assert_eq!(icon.color, Color::Red);
        assert_eq!(provider.resolve("unknown", Color::Red).glyph, "•");
    }

    #[test]
    fn test_ascii_mode() {
        let provider = GlyphIconProvider::new(IconMode::Ascii);
        assert_eq!(provider.resolve("home", Color::White).glyph, "[H]");
    }
}
