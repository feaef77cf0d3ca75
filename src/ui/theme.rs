use crate::core::events::StoreEvent;
use crate::core::observer::{Observers, SubscriptionId};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// 역할 경로를 찾지 못했을 때 쓰는 기본 강조색
pub const FALLBACK_COLOR: &str = "#9d4edd";

/// 기본 테마 이름
pub const DEFAULT_THEME: &str = "cyber";

/// 테마 노드 (색상 값 또는 하위 그룹)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeNode {
    Value(String),
    Group(BTreeMap<String, ThemeNode>),
}

/// 색상 테마
///
/// UI 영역별 역할 → 색상 문자열의 중첩 테이블.
/// `sidebar.bg_color` 같은 점 구분 경로로 조회한다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    roles: BTreeMap<String, ThemeNode>,
}

impl Theme {
    /// 점 구분 경로로 색상 문자열 조회 (없거나 그룹이면 None)
    pub fn lookup(&self, role_path: &str) -> Option<&str> {
        let mut segments = role_path.split('.');
        let first = segments.next()?;
        let mut node = self.roles.get(first)?;
        for segment in segments {
            node = match node {
                ThemeNode::Group(children) => children.get(segment)?,
                ThemeNode::Value(_) => return None,
            };
        }
        match node {
            ThemeNode::Value(value) => Some(value.as_str()),
            ThemeNode::Group(_) => None,
        }
    }

    /// 색상 문자열 조회, 없으면 기본 강조색
    pub fn resolve(&self, role_path: &str) -> &str {
        self.lookup(role_path).unwrap_or(FALLBACK_COLOR)
    }

    /// 터미널 색상으로 조회
    pub fn color(&self, role_path: &str) -> Color {
        parse_color(self.resolve(role_path))
    }

    /// 표시 이름 (`name` 필드)
    pub fn display_name(&self) -> Option<&str> {
        self.lookup("name")
    }

    /// 정의된 모든 값 경로
    pub fn role_paths(&self) -> Vec<String> {
        fn walk(prefix: &str, node: &ThemeNode, out: &mut Vec<String>) {
            match node {
                ThemeNode::Value(_) => out.push(prefix.to_string()),
                ThemeNode::Group(children) => {
                    for (key, child) in children {
                        walk(&format!("{}.{}", prefix, key), child, out);
                    }
                }
            }
        }

        let mut paths = Vec::new();
        for (key, node) in &self.roles {
            walk(key, node, &mut paths);
        }
        paths
    }

    /// Cyber 테마 (내장 기본값)
    pub fn cyber() -> Self {
        fn group(pairs: &[(&str, &str)]) -> ThemeNode {
            ThemeNode::Group(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), ThemeNode::Value(v.to_string())))
                    .collect(),
            )
        }

        let mut roles = BTreeMap::new();
        roles.insert("name".to_string(), ThemeNode::Value("Cyber".to_string()));
        roles.insert("accent_color".to_string(), ThemeNode::Value("#9d4edd".to_string()));
        roles.insert(
            "hover_accent_color".to_string(),
            ThemeNode::Value("#c77dff".to_string()),
        );
        roles.insert(
            "secondary_color".to_string(),
            ThemeNode::Value("#5390d9".to_string()),
        );
        roles.insert(
            "main".to_string(),
            group(&[
                ("bg_color", "#121212"),
                ("text_color", "#e0e0e0"),
                ("title_color", "#ffffff"),
            ]),
        );
        roles.insert(
            "sidebar".to_string(),
            group(&[
                ("bg_color", "#1a1a1a"),
                ("title_color", "#9d4edd"),
                ("text_color", "#e0e0e0"),
                ("hover_color", "#333333"),
                ("active_color", "#9d4edd33"),
                ("active_text_color", "#ffffff"),
                ("border_color", "#333333"),
                ("icon_color", "#9d4edd"),
                ("glow_color", "#9d4edd80"),
                ("version_color", "#666666"),
            ]),
        );
        roles.insert(
            "tabs".to_string(),
            group(&[
                ("bg_color", "#1a1a1a"),
                ("text_color", "#e0e0e0"),
                ("hover_color", "#333333"),
                ("active_bg_color", "#242424"),
                ("active_text_color", "#ffffff"),
                ("close_hover_color", "#ff000033"),
            ]),
        );
        roles.insert(
            "cards".to_string(),
            group(&[
                ("bg_color", "#242424"),
                ("title_color", "#ffffff"),
                ("text_color", "#e0e0e0"),
                ("border_color", "#333333"),
                ("icon_color", "#9d4edd"),
                ("chart_bg_color", "#1a1a1a"),
                ("shadow_color", "#00000080"),
            ]),
        );
        roles.insert(
            "chat".to_string(),
            group(&[
                ("bg_color", "#1a1a1a"),
                ("title_color", "#ffffff"),
                ("input_bg_color", "#242424"),
                ("input_field_color", "#333333"),
                ("input_text_color", "#e0e0e0"),
                ("input_border_color", "#444444"),
                ("button_icon_color", "#ffffff"),
                ("user_bubble_color", "#9d4edd33"),
                ("user_text_color", "#ffffff"),
                ("user_border_color", "#9d4edd"),
                ("ai_bubble_color", "#333333"),
                ("ai_text_color", "#e0e0e0"),
                ("ai_border_color", "#444444"),
            ]),
        );
        roles.insert(
            "settings".to_string(),
            group(&[
                ("title_color", "#ffffff"),
                ("section_bg_color", "#242424"),
                ("section_title_color", "#ffffff"),
                ("text_color", "#e0e0e0"),
                ("border_color", "#333333"),
                ("control_border_color", "#666666"),
            ]),
        );
        roles.insert(
            "help".to_string(),
            group(&[
                ("title_color", "#ffffff"),
                ("section_bg_color", "#242424"),
                ("section_title_color", "#ffffff"),
                ("text_color", "#e0e0e0"),
                ("border_color", "#333333"),
            ]),
        );

        Self { roles }
    }
}

/// 색상 문자열을 터미널 Color로 변환
///
/// `#rrggbb`, `#rrggbbaa`(알파는 검정 위에 합성), 색상 이름을 지원한다.
pub fn parse_color(value: &str) -> Color {
    if value.starts_with('#') {
        parse_hex_color(value)
    } else {
        parse_named_color(value)
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };

    match hex.len() {
        6 => match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
            _ => Color::Reset,
        },
        8 => match (channel(0..2), channel(2..4), channel(4..6), channel(6..8)) {
            (Some(r), Some(g), Some(b), Some(a)) => {
                let blend = |c: u8| ((c as u16 * a as u16) / 255) as u8;
                Color::Rgb(blend(r), blend(g), blend(b))
            }
            _ => Color::Reset,
        },
        _ => Color::Reset,
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// 테마 스토어
///
/// 이름 있는 테마 목록과 활성 테마를 관리하고 변경 시 구독자에게 알린다.
pub struct ThemeStore {
    themes: Vec<(String, Rc<Theme>)>,
    active: RefCell<String>,
    observers: Observers<StoreEvent>,
}

impl ThemeStore {
    /// 테마 목록으로 생성. 목록이 비어 있으면 내장 Cyber 테마를 사용한다.
    /// 기본 테마가 없으면 첫 번째 테마가 활성 테마가 된다.
    pub fn new(themes: Vec<(String, Theme)>) -> Self {
        let themes: Vec<(String, Rc<Theme>)> = if themes.is_empty() {
            vec![(DEFAULT_THEME.to_string(), Rc::new(Theme::cyber()))]
        } else {
            themes
                .into_iter()
                .map(|(name, theme)| (name, Rc::new(theme)))
                .collect()
        };

        let active = if themes.iter().any(|(name, _)| name == DEFAULT_THEME) {
            DEFAULT_THEME.to_string()
        } else {
            themes[0].0.clone()
        };

        let store = Self {
            themes,
            active: RefCell::new(active),
            observers: Observers::new(),
        };
        store.warn_missing_roles();
        store
    }

    /// 내장 Cyber 테마만 가진 스토어
    pub fn builtin() -> Self {
        Self::new(Vec::new())
    }

    /// 활성 테마 이름
    pub fn active(&self) -> String {
        self.active.borrow().clone()
    }

    /// 활성 테마 데이터
    pub fn current(&self) -> Rc<Theme> {
        self.get(&self.active.borrow())
            .unwrap_or_else(|| Rc::new(Theme::cyber()))
    }

    pub fn get(&self, name: &str) -> Option<Rc<Theme>> {
        self.themes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, theme)| Rc::clone(theme))
    }

    /// 테마 전환
    ///
    /// 알 수 없는 이름이거나 현재 테마와 같으면 false (알림 없음).
    pub fn set_active(&self, name: &str) -> bool {
        let Some(theme) = self.get(name) else {
            tracing::warn!(theme = name, "theme not found");
            return false;
        };
        if *self.active.borrow() == name {
            return false;
        }

        *self.active.borrow_mut() = name.to_string();
        tracing::info!(theme = name, "theme changed");

        let event = StoreEvent::Theme {
            name: name.to_string(),
            theme,
        };
        self.observers.notify(event.kind(), &event);
        true
    }

    /// 활성 테마에서 색상 문자열 조회 (없으면 기본 강조색)
    pub fn resolve(&self, role_path: &str) -> String {
        self.current().resolve(role_path).to_string()
    }

    /// 활성 테마에서 터미널 색상 조회
    pub fn color(&self, role_path: &str) -> Color {
        self.current().color(role_path)
    }

    /// 사용 가능한 테마 이름 (정의 순서)
    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|(name, _)| name.clone()).collect()
    }

    /// 테마 표시 이름
    pub fn display_name(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|theme| theme.display_name().map(str::to_string))
    }

    /// 설정 화면 미리보기 색상
    pub fn preview_color(&self, name: &str) -> Color {
        self.get(name)
            .map(|theme| theme.color("accent_color"))
            .unwrap_or_else(|| parse_color(FALLBACK_COLOR))
    }

    /// 기본 테마 대비 누락된 역할 경로
    pub fn missing_roles(&self, name: &str) -> Vec<String> {
        let Some(theme) = self.get(name) else {
            return Vec::new();
        };
        Theme::cyber()
            .role_paths()
            .into_iter()
            .filter(|path| theme.lookup(path).is_none())
            .collect()
    }

    fn warn_missing_roles(&self) {
        for (name, _) in &self.themes {
            let missing = self.missing_roles(name);
            if !missing.is_empty() {
                tracing::warn!(
                    theme = %name,
                    missing = %missing.join(", "),
                    "theme is missing roles, fallback color will be used"
                );
            }
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) -> anyhow::Result<()> + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn matrix() -> Theme {
        let json = r##"{
            "name": "Matrix",
            "accent_color": "#00ff41",
            "main": { "bg_color": "#0d0208" }
        }"##;
        serde_json::from_str(json).unwrap()
    }

    fn store() -> ThemeStore {
        ThemeStore::new(vec![
            ("cyber".to_string(), Theme::cyber()),
            ("matrix".to_string(), matrix()),
        ])
    }

    #[test]
    fn test_cyber_theme_creation() {
        let theme = Theme::cyber();
        assert_eq!(theme.resolve("main.bg_color"), "#121212");
        assert_eq!(theme.color("main.bg_color"), Color::Rgb(18, 18, 18));
        assert_eq!(theme.display_name(), Some("Cyber"));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        // 알파는 검정 위에 합성
        assert_eq!(parse_color("#ff000080"), Color::Rgb(128, 0, 0));
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("#123"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("White"), Color::White);
    }

    #[test]
    fn test_resolve_unknown_path_returns_fallback() {
        let store = store();
        for name in store.names() {
            store.set_active(&name);
            assert_eq!(store.resolve("nonexistent.path"), FALLBACK_COLOR);
            // 그룹 자체를 가리키는 경로도 fallback
            assert_eq!(store.resolve("main"), FALLBACK_COLOR);
            // 값 아래로 더 내려가는 경로도 fallback
            assert_eq!(store.resolve("accent_color.extra"), FALLBACK_COLOR);
        }
    }

    #[test]
    fn test_cyber_to_matrix_scenario() {
        let store = store();
        assert_eq!(store.active(), "cyber");

        let notified = Rc::new(RefCell::new(Vec::new()));
        {
            let notified = Rc::clone(&notified);
            store.subscribe(move |event| {
                if let StoreEvent::Theme { name, theme } = event {
                    notified
                        .borrow_mut()
                        .push((name.clone(), theme.resolve("accent_color").to_string()));
                }
                Ok(())
            });
        }

        assert!(store.set_active("matrix"));
        assert_eq!(
            *notified.borrow(),
            vec![("matrix".to_string(), "#00ff41".to_string())]
        );

        assert!(!store.set_active("matrix"));
        assert_eq!(notified.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let store = store();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| {
                calls.set(calls.get() + 1);
                Ok(())
            });
        }
        assert!(!store.set_active("neon"));
        assert_eq!(store.active(), "cyber");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_roles_fall_back() {
        let store = store();
        assert!(store.missing_roles("cyber").is_empty());
        let missing = store.missing_roles("matrix");
        assert!(missing.contains(&"sidebar.bg_color".to_string()));

        store.set_active("matrix");
        assert_eq!(store.resolve("sidebar.bg_color"), FALLBACK_COLOR);
        assert_eq!(store.resolve("main.bg_color"), "#0d0208");
    }

    #[test]
    fn test_empty_theme_list_uses_builtin() {
        let store = ThemeStore::builtin();
        assert_eq!(store.names(), vec!["cyber".to_string()]);
        assert_eq!(store.display_name("cyber").as_deref(), Some("Cyber"));
        assert_eq!(store.preview_color("cyber"), Color::Rgb(157, 78, 221));
    }

    #[test]
    fn test_failing_observer_does_not_corrupt_state() {
        let store = store();
        let delivered = Rc::new(Cell::new(false));
        store.subscribe(|_| Err(anyhow::anyhow!("render failed")));
        {
            let delivered = Rc::clone(&delivered);
            store.subscribe(move |_| {
                delivered.set(true);
                Ok(())
            });
        }

        assert!(store.set_active("matrix"));
        assert!(delivered.get());
        assert_eq!(store.active(), "matrix");
    }
}
