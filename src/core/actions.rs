//! 액션 시스템 - 셸 전역 키 바인딩의 단일 진실 원천
//!
//! 키 바인딩, 커맨드바 항목, 도움말 단축키 목록이
//! 이 모듈의 레지스트리를 참조한다. 페이지 내부 키(Enter, 방향키, 문자 입력)는
//! 각 페이지 입력 핸들러가 처리한다.

use crate::models::PageId;
use crate::ui::components::command_bar::CommandItem;
use crate::ui::LocaleStore;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 셸 수준 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NavigateHome,
    NavigateAi,
    NavigateSettings,
    NavigateHelp,
    // Tabs
    NextTab,
    PrevTab,
    CloseTab,
    /// 번호로 탭 선택 (0부터)
    SelectTab(usize),
    // Focus
    ToggleFocus,
    // System
    Quit,
}

impl Action {
    /// 사이드바 페이지 이동 액션이면 대상 페이지
    pub fn target_page(self) -> Option<PageId> {
        match self {
            Action::NavigateHome => Some(PageId::Home),
            Action::NavigateAi => Some(PageId::Ai),
            Action::NavigateSettings => Some(PageId::Settings),
            Action::NavigateHelp => Some(PageId::Help),
            _ => None,
        }
    }
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Tabs,
    System,
}

impl ActionCategory {
    fn key(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "help.keys.navigation",
            ActionCategory::Tabs => "help.keys.tabs",
            ActionCategory::System => "help.keys.system",
        }
    }

    fn default_label(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Tabs => "Tabs",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::NavigateHome,
        id: "home",
        label: "Dashboard",
        category: ActionCategory::Navigation,
        shortcut_display: Some("F1"),
        command_bar: Some(CommandBarEntry {
            key: "F1",
            label: "Home",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::NavigateAi,
        id: "ai",
        label: "AI Assistant",
        category: ActionCategory::Navigation,
        shortcut_display: Some("F2"),
        command_bar: Some(CommandBarEntry {
            key: "F2",
            label: "AI",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::NavigateSettings,
        id: "settings",
        label: "Settings",
        category: ActionCategory::Navigation,
        shortcut_display: Some("F3"),
        command_bar: Some(CommandBarEntry {
            key: "F3",
            label: "Settings",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::NavigateHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::Navigation,
        shortcut_display: Some("F4"),
        command_bar: Some(CommandBarEntry {
            key: "F4",
            label: "Help",
            priority: 13,
        }),
    },
    ActionDef {
        action: Action::ToggleFocus,
        id: "focus",
        label: "Sidebar / content",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Focus",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::NextTab,
        id: "next_tab",
        label: "Next tab",
        category: ActionCategory::Tabs,
        shortcut_display: Some("^→ / ^PgDn"),
        command_bar: Some(CommandBarEntry {
            key: "^←/→",
            label: "Tabs",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::PrevTab,
        id: "prev_tab",
        label: "Previous tab",
        category: ActionCategory::Tabs,
        shortcut_display: Some("^← / ^PgUp"),
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectTab(0),
        id: "select_tab",
        label: "Go to tab 1-9",
        category: ActionCategory::Tabs,
        shortcut_display: Some("Alt+1..9"),
        command_bar: None,
    },
    ActionDef {
        action: Action::CloseTab,
        id: "close_tab",
        label: "Close tab",
        category: ActionCategory::Tabs,
        shortcut_display: Some("^W"),
        command_bar: Some(CommandBarEntry {
            key: "^W",
            label: "Close",
            priority: 31,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("^Q / F10"),
        command_bar: Some(CommandBarEntry {
            key: "F10",
            label: "Quit",
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::F(10),
            modifiers: None,
            action: Action::Quit,
        },
        // 페이지 이동
        KeyBinding {
            code: KeyCode::F(1),
            modifiers: None,
            action: Action::NavigateHome,
        },
        KeyBinding {
            code: KeyCode::F(2),
            modifiers: None,
            action: Action::NavigateAi,
        },
        KeyBinding {
            code: KeyCode::F(3),
            modifiers: None,
            action: Action::NavigateSettings,
        },
        KeyBinding {
            code: KeyCode::F(4),
            modifiers: None,
            action: Action::NavigateHelp,
        },
        // 포커스
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::ToggleFocus,
        },
        KeyBinding {
            code: KeyCode::BackTab,
            modifiers: None,
            action: Action::ToggleFocus,
        },
        // 탭
        KeyBinding {
            code: KeyCode::Right,
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::NextTab,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::NextTab,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PrevTab,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PrevTab,
        },
        KeyBinding {
            code: KeyCode::Char('w'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::CloseTab,
        },
    ];

    // Alt+1 ~ Alt+9
    bindings.extend(('1'..='9').enumerate().map(|(index, digit)| KeyBinding {
        code: KeyCode::Char(digit),
        modifiers: Some(KeyModifiers::ALT),
        action: Action::SelectTab(index),
    }));

    bindings
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true, // any modifier
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

fn localized_label(locale: &LocaleStore, id: &str, fallback: &str) -> String {
    locale.text(&format!("command.{}", id), Some(fallback))
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items(locale: &LocaleStore) -> Vec<CommandItem> {
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| CommandItem::new(cb.key, localized_label(locale, def.id, cb.label)))
        .collect()
}

/// 도움말 페이지용 단축키 목록
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries(locale: &LocaleStore) -> Vec<(String, Vec<(&'static str, String)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Tabs,
        ActionCategory::System,
    ]
    .into_iter()
    .map(|category| {
        let items: Vec<(&'static str, String)> = ACTION_DEFS
            .iter()
            .filter(|d| d.category == category)
            .filter_map(|d| {
                d.shortcut_display
                    .map(|keys| (keys, localized_label(locale, &format!("{}_long", d.id), d.label)))
            })
            .collect();
        (
            locale.text(category.key(), Some(category.default_label())),
            items,
        )
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}
