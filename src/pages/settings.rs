//! 설정 페이지 - 테마/언어 선택
//!
//! 선택은 곧바로 스토어에 반영된다. 옵션 레이블은 언어가 바뀔 때
//! 구독 콜백에서 다시 번역한다 (옵션 식별자는 그대로).

use crate::core::events::StoreEvent;
use crate::core::observer::SubscriptionId;
use crate::ui::{LocaleStore, ThemeStore};
use crate::utils::display::capitalize;
use std::cell::RefCell;
use std::rc::Rc;

/// 포커스된 설정 섹션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    Theme,
    Language,
}

/// 선택지 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOption {
    pub id: String,
    pub label: String,
}

/// 현재 언어로 번역된 레이블 모음
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsLabels {
    pub title: String,
    pub theme_title: String,
    pub language_title: String,
    pub hint: String,
    pub themes: Vec<SettingsOption>,
    pub languages: Vec<SettingsOption>,
}

impl SettingsLabels {
    fn build(theme: &ThemeStore, locale: &LocaleStore) -> Self {
        let themes = theme
            .names()
            .into_iter()
            .map(|id| {
                let fallback = theme
                    .display_name(&id)
                    .unwrap_or_else(|| capitalize(&id));
                let label = locale.text(&format!("settings.themes.{}", id), Some(fallback.as_str()));
                SettingsOption { id, label }
            })
            .collect();

        // 언어 이름은 항상 자국어 표기
        let languages = locale
            .languages()
            .into_iter()
            .map(|language| SettingsOption {
                id: language.code().to_string(),
                label: language.display_name().to_string(),
            })
            .collect();

        Self {
            title: locale.text("settings.title", Some("Settings")),
            theme_title: locale.text("settings.theme", Some("Theme")),
            language_title: locale.text("settings.language", Some("Language")),
            hint: locale.text("settings.hint", Some("↑/↓ choose section · ←/→ change option")),
            themes,
            languages,
        }
    }
}

pub struct SettingsPage {
    theme: Rc<ThemeStore>,
    locale: Rc<LocaleStore>,
    focus: SettingsSection,
    labels: Rc<RefCell<SettingsLabels>>,
    subscription: SubscriptionId,
}

impl SettingsPage {
    pub fn new(theme: Rc<ThemeStore>, locale: Rc<LocaleStore>) -> Self {
        let labels = Rc::new(RefCell::new(SettingsLabels::build(&theme, &locale)));

        let subscription = {
            let labels = Rc::clone(&labels);
            let theme = Rc::clone(&theme);
            // 스토어 -> 콜백 -> 스토어 순환 방지
            let weak_locale = Rc::downgrade(&locale);
            locale.subscribe(move |event| {
                if let StoreEvent::Language { .. } = event {
                    if let Some(locale) = weak_locale.upgrade() {
                        *labels.borrow_mut() = SettingsLabels::build(&theme, &locale);
                    }
                }
                Ok(())
            })
        };

        Self {
            theme,
            locale,
            focus: SettingsSection::default(),
            labels,
            subscription,
        }
    }

    pub fn labels(&self) -> SettingsLabels {
        self.labels.borrow().clone()
    }

    pub fn focus(&self) -> SettingsSection {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SettingsSection::Theme => SettingsSection::Language,
            SettingsSection::Language => SettingsSection::Theme,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus_next();
    }

    pub fn active_theme(&self) -> String {
        self.theme.active()
    }

    pub fn active_language(&self) -> &'static str {
        self.locale.active()
    }

    /// 테마 선택 (스토어로 그대로 전달)
    pub fn select_theme(&self, id: &str) -> bool {
        self.theme.set_active(id)
    }

    /// 언어 선택 (스토어로 그대로 전달)
    pub fn select_language(&self, code: &str) -> bool {
        self.locale.set_active(code)
    }

    /// 포커스된 선택기의 다음 옵션 선택
    pub fn select_next_option(&self) -> bool {
        self.step_option(1)
    }

    /// 포커스된 선택기의 이전 옵션 선택
    pub fn select_prev_option(&self) -> bool {
        self.step_option(-1)
    }

    fn step_option(&self, delta: isize) -> bool {
        match self.focus {
            SettingsSection::Theme => {
                let names = self.theme.names();
                let active = self.theme.active();
                match step(&names, |name| *name == active, delta) {
                    Some(next) => self.select_theme(&next),
                    None => false,
                }
            }
            SettingsSection::Language => {
                let codes: Vec<&'static str> =
                    self.locale.languages().into_iter().map(|l| l.code()).collect();
                let active = self.locale.active();
                match step(&codes, |code| *code == active, delta) {
                    Some(next) => self.select_language(next),
                    None => false,
                }
            }
        }
    }
}

/// 현재 항목에서 delta만큼 떨어진 항목 (순환)
fn step<T: Clone>(items: &[T], is_current: impl Fn(&T) -> bool, delta: isize) -> Option<T> {
    if items.len() < 2 {
        return None;
    }
    let current = items.iter().position(is_current).unwrap_or(0) as isize;
    let len = items.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    items.get(next).cloned()
}

impl Drop for SettingsPage {
    fn drop(&mut self) {
        self.locale.unsubscribe(self.subscription);
    }
}
