use crate::core::events::StoreEvent;
use crate::core::observer::{Observers, SubscriptionId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Turkish,
    Arabic,
    Russian,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Turkish,
        Language::Arabic,
        Language::Russian,
        Language::Chinese,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::Chinese => "cn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// 자국어 표기 이름
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Turkish => "Türkçe",
            Language::Arabic => "العربية",
            Language::Russian => "Русский",
            Language::Chinese => "中文",
        }
    }

    /// 오른쪽에서 왼쪽으로 쓰는 언어인지
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }
}

/// 언어 팩 (평면 키 → 번역 문자열)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePack {
    code: String,
    entries: HashMap<String, String>,
}

impl LanguagePack {
    pub fn new(code: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            code: code.into(),
            entries,
        }
    }

    /// 빈 언어 팩 (파일 로드 실패 시)
    pub fn empty(code: impl Into<String>) -> Self {
        Self::new(code, HashMap::new())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 번역 조회: 팩 값 → 기본값 → 키 자체
    pub fn text(&self, key: &str, default: Option<&str>) -> String {
        self.get(key).or(default).unwrap_or(key).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `{name}` 자리표시자 치환
pub fn format_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

/// 언어 스토어
///
/// 지원 언어별 팩과 활성 언어를 보관하고, 변경 시 구독자에게 알린다.
pub struct LocaleStore {
    packs: Vec<(Language, Rc<LanguagePack>)>,
    active: RefCell<Language>,
    observers: Observers<StoreEvent>,
}

impl LocaleStore {
    /// 팩 목록으로 생성. 지원하지 않는 코드의 팩은 무시하고,
    /// 빠진 지원 언어는 빈 팩으로 채운다.
    pub fn from_packs(packs: Vec<LanguagePack>) -> Self {
        let mut by_code: HashMap<String, LanguagePack> = packs
            .into_iter()
            .map(|pack| (pack.code.clone(), pack))
            .collect();

        for code in by_code.keys() {
            if Language::from_code(code).is_none() {
                tracing::warn!(code = %code, "ignoring unsupported language pack");
            }
        }

        let packs = Language::ALL
            .into_iter()
            .map(|lang| {
                let pack = by_code
                    .remove(lang.code())
                    .unwrap_or_else(|| LanguagePack::empty(lang.code()));
                (lang, Rc::new(pack))
            })
            .collect();

        Self {
            packs,
            active: RefCell::new(Language::default()),
            observers: Observers::new(),
        }
    }

    /// 모든 언어를 빈 팩으로 생성 (리소스가 없을 때)
    pub fn builtin() -> Self {
        Self::from_packs(Vec::new())
    }

    /// 활성 언어 코드
    pub fn active(&self) -> &'static str {
        self.active.borrow().code()
    }

    pub fn active_language(&self) -> Language {
        *self.active.borrow()
    }

    /// 활성 언어 변경
    ///
    /// 알 수 없는 코드이거나 현재 언어와 같으면 false (알림 없음).
    pub fn set_active(&self, code: &str) -> bool {
        let Some(language) = Language::from_code(code) else {
            tracing::warn!(code, "language not available");
            return false;
        };
        if language == *self.active.borrow() {
            return false;
        }

        *self.active.borrow_mut() = language;
        tracing::info!(code, "language changed");

        let event = StoreEvent::Language {
            code: code.to_string(),
            pack: self.active_pack(),
        };
        self.observers.notify(event.kind(), &event);
        true
    }

    /// 활성 언어 팩
    pub fn active_pack(&self) -> Rc<LanguagePack> {
        let active = *self.active.borrow();
        self.packs
            .iter()
            .find(|(lang, _)| *lang == active)
            .map(|(_, pack)| Rc::clone(pack))
            .unwrap_or_else(|| Rc::new(LanguagePack::empty(active.code())))
    }

    /// 번역 조회: 활성 팩 값 → `default` → 키 자체
    pub fn text(&self, key: &str, default: Option<&str>) -> String {
        self.active_pack().text(key, default)
    }

    /// 번역 후 `{name}` 자리표시자 치환
    pub fn format(&self, key: &str, default: &str, args: &[(&str, &str)]) -> String {
        format_placeholders(&self.text(key, Some(default)), args)
    }

    pub fn is_rtl(&self) -> bool {
        self.active.borrow().is_rtl()
    }

    /// 지원 언어 목록 (표시 순서)
    pub fn languages(&self) -> Vec<Language> {
        self.packs.iter().map(|(lang, _)| *lang).collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pack(code: &str, pairs: &[(&str, &str)]) -> LanguagePack {
        LanguagePack::new(
            code,
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn store() -> LocaleStore {
        LocaleStore::from_packs(vec![
            pack("en", &[("settings.title", "Settings")]),
            pack("tr", &[("settings.title", "Ayarlar")]),
            pack("ar", &[("settings.title", "الإعدادات")]),
        ])
    }

    #[test]
    fn test_default_language_is_english() {
        let store = store();
        assert_eq!(store.active(), "en");
        assert!(!store.is_rtl());
        assert_eq!(store.languages().len(), 5);
    }

    #[test]
    fn test_text_fallbacks() {
        let store = store();
        assert_eq!(store.text("settings.title", None), "Settings");
        assert_eq!(store.text("nonexistent.key", Some("D")), "D");
        assert_eq!(store.text("nonexistent.key", None), "nonexistent.key");
    }

    #[test]
    fn test_set_active_notifies_once() {
        let store = store();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let calls = Rc::clone(&calls);
            let seen = Rc::clone(&seen);
            store.subscribe(move |event| {
                calls.set(calls.get() + 1);
                if let StoreEvent::Language { code, pack } = event {
                    *seen.borrow_mut() = format!("{}:{}", code, pack.text("settings.title", None));
                }
                Ok(())
            });
        }

        assert!(store.set_active("tr"));
        assert_eq!(calls.get(), 1);
        assert_eq!(*seen.borrow(), "tr:Ayarlar");

        assert!(!store.set_active("tr"));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.text("settings.title", None), "Ayarlar");
    }

    #[test]
    fn test_unknown_code_rejected() {
        let store = store();
        assert!(!store.set_active("de"));
        assert_eq!(store.active(), "en");
    }

    #[test]
    fn test_rtl_flag() {
        let store = store();
        assert!(store.set_active("ar"));
        assert!(store.is_rtl());
        assert!(store.set_active("ru"));
        assert!(!store.is_rtl());
    }

    #[test]
    fn test_missing_pack_is_empty_but_selectable() {
        let store = store();
        assert!(store.set_active("cn"));
        assert!(store.active_pack().is_empty());
        assert_eq!(store.text("settings.title", Some("Settings")), "Settings");
    }

    #[test]
    fn test_format_placeholders() {
        let store = LocaleStore::from_packs(vec![pack(
            "en",
            &[("card.placeholder", "This is the {title} page content.")],
        )]);
        assert_eq!(
            store.format("card.placeholder", "", &[("title", "Reports")]),
            "This is the Reports page content."
        );
        assert_eq!(format_placeholders("{a}-{b}", &[("a", "1")]), "1-{b}");
    }
}
