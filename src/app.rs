use crate::core::events::StoreEvent;
use crate::core::observer::SubscriptionId;
use crate::models::{PageId, SidebarNav, TabHost};
use crate::pages::{ChatConfig, Page, PageRegistry};
use crate::ui::{GlyphIconProvider, LayoutManager, LocaleStore, ThemeStore};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

mod input;
mod navigation;

/// 토스트 표시 시간
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 앱 상태
///
/// 스토어는 외부에서 만들어 주입한다. 스토어 변경 알림은 채널로 모아 두었다가
/// 입력/tick 처리 뒤 한 번에 반영한다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    theme: Rc<ThemeStore>,
    locale: Rc<LocaleStore>,
    /// 열린 탭 (페이지 소유)
    tabs: TabHost<Page>,
    /// 사이드바 탐색 상태
    sidebar: SidebarNav,
    registry: PageRegistry,
    icons: GlyphIconProvider,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 스토어 알림 수신함
    inbox: Receiver<StoreEvent>,
    subscriptions: Vec<(StoreKind, SubscriptionId)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreKind {
    Theme,
    Locale,
}

impl App {
    pub fn new(theme: Rc<ThemeStore>, locale: Rc<LocaleStore>, chat: ChatConfig) -> Self {
        let (sender, inbox) = mpsc::channel();

        let theme_sender = sender.clone();
        let theme_sub = theme.subscribe(move |event| {
            theme_sender
                .send(event.clone())
                .map_err(|_| anyhow::anyhow!("app inbox closed"))
        });
        let locale_sub = locale.subscribe(move |event| {
            sender
                .send(event.clone())
                .map_err(|_| anyhow::anyhow!("app inbox closed"))
        });

        let mut layout = LayoutManager::new();
        layout.set_rtl(locale.is_rtl());

        let mut sidebar = SidebarNav::new();
        sidebar.relabel(&locale);

        let mut app = Self {
            should_quit: false,
            layout,
            registry: PageRegistry::new(Rc::clone(&theme), Rc::clone(&locale), chat),
            theme,
            locale,
            tabs: TabHost::new(),
            sidebar,
            icons: GlyphIconProvider::default(),
            toast_message: None,
            inbox,
            subscriptions: vec![(StoreKind::Theme, theme_sub), (StoreKind::Locale, locale_sub)],
        };
        app.navigate(PageId::Home);
        app
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let resources = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        let theme = Rc::new(ThemeStore::new(crate::system::resources::load_themes(Some(
            &resources,
        ))));
        let locale = Rc::new(LocaleStore::from_packs(
            crate::system::resources::load_language_packs(Some(&resources)),
        ));
        let chat = ChatConfig {
            seed: Some(7),
            ..ChatConfig::default()
        };
        Self::new(theme, locale, chat)
    }

    /// 아이콘 제공자 교체 (설정의 아이콘 모드)
    pub fn with_icons(mut self, icons: GlyphIconProvider) -> Self {
        self.icons = icons;
        self
    }

    /// 종료
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &Rc<ThemeStore> {
        &self.theme
    }

    pub fn locale(&self) -> &Rc<LocaleStore> {
        &self.locale
    }

    pub fn tabs(&self) -> &TabHost<Page> {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabHost<Page> {
        &mut self.tabs
    }

    pub fn sidebar(&self) -> &SidebarNav {
        &self.sidebar
    }

    pub fn icons(&self) -> &GlyphIconProvider {
        &self.icons
    }

    /// 이벤트 루프 tick: 페이지 타이머, 스토어 알림, 토스트 만료
    ///
    /// 화면을 다시 그려야 하면 true
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut dirty = false;
        for page in self.tabs.pages_mut() {
            dirty |= page.tick(now);
        }
        dirty |= self.drain_store_events();
        dirty |= self.clear_expired_toast(now);
        dirty
    }

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    fn clear_expired_toast(&mut self, now: Instant) -> bool {
        let expired = self
            .toast_message
            .as_ref()
            .is_some_and(|(_, time)| now.saturating_duration_since(*time) >= TOAST_DURATION);
        if expired {
            self.toast_message = None;
        }
        expired
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < TOAST_DURATION {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for (kind, id) in self.subscriptions.drain(..) {
            match kind {
                StoreKind::Theme => self.theme.unsubscribe(id),
                StoreKind::Locale => self.locale.unsubscribe(id),
            };
        }
    }
}

#[cfg(test)]
mod tests;
