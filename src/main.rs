mod app;
mod core;
mod models;
mod pages;
mod system;
mod ui;
mod utils;

use app::App;
use core::actions::generate_command_bar_items;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pages::dashboard::GRID_COLUMNS;
use pages::help::help_sections;
use pages::{ChatConfig, ChatPage, Page};
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Color, Frame, Terminal};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use system::resources::{find_resources_dir, load_language_packs, load_themes};
use system::AppConfig;
use ui::components::{
    CardGrid, CardTile, ChatView, CommandBar, HelpView, Placeholder, SettingsView, Sidebar,
    StatusBar, TabBar, TabLabel, WarningScreen,
};
use ui::{
    FocusArea, GlyphIconProvider, IconProvider, LocaleStore, Theme, ThemeStore, MIN_HEIGHT,
    MIN_WIDTH,
};
use utils::error::Result;

fn main() -> Result<()> {
    let loaded = AppConfig::load();
    let config = &loaded.config;
    match system::logging::init(config) {
        Ok(path) => {
            system::logging::install_panic_hook();
            tracing::info!(log = %path.display(), "NovaSEO starting");
        }
        Err(err) => eprintln!("logging disabled: {:#}", err),
    }
    loaded.log_warning();

    // 리소스 로드 (실패해도 내장 테마/빈 언어 팩으로 계속)
    let resources_dir = find_resources_dir(&config.resource_candidates());
    let theme = Rc::new(ThemeStore::new(load_themes(resources_dir.as_deref())));
    let locale = Rc::new(LocaleStore::from_packs(load_language_packs(
        resources_dir.as_deref(),
    )));

    let chat = ChatConfig {
        reply_delay: config.reply_delay(),
        reply_mode: config.reply_mode,
        seed: None,
    };
    let mut app =
        App::new(theme, locale, chat).with_icons(GlyphIconProvider::new(config.icon_mode));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, config.tick_rate());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("NovaSEO stopped");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            // 레이아웃 업데이트
            app.layout.update(f.area());

            if app.layout.is_too_small() {
                render_warning(f, app);
            } else {
                render_main_ui(f, app);
            }
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.modifiers, key.code, Instant::now());
                }
            }
        }

        // 채팅 응답, 스토어 알림, 토스트 만료
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn render_warning(f: &mut Frame, app: &App) {
    let locale = app.locale();
    let (width, height) = app.layout.terminal_size();
    let title = locale.text("warning.title", Some("Terminal Too Small"));
    let current = locale.format(
        "warning.current",
        "Current: {width}x{height}",
        &[
            ("width", width.to_string().as_str()),
            ("height", height.to_string().as_str()),
        ],
    );
    let required = locale.format(
        "warning.required",
        "Required: {width}x{height}",
        &[
            ("width", MIN_WIDTH.to_string().as_str()),
            ("height", MIN_HEIGHT.to_string().as_str()),
        ],
    );
    let warning = WarningScreen::new()
        .current_size(width, height)
        .labels(&title, current, required)
        .theme(&app.theme().current());
    f.render_widget(warning, app.layout.areas().warning);
}

fn render_main_ui(f: &mut Frame, app: &mut App) {
    let theme = app.theme().current();
    let theme_store = Rc::clone(app.theme());
    let locale = Rc::clone(app.locale());
    let icons = *app.icons();
    let areas = app.layout.areas().clone();
    let focus = app.layout.focus();
    let rtl = app.layout.is_rtl();

    // 사이드바
    let title = locale.text("sidebar.title", Some("NovaSEO"));
    let version = locale.text(
        "sidebar.version",
        Some(concat!("v", env!("CARGO_PKG_VERSION"))),
    );
    let sidebar = Sidebar::new(app.sidebar().entries(), &icons)
        .title(&title)
        .version(&version)
        .selected(app.sidebar().selected_index())
        .focused(focus == FocusArea::Sidebar)
        .compact(app.layout.is_compact())
        .rtl(rtl)
        .theme(&theme);
    f.render_widget(sidebar, areas.sidebar);

    // 탭 바
    let tab_labels: Vec<TabLabel> = app
        .tabs()
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| TabLabel {
            icon: icons.resolve(tab.icon, theme.color("sidebar.icon_color")),
            title: tab.title.clone(),
            closable: index > 0,
        })
        .collect();
    let tab_bar = TabBar::new(&tab_labels)
        .current(app.tabs().current_index())
        .theme(&theme);
    f.render_widget(tab_bar, areas.tab_bar);

    // 페이지 내용
    let content_focused = focus == FocusArea::Content;
    let context = PageContext {
        theme: &theme,
        theme_store: &theme_store,
        locale: &locale,
        icons: &icons,
        focused: content_focused,
        rtl,
    };
    if let Some(page) = app.tabs_mut().current_page_mut() {
        render_page(f, page, areas.content, &context);
    }

    // 상태바
    let active_theme = theme_store.active();
    let theme_name = locale.text(
        &format!("settings.themes.{}", active_theme),
        theme.display_name(),
    );
    let theme_label = format!(
        "{}: {}",
        locale.text("status.theme", Some("Theme")),
        theme_name
    );
    let language_label = format!(
        "{}: {}",
        locale.text("status.language", Some("Language")),
        locale.active_language().display_name()
    );
    let status_bar = StatusBar::new()
        .message(app.toast_display())
        .tab_position(app.tabs().current_index() + 1, app.tabs().tab_count())
        .theme_label(&theme_label)
        .language_label(&language_label)
        .theme(&theme);
    f.render_widget(status_bar, areas.status_bar);

    // 커맨드 바
    let commands = generate_command_bar_items(&locale);
    f.render_widget(CommandBar::new(&commands).theme(&theme), areas.command_bar);
}

/// 페이지 렌더링에 필요한 공용 값
struct PageContext<'a> {
    theme: &'a Theme,
    theme_store: &'a ThemeStore,
    locale: &'a LocaleStore,
    icons: &'a GlyphIconProvider,
    focused: bool,
    rtl: bool,
}

fn render_page(f: &mut Frame, page: &mut Page, area: Rect, ctx: &PageContext) {
    let locale = ctx.locale;
    match page {
        Page::Dashboard(dashboard) => {
            let icon_color = ctx.theme.color("cards.icon_color");
            let tiles: Vec<CardTile> = dashboard
                .cards()
                .iter()
                .map(|card| CardTile {
                    icon: ctx.icons.resolve(card.icon, icon_color),
                    title: locale.text(&card.title_key(), Some(card.card_type.default_title())),
                    description: locale.text(
                        &card.description_key(),
                        Some(card.card_type.default_description()),
                    ),
                })
                .collect();
            let title = locale.text("dashboard.title", Some("Dashboard"));
            let empty = locale.text("dashboard.chart_empty", Some("No data yet"));
            let grid = CardGrid::new(&tiles)
                .columns(GRID_COLUMNS)
                .selected(dashboard.selected_index())
                .focused(ctx.focused)
                .page_title(&title)
                .empty_chart_label(&empty)
                .theme(ctx.theme);
            f.render_widget(grid, area);
        }
        Page::Chat(chat) => render_chat(f, chat, area, ctx),
        Page::Settings(settings) => {
            let labels = settings.labels();
            let previews: Vec<Color> = labels
                .themes
                .iter()
                .map(|option| ctx.theme_store.preview_color(&option.id))
                .collect();
            let active_theme = settings.active_theme();
            let view = SettingsView::new(&labels)
                .active(&active_theme, settings.active_language())
                .previews(&previews)
                .focus(settings.focus())
                .focused(ctx.focused)
                .theme(ctx.theme);
            f.render_widget(view, area);
        }
        Page::Help(help) => {
            let title = locale.text("help.title", Some("Help & Documentation"));
            let sections = help_sections(locale);
            let max = HelpView::new(&title, &sections).max_scroll(area);
            help.clamp_scroll(max);
            let view = HelpView::new(&title, &sections)
                .scroll(help.scroll())
                .theme(ctx.theme);
            f.render_widget(view, area);
        }
        Page::CardDetail(detail) => {
            let icon = ctx
                .icons
                .resolve(detail.card().icon(), ctx.theme.color("cards.icon_color"));
            let title = detail.title(locale);
            let message = detail.placeholder(locale);
            f.render_widget(
                Placeholder::new(icon, &title, &message).theme(ctx.theme),
                area,
            );
        }
    }
}

/// 채팅 화면 문구 (현재 언어)
struct ChatLabels {
    title: String,
    user: String,
    assistant: String,
    placeholder: String,
    typing: String,
}

impl ChatLabels {
    fn new(locale: &LocaleStore) -> Self {
        Self {
            title: locale.text("ai.title", Some("Nova AI Assistant")),
            user: locale.text("ai.you", Some("You")),
            assistant: locale.text("ai.assistant", Some("Nova")),
            placeholder: locale.text("ai.input_placeholder", Some("Type your message here...")),
            typing: locale.text("ai.typing", Some("Nova is typing...")),
        }
    }
}

fn chat_view<'a>(chat: &'a ChatPage, labels: &'a ChatLabels, ctx: &PageContext) -> ChatView<'a> {
    ChatView::new(chat.transcript().messages(), chat.input())
        .title(&labels.title)
        .sender_labels(&labels.user, &labels.assistant)
        .placeholder(&labels.placeholder)
        .typing(chat.is_typing().then_some(labels.typing.as_str()))
        .scroll(chat.scroll())
        .focused(ctx.focused)
        .rtl(ctx.rtl)
        .theme(ctx.theme)
}

fn render_chat(f: &mut Frame, chat: &mut ChatPage, area: Rect, ctx: &PageContext) {
    let labels = ChatLabels::new(ctx.locale);

    // 내용이 줄었을 수 있으므로 스크롤 보정 후 그린다
    let max = chat_view(chat, &labels, ctx).max_scroll(area);
    chat.clamp_scroll(max);

    let view = chat_view(chat, &labels, ctx);
    let cursor = view.cursor_position(area);
    f.render_widget(view, area);
    if ctx.focused {
        f.set_cursor_position(cursor);
    }
}
