use super::*;
use crate::models::{CardType, PageKey};
use crate::pages::ChatPage;
use crate::ui::FocusArea;
use crossterm::event::{KeyCode, KeyModifiers};

fn make_test_app() -> App {
    App::new_for_test()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyModifiers::NONE, code, Instant::now());
}

fn press_ctrl(app: &mut App, c: char) {
    app.handle_key(KeyModifiers::CONTROL, KeyCode::Char(c), Instant::now());
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        app.handle_key(KeyModifiers::NONE, KeyCode::Char(c), now);
    }
}

fn current_chat(app: &App) -> &ChatPage {
    match app.tabs().current().map(|tab| &tab.page) {
        Some(Page::Chat(chat)) => chat,
        other => panic!("current page is not chat: {:?}", other),
    }
}

fn keys(app: &App) -> Vec<PageKey> {
    app.tabs().tabs().iter().map(|tab| tab.key).collect()
}

#[test]
fn test_starts_on_dashboard() {
    let app = make_test_app();
    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.tabs().titles(), vec!["Dashboard"]);
    assert_eq!(app.sidebar().active(), Some(PageId::Home));
    assert!(!app.should_quit());
}

/// Home → AI → Home: 탭은 2개, 다시 0번 탭
#[test]
fn test_home_ai_home_scenario() {
    let mut app = make_test_app();

    press(&mut app, KeyCode::F(2));
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().current_index(), 1);
    assert_eq!(app.sidebar().active(), Some(PageId::Ai));

    press(&mut app, KeyCode::F(1));
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().current_index(), 0);
    assert_eq!(app.sidebar().active(), Some(PageId::Home));
}

#[test]
fn test_close_middle_of_three_tabs() {
    let mut app = make_test_app();
    app.navigate(PageId::Ai);
    app.navigate(PageId::Settings);

    app.close_tab(1);

    assert_eq!(
        keys(&app),
        vec![
            PageKey::Primary(PageId::Home),
            PageKey::Primary(PageId::Settings)
        ]
    );
    assert_eq!(app.tabs().current_index(), 1);
    assert_eq!(app.sidebar().active(), Some(PageId::Settings));
}

#[test]
fn test_first_tab_is_protected() {
    let mut app = make_test_app();
    press_ctrl(&mut app, 'w');

    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.toast_display(), Some("The first tab cannot be closed"));
}

#[test]
fn test_closing_current_tab_moves_to_neighbor() {
    let mut app = make_test_app();
    app.navigate(PageId::Ai);
    app.navigate(PageId::Help);

    press_ctrl(&mut app, 'w');
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().current_index(), 1);
    assert_eq!(app.sidebar().active(), Some(PageId::Ai));
}

#[test]
fn test_tab_cycling_updates_sidebar() {
    let mut app = make_test_app();
    app.navigate(PageId::Ai);
    app.navigate(PageId::Settings);

    app.handle_key(KeyModifiers::CONTROL, KeyCode::Right, Instant::now());
    assert_eq!(app.tabs().current_index(), 0);
    assert_eq!(app.sidebar().active(), Some(PageId::Home));

    app.handle_key(KeyModifiers::CONTROL, KeyCode::Left, Instant::now());
    assert_eq!(app.tabs().current_index(), 2);
    assert_eq!(app.sidebar().active(), Some(PageId::Settings));
}

#[test]
fn test_alt_digit_selects_tab() {
    let mut app = make_test_app();
    app.navigate(PageId::Ai);
    app.navigate(PageId::Help);

    app.handle_key(KeyModifiers::ALT, KeyCode::Char('2'), Instant::now());
    assert_eq!(app.tabs().current_index(), 1);
    assert_eq!(app.sidebar().active(), Some(PageId::Ai));

    // 채팅 입력창으로 문자가 들어가지 않고, 없는 탭 번호는 무시
    app.handle_key(KeyModifiers::ALT, KeyCode::Char('9'), Instant::now());
    assert_eq!(app.tabs().current_index(), 1);
    assert!(current_chat(&app).input().is_empty());
}

#[test]
fn test_language_switch_renames_tabs_and_keeps_index() {
    let mut app = make_test_app();
    app.navigate(PageId::Ai);
    app.navigate(PageId::Settings);
    app.switch_tab(1);

    assert!(app.locale().set_active("tr"));
    app.tick(Instant::now());

    assert_eq!(
        app.tabs().titles(),
        vec!["Gösterge Paneli", "Nova Yapay Zeka Asistanı", "Ayarlar"]
    );
    assert_eq!(app.tabs().current_index(), 1);
    assert_eq!(app.sidebar().entries()[0].label, "Gösterge Paneli");
    assert_eq!(app.sidebar().active(), Some(PageId::Ai));
    assert_eq!(app.toast_display(), Some("Dil Türkçe olarak değiştirildi"));
}

#[test]
fn test_rtl_language_mirrors_layout() {
    let mut app = make_test_app();
    assert!(!app.layout.is_rtl());

    app.locale().set_active("ar");
    app.tick(Instant::now());
    assert!(app.layout.is_rtl());

    app.locale().set_active("en");
    app.tick(Instant::now());
    assert!(!app.layout.is_rtl());
}

#[test]
fn test_card_tabs_duplicate_and_clear_sidebar() {
    let mut app = make_test_app();

    // 두 번째 카드 선택 후 Enter
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.tabs().current().map(|tab| tab.key),
        Some(PageKey::CardDetail(CardType::BacklinkMap))
    );
    assert_eq!(app.tabs().titles()[1], "Backlink Map");
    assert_eq!(app.sidebar().active(), None);

    app.open_card(CardType::BacklinkMap);
    assert_eq!(app.tabs().tab_count(), 3);
    assert_eq!(app.tabs().current_index(), 2);

    press(&mut app, KeyCode::F(1));
    assert_eq!(app.tabs().current_index(), 0);
    assert_eq!(app.sidebar().active(), Some(PageId::Home));
}

#[test]
fn test_card_titles_follow_language() {
    let mut app = make_test_app();
    app.open_card(CardType::SiteAudit);

    app.locale().set_active("tr");
    app.tick(Instant::now());
    assert_eq!(app.tabs().titles()[1], "Site Denetimi");
}

#[test]
fn test_chat_reply_arrives_after_delay() {
    let mut app = make_test_app();
    let start = Instant::now();
    app.handle_key(KeyModifiers::NONE, KeyCode::F(2), start);

    type_text(&mut app, "hello", start);
    assert_eq!(current_chat(&app).input().value(), "hello");

    app.handle_key(KeyModifiers::NONE, KeyCode::Enter, start);
    assert_eq!(current_chat(&app).transcript().len(), 2);
    assert!(current_chat(&app).input().is_empty());
    assert!(current_chat(&app).is_typing());

    assert!(!app.tick(start + Duration::from_millis(999)));
    assert_eq!(current_chat(&app).transcript().len(), 2);

    assert!(app.tick(start + Duration::from_millis(1000)));
    let chat = current_chat(&app);
    assert_eq!(chat.transcript().len(), 3);
    assert!(!chat.transcript().messages()[2].is_user());
    assert!(!chat.is_typing());
}

#[test]
fn test_blank_chat_message_is_ignored() {
    let mut app = make_test_app();
    let now = Instant::now();
    app.handle_key(KeyModifiers::NONE, KeyCode::F(2), now);
    type_text(&mut app, "   ", now);
    app.handle_key(KeyModifiers::NONE, KeyCode::Enter, now);

    // 환영 인사만 남아 있다
    assert_eq!(current_chat(&app).transcript().len(), 1);
    assert!(!current_chat(&app).is_typing());
}

#[test]
fn test_chat_reply_reaches_background_tab() {
    let mut app = make_test_app();
    let start = Instant::now();
    app.handle_key(KeyModifiers::NONE, KeyCode::F(2), start);
    type_text(&mut app, "hi", start);
    app.handle_key(KeyModifiers::NONE, KeyCode::Enter, start);

    press(&mut app, KeyCode::F(1));
    app.tick(start + Duration::from_secs(2));

    press(&mut app, KeyCode::F(2));
    assert_eq!(current_chat(&app).transcript().len(), 3);
}

#[test]
fn test_closing_chat_tab_cancels_reply() {
    let mut app = make_test_app();
    let start = Instant::now();
    app.handle_key(KeyModifiers::NONE, KeyCode::F(2), start);
    type_text(&mut app, "hi", start);
    app.handle_key(KeyModifiers::NONE, KeyCode::Enter, start);

    press_ctrl(&mut app, 'w');
    assert_eq!(app.tabs().tab_count(), 1);
    assert!(!app.tick(start + Duration::from_secs(2)));

    // 다시 열면 새 페이지
    press(&mut app, KeyCode::F(2));
    assert_eq!(current_chat(&app).transcript().len(), 1);
    assert!(!current_chat(&app).is_typing());
}

#[test]
fn test_chat_opens_with_localized_welcome() {
    let mut app = make_test_app();
    assert!(app.locale().set_active("tr"));
    app.tick(Instant::now());
    press(&mut app, KeyCode::F(2));

    let welcome = &current_chat(&app).transcript().messages()[0];
    assert!(!welcome.is_user());
    assert!(welcome.text.starts_with("NovaSEO AI Asistanına hoş geldiniz"));
}

#[test]
fn test_icon_mode_from_config() {
    use crate::ui::{GlyphIconProvider, IconMode, IconProvider};
    use ratatui::style::Color;

    let app = make_test_app();
    assert_eq!(app.icons().resolve("home", Color::White).glyph, "⌂");

    let app = make_test_app().with_icons(GlyphIconProvider::new(IconMode::Ascii));
    assert_eq!(app.icons().resolve("home", Color::White).glyph, "[H]");
}

#[test]
fn test_chat_typing_does_not_trigger_shortcuts() {
    let mut app = make_test_app();
    press(&mut app, KeyCode::F(2));
    type_text(&mut app, "Quit?", Instant::now());
    assert!(!app.should_quit());
    assert_eq!(current_chat(&app).input().value(), "Quit?");

    press_ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn test_theme_change_from_settings() {
    let mut app = make_test_app();
    press(&mut app, KeyCode::F(3));
    assert_eq!(app.theme().active(), "cyber");

    press(&mut app, KeyCode::Right);
    assert_eq!(app.theme().active(), "matrix");
    assert_eq!(app.toast_display(), Some("Theme changed to Matrix"));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.theme().active(), "cyber");
}

#[test]
fn test_language_change_from_settings() {
    let mut app = make_test_app();
    press(&mut app, KeyCode::F(3));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);

    assert_eq!(app.locale().active(), "tr");
    assert_eq!(app.tabs().titles(), vec!["Gösterge Paneli", "Ayarlar"]);
    match app.tabs().current().map(|tab| &tab.page) {
        Some(Page::Settings(settings)) => {
            assert_eq!(settings.labels().title, "Ayarlar");
        }
        other => panic!("current page is not settings: {:?}", other),
    }
}

#[test]
fn test_sidebar_focus_navigation() {
    let mut app = make_test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.layout.focus(), FocusArea::Sidebar);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.layout.focus(), FocusArea::Content);
    assert_eq!(
        app.tabs().current().map(|tab| tab.key),
        Some(PageKey::Primary(PageId::Settings))
    );
    assert_eq!(app.sidebar().active(), Some(PageId::Settings));
}

#[test]
fn test_toast_expires() {
    let mut app = make_test_app();
    app.set_toast("hello");
    assert!(!app.tick(Instant::now()));
    assert_eq!(app.toast_display(), Some("hello"));

    assert!(app.tick(Instant::now() + TOAST_DURATION));
    assert!(app.toast_message.is_none());
}
