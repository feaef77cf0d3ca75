//! AI 어시스턴트 페이지
//!
//! 실제 추론은 하지 않는다. 사용자가 메시지를 보내면 고정 문장 목록에서
//! 하나를 고르거나(기본) 현재 테마/언어를 알려주는 템플릿을 만들어
//! 일정 시간 뒤 대화에 추가한다. 대기 중인 응답은 페이지와 함께 사라진다.

use crate::core::deferred::DeferredQueue;
use crate::models::chat::{ChatMessage, Sender, Transcript};
use crate::pages::input_buffer::InputBuffer;
use crate::system::config::ReplyMode;
use crate::ui::{LocaleStore, ThemeStore};
use crate::utils::display::capitalize;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// 고정 응답 목록
pub const CANNED_REPLIES: &[&str] = &[
    "Your SEO score looks healthy, but improving page speed could push it even higher.",
    "I found several high-authority domains that could be good backlink opportunities.",
    "Consider adding long-tail keywords to your product pages to capture more specific searches.",
    "Your competitors are publishing fresh content weekly. A regular schedule could help you keep up.",
    "Some pages are missing meta descriptions. Adding them can improve click-through rates.",
    "Internal linking between related articles would help search engines understand your site structure.",
    "Mobile performance is a ranking factor. I recommend running a site audit on your mobile pages.",
];

const WELCOME: &str = "Welcome to the NovaSEO AI Assistant! How can I help you today?";

const ECHO_TEMPLATE: &str = "I notice you're using the {theme} theme and {language} language. \
How do you like the color scheme? I can provide some analysis on your SEO settings if you'd like.";

/// 채팅 페이지 생성 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    pub reply_delay: Duration,
    pub reply_mode: ReplyMode,
    /// 응답 선택 난수 시드 (None이면 OS 엔트로피)
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            reply_mode: ReplyMode::Canned,
            seed: None,
        }
    }
}

pub struct ChatPage {
    transcript: Transcript,
    input: InputBuffer,
    replies: DeferredQueue<String>,
    config: ChatConfig,
    rng: StdRng,
    theme: Rc<ThemeStore>,
    locale: Rc<LocaleStore>,
    /// 맨 아래에서 위로 스크롤한 줄 수
    scroll: usize,
}

impl ChatPage {
    pub fn new(config: ChatConfig, theme: Rc<ThemeStore>, locale: Rc<LocaleStore>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // 첫 메시지는 현재 언어의 환영 인사
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::new(
            locale.text("ai.welcome", Some(WELCOME)),
            Sender::Assistant,
        ));
        Self {
            transcript,
            input: InputBuffer::new(),
            replies: DeferredQueue::new(),
            config,
            rng,
            theme,
            locale,
            scroll: 0,
        }
    }

    /// 메시지 전송
    ///
    /// 공백뿐인 메시지는 무시한다(false). 그 외에는 사용자 메시지를 추가하고,
    /// 입력 버퍼를 비우고, 응답 하나를 예약한다.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.transcript.push(ChatMessage::new(text, Sender::User));
        self.input.clear();
        self.scroll = 0;

        let reply = self.compose_reply();
        self.replies.schedule(now, self.config.reply_delay, reply);
        tracing::debug!(pending = self.replies.pending(), "assistant reply scheduled");
        true
    }

    /// 입력 버퍼 내용 전송
    pub fn submit(&mut self, now: Instant) -> bool {
        let text = self.input.value().to_string();
        self.send(&text, now)
    }

    /// 만기된 응답을 대화에 추가, 추가된 개수 반환
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.replies.drain_due(now);
        let count = due.len();
        for reply in due {
            self.transcript.push(ChatMessage::new(reply, Sender::Assistant));
        }
        if count > 0 {
            self.scroll = 0;
        }
        count
    }

    /// 응답 대기 중인지 (입력 중 표시)
    pub fn is_typing(&self) -> bool {
        self.pending_replies() > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// 렌더러가 실제 내용 길이에 맞춰 스크롤을 보정
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll = self.scroll.min(max);
    }

    fn compose_reply(&mut self) -> String {
        match self.config.reply_mode {
            ReplyMode::Canned => CANNED_REPLIES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or_default()
                .to_string(),
            ReplyMode::Echo => {
                let active = self.theme.active();
                let theme_name = self
                    .theme
                    .display_name(&active)
                    .unwrap_or_else(|| capitalize(&active));
                let language = self.locale.active_language().display_name();
                self.locale.format(
                    "ai.echo_response",
                    ECHO_TEMPLATE,
                    &[("theme", theme_name.as_str()), ("language", language)],
                )
            }
        }
    }
}

impl Drop for ChatPage {
    fn drop(&mut self) {
        let cancelled = self.replies.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "chat page closed, pending replies cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::logging::capture_logs;
    use crate::ui::i18n::LanguagePack;
    use crate::ui::theme::Theme;
    use std::collections::HashMap;

    fn page(mode: ReplyMode) -> ChatPage {
        let theme = Rc::new(ThemeStore::new(vec![
            ("cyber".to_string(), Theme::cyber()),
            (
                "matrix".to_string(),
                serde_json::from_str(r##"{ "name": "Matrix" }"##).unwrap(),
            ),
        ]));
        let locale = Rc::new(LocaleStore::builtin());
        ChatPage::new(
            ChatConfig {
                reply_delay: Duration::from_millis(1000),
                reply_mode: mode,
                seed: Some(7),
            },
            theme,
            locale,
        )
    }

    #[test]
    fn test_starts_with_welcome_message() {
        let chat = page(ReplyMode::Canned);
        assert_eq!(chat.transcript().len(), 1);
        let welcome = &chat.transcript().messages()[0];
        assert!(!welcome.is_user());
        assert_eq!(welcome.text, WELCOME);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_welcome_message_uses_active_language() {
        let theme = Rc::new(ThemeStore::new(vec![("cyber".to_string(), Theme::cyber())]));
        let mut entries = HashMap::new();
        entries.insert("ai.welcome".to_string(), "Hoş geldiniz!".to_string());
        let locale = Rc::new(LocaleStore::from_packs(vec![LanguagePack::new("tr", entries)]));
        locale.set_active("tr");

        let chat = ChatPage::new(ChatConfig::default(), theme, locale);
        assert_eq!(chat.transcript().messages()[0].text, "Hoş geldiniz!");
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut chat = page(ReplyMode::Canned);
        let now = Instant::now();
        assert!(!chat.send("  ", now));
        assert!(!chat.send("\n\t", now));
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_send_appends_then_replies_after_delay() {
        let mut chat = page(ReplyMode::Canned);
        let start = Instant::now();

        assert!(chat.send("hello", start));
        assert_eq!(chat.transcript().len(), 2);
        assert!(chat.transcript().messages()[1].is_user());
        assert!(chat.is_typing());

        assert_eq!(chat.tick(start + Duration::from_millis(999)), 0);
        assert_eq!(chat.transcript().len(), 2);

        assert_eq!(chat.tick(start + Duration::from_millis(1000)), 1);
        assert_eq!(chat.transcript().len(), 3);
        let reply = chat.transcript().last().unwrap();
        assert!(!reply.is_user());
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));
        assert!(!chat.is_typing());

        // 응답은 정확히 하나
        assert_eq!(chat.tick(start + Duration::from_secs(5)), 0);
        assert_eq!(chat.transcript().len(), 3);
    }

    #[test]
    fn test_submit_uses_and_clears_input_buffer() {
        let mut chat = page(ReplyMode::Canned);
        "  hi there ".chars().for_each(|c| chat.input_mut().insert_char(c));

        assert!(chat.submit(Instant::now()));
        assert_eq!(chat.transcript().last().unwrap().text, "hi there");
        assert!(chat.input().is_empty());
    }

    #[test]
    fn test_echo_mode_mentions_theme_and_language() {
        let mut chat = page(ReplyMode::Echo);
        chat.theme.set_active("matrix");
        let start = Instant::now();
        chat.send("how does it look?", start);
        chat.tick(start + Duration::from_secs(1));

        let reply = &chat.transcript().last().unwrap().text;
        assert!(reply.contains("Matrix theme"));
        assert!(reply.contains("English language"));
    }

    #[test]
    fn test_drop_cancels_pending_reply() {
        let mut chat = page(ReplyMode::Canned);
        let now = Instant::now();
        chat.send("hello", now);
        chat.send("again", now);
        assert_eq!(chat.pending_replies(), 2);

        let output = capture_logs(move || drop(chat));
        assert!(output.contains("pending replies cancelled"));
        assert!(output.contains("cancelled=2"));
    }

    #[test]
    fn test_drop_without_pending_reply_is_silent() {
        let chat = page(ReplyMode::Canned);
        let output = capture_logs(move || drop(chat));
        assert!(!output.contains("pending replies cancelled"));
    }

    #[test]
    fn test_scroll_clamps() {
        let mut chat = page(ReplyMode::Canned);
        chat.scroll_up(10);
        chat.clamp_scroll(3);
        assert_eq!(chat.scroll(), 3);
        chat.scroll_down(5);
        assert_eq!(chat.scroll(), 0);
    }
}
