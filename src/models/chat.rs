use chrono::{DateTime, Local};

/// 메시지 작성자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// 대화 메시지 (생성 후 변경 불가)
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            sent_at: Local::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// 표시용 시각 (HH:MM)
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// 추가 전용 대화 기록
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_appends_in_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::new("hello", Sender::User));
        transcript.push(ChatMessage::new("hi there", Sender::Assistant));

        assert_eq!(transcript.len(), 2);
        assert!(transcript.messages()[0].is_user());
        assert_eq!(transcript.last().map(|m| m.sender), Some(Sender::Assistant));
    }

    #[test]
    fn test_time_label_format() {
        let message = ChatMessage::new("x", Sender::User);
        let label = message.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
