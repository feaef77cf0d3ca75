/// 한 줄 입력 버퍼 (커서는 UTF-8 바이트 위치)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let prev = self.prev_char_start();
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_char_start();
    }

    pub fn right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }

        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+Backspace / Ctrl+H)
    pub fn delete_prev_word(&mut self) {
        let original = self.cursor;
        let mut pos = original;

        // 1) 커서 왼쪽 공백 건너뛰기
        while let Some(ch) = self.value[..pos].chars().next_back() {
            if !ch.is_whitespace() {
                break;
            }
            pos -= ch.len_utf8();
        }

        // 2) 단어 시작까지 이동
        while let Some(ch) = self.value[..pos].chars().next_back() {
            if ch.is_whitespace() {
                break;
            }
            pos -= ch.len_utf8();
        }

        self.value.replace_range(pos..original, "");
        self.cursor = pos;
    }

    /// 커서 앞 부분의 표시 폭 (터미널 커서 위치 계산용)
    pub fn width_before_cursor(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.value[..self.cursor])
    }

    fn prev_char_start(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut buffer = InputBuffer::new();
        text.chars().for_each(|c| buffer.insert_char(c));
        buffer
    }

    #[test]
    fn test_insert_backspace_delete_utf8_cursor_boundary() {
        let mut buffer = typed("Ağ");
        buffer.left();
        buffer.insert_char('ç');
        assert_eq!(buffer.value(), "Açğ");
        assert_eq!(buffer.cursor(), "Aç".len());

        buffer.backspace();
        assert_eq!(buffer.value(), "Ağ");
        assert_eq!(buffer.cursor(), "A".len());

        buffer.home();
        buffer.delete();
        assert_eq!(buffer.value(), "ğ");
        assert_eq!(buffer.cursor(), 0);

        buffer.backspace();
        assert_eq!(buffer.value(), "ğ");
    }

    #[test]
    fn test_left_right_home_end() {
        let mut buffer = typed("a中b");
        buffer.left();
        assert_eq!(buffer.cursor(), "a中".len());
        assert_eq!(buffer.width_before_cursor(), 3);
        buffer.left();
        buffer.left();
        buffer.left();
        assert_eq!(buffer.cursor(), 0);
        buffer.right();
        assert_eq!(buffer.cursor(), 1);
        buffer.end();
        buffer.right();
        assert_eq!(buffer.cursor(), buffer.value().len());
    }

    #[test]
    fn test_delete_prev_word_and_clear() {
        let mut buffer = typed("best backlink  ");
        buffer.delete_prev_word();
        assert_eq!(buffer.value(), "best ");
        assert_eq!(buffer.cursor(), buffer.value().len());

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }
}
