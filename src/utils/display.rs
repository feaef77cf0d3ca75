use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// 문자열을 최대 너비에 맞춰 끝부분을 생략한다.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let prefix_width = max_width - ELLIPSIS.width();
    format!("{}{}", take_prefix_by_width(text, prefix_width), ELLIPSIS)
}

/// 문자열을 정확히 `width` 칸으로 맞춘다 (길면 생략, 짧으면 공백 채움).
pub fn fit_width(text: &str, width: usize) -> String {
    let truncated = truncate_end(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}

/// 첫 글자를 대문자로 변환한다 (테마 이름 표시용).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 표시 폭 기준 줄바꿈. 공백에서 끊고, 한 줄보다 긴 단어는 글자 단위로 자른다.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());
            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
                if line_width + ch_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        lines.push(line);
    }
    lines
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("Competitor Analysis", 10), "Competito…");
        assert_eq!(truncate_end("abc", 1), "a");
        assert_eq!(truncate_end("abc", 0), "");
    }

    #[test]
    fn test_truncate_end_wide_chars() {
        let truncated = truncate_end("搜索引擎优化分数", 7);
        assert!(truncated.width() <= 7);
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_fit_width_pads_and_truncates() {
        assert_eq!(fit_width("ab", 4), "ab  ");
        assert_eq!(fit_width("abcdef", 4).width(), 4);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("improve page speed today", 10),
            vec!["improve", "page speed", "today"]
        );
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("a\n\nb", 5), vec!["a", "", "b"]);
        assert_eq!(wrap_text("搜索引擎", 4), vec!["搜索", "引擎"]);
        assert!(wrap_text("x", 0).is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("matrix"), "Matrix");
        assert_eq!(capitalize(""), "");
    }
}
