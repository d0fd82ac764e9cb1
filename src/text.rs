//! Display-width-aware text helpers for panel copy.

use unicode_width::UnicodeWidthStr;

/// Wrap prose at word boundaries so no line exceeds `width` display columns.
///
/// Words wider than `width` are kept whole on their own line rather than
/// split. Existing newlines are treated as paragraph breaks.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(s.len());
    for (i, paragraph) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width == 0 {
                out.push_str(word);
                line_width = word_width;
            } else if line_width + 1 + word_width <= width {
                out.push(' ');
                out.push_str(word);
                line_width += 1 + word_width;
            } else {
                out.push('\n');
                out.push_str(word);
                line_width = word_width;
            }
        }
    }

    out
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wraps_at_word_boundaries() {
        let actual = wrap_text("crafting scalable web applications", 14);
        let expected = "crafting\nscalable web\napplications";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_collapses_runs_of_whitespace() {
        let actual = wrap_text("clean,  maintainable   code", 30);
        let expected = "clean, maintainable code";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_keeps_paragraph_breaks() {
        let actual = wrap_text("first paragraph\nsecond paragraph", 20);
        let expected = "first paragraph\nsecond paragraph";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_overlong_word_stays_whole() {
        let actual = wrap_text("an extraordinarily long identifier", 10);
        let expected = "an\nextraordinarily\nlong\nidentifier";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_double_width_characters() {
        // Each ideograph is two columns wide
        let actual = wrap_text("全栈 开发 工程师", 5);
        let expected = "全栈\n开发\n工程师";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 3);
        let expected = "foo\nbar\nbaz";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 2);
        let expected = "foo\n...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_to_single_line() {
        let actual = truncate_text("foo\nbar", 1);
        let expected = "...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_zero_height() {
        let actual = truncate_text("foo\nbar", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }
}
