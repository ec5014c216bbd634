//! Word wrapping with a line limit and trailing ellipsis.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: char = '…';

/// Wrap `text` to `width` columns, keeping at most `max_lines` lines.
///
/// When text is left over, the last kept line is shortened so that `…`
/// fits at its end. The result never exceeds `width` on any line.
pub fn wrap_ellipsized(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = wrap(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let mut kept = truncate_to_width(last, width - 1);
        kept.truncate(kept.trim_end().len());
        kept.push(ELLIPSIS);
        *last = kept;
    }
    lines
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // Break words wider than a whole line.
        let mut rest = word;
        while rest.width() > width {
            let head = truncate_to_width(rest, width);
            if head.is_empty() {
                break;
            }
            rest = &rest[head.len()..];
            lines.push(head);
        }
        current.push_str(rest);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest prefix of `text` whose display width is at most `max`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(wrap_ellipsized("Hello world", 20, 2), vec!["Hello world"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_ellipsized("one two three four", 9, 3),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn overflow_ends_with_ellipsis() {
        let lines = wrap_ellipsized("one two three four five six", 9, 2);
        assert_eq!(lines, vec!["one two", "three…"]);
    }

    #[test]
    fn single_line_limit() {
        let lines = wrap_ellipsized("Florina Muntenescu", 10, 1);
        assert_eq!(lines, vec!["Florina…"]);
        assert!(lines[0].width() <= 10);
    }

    #[test]
    fn breaks_long_words() {
        assert_eq!(wrap_ellipsized("abcdefgh", 3, 5), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wide_characters_respected() {
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert!(wrap_ellipsized("text", 0, 2).is_empty());
    }
}
