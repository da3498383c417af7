//! Substring search returning byte ranges

use std::ops::Range;

/// Result of searching a text for a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// Byte range of the match.
    Found(Range<usize>),
    NotFound,
}

impl Search {
    pub fn range(&self) -> Option<Range<usize>> {
        match self {
            Self::Found(range) => Some(range.clone()),
            Self::NotFound => None,
        }
    }

    pub fn start(&self) -> Option<usize> {
        self.range().map(|r| r.start)
    }
}

impl From<Option<Range<usize>>> for Search {
    fn from(range: Option<Range<usize>>) -> Self {
        range.map_or(Self::NotFound, Self::Found)
    }
}

/// Find the first occurrence of `needle` at or after byte offset `from`.
///
/// An empty needle never matches.
pub fn find_literal(haystack: &str, needle: &str, from: usize) -> Search {
    if needle.is_empty() || from > haystack.len() {
        return Search::NotFound;
    }
    haystack[from..]
        .find(needle)
        .map(|offset| from + offset..from + offset + needle.len())
        .into()
}

/// Find the first line at or after `from` that begins with `prefix`.
///
/// The returned range runs from the start of that line through its line
/// terminator, or to the end of the text when the line has none.
pub fn find_line_starting_with(haystack: &str, prefix: &str, from: usize) -> Search {
    if prefix.is_empty() || from > haystack.len() {
        return Search::NotFound;
    }

    let step = prefix.chars().next().map_or(1, char::len_utf8);
    let mut cursor = from;
    while let Some(offset) = haystack[cursor..].find(prefix) {
        let start = cursor + offset;
        if start == 0 || haystack.as_bytes()[start - 1] == b'\n' {
            let end = haystack[start..]
                .find('\n')
                .map_or(haystack.len(), |i| start + i + 1);
            return Search::Found(start..end);
        }
        cursor = start + step;
    }
    Search::NotFound
}

/// Remove `range` from `content`, joining the text before and after it.
pub fn splice(content: String, range: Range<usize>) -> String {
    let mut spliced = String::with_capacity(content.len() - range.len());
    spliced.push_str(&content[..range.start]);
    spliced.push_str(&content[range.end..]);
    spliced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_literal_from_offset() {
        let text = "ab ab";
        assert_eq!(find_literal(text, "ab", 0), Search::Found(0..2));
        assert_eq!(find_literal(text, "ab", 1), Search::Found(3..5));
        assert_eq!(find_literal(text, "ab", 4), Search::NotFound);
    }

    #[test]
    fn find_literal_empty_needle_never_matches() {
        assert_eq!(find_literal("abc", "", 0), Search::NotFound);
    }

    #[test]
    fn find_line_skips_matches_inside_lines() {
        let text = "x  }\n    }\n  }\n";
        assert_eq!(find_line_starting_with(text, "  }", 0), Search::Found(11..15));
    }

    #[test]
    fn find_line_at_start_of_text() {
        assert_eq!(find_line_starting_with("  }\nrest", "  }", 0), Search::Found(0..4));
    }

    #[test]
    fn find_line_without_trailing_newline_runs_to_end() {
        let text = "a\n  }";
        assert_eq!(find_line_starting_with(text, "  }", 0), Search::Found(2..5));
    }

    #[test]
    fn find_line_handles_multibyte_text() {
        let text = "é  }\n  } // ✓\n";
        let found = find_line_starting_with(text, "  }", 0);
        assert_eq!(found.range().map(|r| &text[r]), Some("  } // ✓\n"));
    }

    #[test]
    fn splice_joins_outer_text() {
        assert_eq!(splice("keep-drop-keep".into(), 4..9), "keep-keep");
        assert_eq!(splice("abc".into(), 0..3), "");
    }

    #[test]
    fn search_accessors() {
        let found = Search::Found(3..7);
        assert_eq!(found.start(), Some(3));
        assert_eq!(Search::NotFound.range(), None);
    }
}
