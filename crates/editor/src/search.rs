//! Literal substring search for highlight spans.
//!
//! The contract: scan the buffer from its start, collecting every
//! non-overlapping occurrence of the query in forward order. Each scan
//! resumes at the end of the previous match. Matching is case-sensitive
//! literal comparison; there is no regex and no case folding.

use plainpad_buffer::Span;

/// Finds every non-overlapping occurrence of `query` in `content`.
///
/// Spans are character offsets in left-to-right order. An empty query
/// yields no spans.
pub fn find_all(content: &str, query: &str) -> Vec<Span> {
    if query.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = content.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            spans.push(Span::new(pos, pos + needle.len()));
            // Resume past this match so matches never overlap.
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_matches_in_order() {
        let spans = find_all("the cat sat on the mat", "at");
        assert_eq!(
            spans,
            vec![Span::new(5, 7), Span::new(9, 11), Span::new(20, 22)]
        );
    }

    #[test]
    fn spans_never_overlap() {
        // "aaaa" contains "aa" at 0, 1, 2 but non-overlapping search
        // takes 0..2 then resumes at 2.
        let spans = find_all("aaaa", "aa");
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 4)]);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(find_all("anything", "").is_empty());
    }

    #[test]
    fn no_match_yields_nothing() {
        assert!(find_all("hello", "xyz").is_empty());
        assert!(find_all("", "x").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(find_all("Hello", "hello").is_empty());
        assert_eq!(find_all("Hello hello", "hello"), vec![Span::new(6, 11)]);
    }

    #[test]
    fn query_longer_than_content() {
        assert!(find_all("hi", "hello").is_empty());
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        // "é" is two bytes but one char; spans must use char offsets.
        let spans = find_all("éé abc", "abc");
        assert_eq!(spans, vec![Span::new(3, 6)]);
    }

    #[test]
    fn match_spanning_newline() {
        let spans = find_all("one\ntwo", "e\nt");
        assert_eq!(spans, vec![Span::new(2, 5)]);
    }
}
