//! Thread segmentation: cut a numbered completion into tweets.
//!
//! A tweet starts at a line beginning with a marker `k.` where `k` is in
//! `1..=count`. Following unnumbered lines belong to the open tweet. Lines
//! before the first marker are dropped, and so are tweets past `count`.

/// Split `text` into at most `count` trimmed, non-empty segments.
///
/// Returns fewer than `count` segments when the text carries fewer markers;
/// the caller decides whether that deserves a warning. `count == 0` yields an
/// empty list since no marker can match.
pub fn segment_thread(text: &str, count: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut open: Option<Vec<&str>> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if starts_with_marker(line, count) {
            if let Some(lines) = open.replace(vec![line]) {
                segments.push(lines.join("\n"));
            }
        } else if let Some(lines) = open.as_mut() {
            lines.push(line);
        }
    }
    if let Some(lines) = open {
        segments.push(lines.join("\n"));
    }

    let mut segments: Vec<String> = segments
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    segments.truncate(count);
    segments
}

/// Number `k` of a leading `k.` marker, if the line has one.
///
/// Matches the literal decimal form of `k`, so `01.` is not a marker and
/// `1.5 million` is (as marker `1.`).
pub fn marker_number(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || bytes[0] == b'0' || bytes.get(digits) != Some(&b'.') {
        return None;
    }
    line[..digits].parse().ok()
}

fn starts_with_marker(line: &str, count: usize) -> bool {
    matches!(marker_number(line), Some(k) if k <= count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_simple_markers() {
        assert_eq!(
            segment_thread("1. Hello\n2. World", 2),
            vec!["1. Hello", "2. World"]
        );
    }

    #[test]
    fn test_leading_noise_and_continuation_lines() {
        assert_eq!(
            segment_thread("intro noise\n1. First\nmore text\n2. Second", 2),
            vec!["1. First\nmore text", "2. Second"]
        );
    }

    #[test]
    fn test_short_output_is_returned_as_is() {
        let out = segment_thread("Here you go:\n1. Only one tweet 🚀", 3);
        assert_eq!(out, vec!["1. Only one tweet 🚀"]);
    }

    #[test]
    fn test_markers_past_count_fold_into_last_tweet() {
        let text = "1. a\n2. b\n3. c\n4. d\n5. e";
        assert_eq!(
            segment_thread(text, 3),
            vec!["1. a", "2. b", "3. c\n4. d\n5. e"]
        );
    }

    #[test]
    fn test_surplus_segments_are_truncated() {
        // Repeated in-range markers open more segments than requested.
        let text = "1. a\n2. b\n1. c\n2. d";
        assert_eq!(segment_thread(text, 2), vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_markers_above_count_stay_in_open_segment() {
        // With count 3, "4." is not a marker and continues tweet 3.
        let text = "1. a\n2. b\n3. c\n4. d";
        assert_eq!(segment_thread(text, 3), vec!["1. a", "2. b", "3. c\n4. d"]);
    }

    #[test]
    fn test_no_markers_yields_empty() {
        assert!(segment_thread("just some prose\nwith lines", 5).is_empty());
        assert!(segment_thread("", 5).is_empty());
    }

    #[test]
    fn test_zero_count_yields_empty() {
        assert!(segment_thread("1. a\n2. b", 0).is_empty());
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_dropped() {
        let text = "\n\n   1. First   \n\n\t\n  tail line \r\n2. Second\r\n   ";
        assert_eq!(
            segment_thread(text, 2),
            vec!["1. First\ntail line", "2. Second"]
        );
    }

    #[test]
    fn test_leading_zero_is_not_a_marker() {
        let text = "1. a\n01. not a new tweet\n2. b";
        assert_eq!(
            segment_thread(text, 2),
            vec!["1. a\n01. not a new tweet", "2. b"]
        );
    }

    #[test]
    fn test_two_digit_markers() {
        let text: String = (1..=12).map(|i| format!("{i}. tweet {i}\n")).collect();
        let out = segment_thread(&text, 12);
        assert_eq!(out.len(), 12);
        assert_eq!(out[9], "10. tweet 10");
        assert_eq!(out[11], "12. tweet 12");
    }

    #[test]
    fn test_repeated_marker_starts_new_segment() {
        // Any marker in range opens a segment, even out of order.
        let text = "1. a\n1. again\n2. b";
        assert_eq!(segment_thread(text, 3), vec!["1. a", "1. again", "2. b"]);
    }

    #[test]
    fn test_number_without_space_still_matches_prefix() {
        let text = "1.5 million users joined\n2. next";
        assert_eq!(
            segment_thread(text, 2),
            vec!["1.5 million users joined", "2. next"]
        );
    }

    #[test]
    fn test_marker_number() {
        assert_eq!(marker_number("1. a"), Some(1));
        assert_eq!(marker_number("42.x"), Some(42));
        assert_eq!(marker_number("0. zero"), None);
        assert_eq!(marker_number("07. a"), None);
        assert_eq!(marker_number("1) a"), None);
        assert_eq!(marker_number("a1. b"), None);
        assert_eq!(marker_number("123"), None);
        assert_eq!(marker_number("99999999999999999999999. big"), None);
    }

    #[test]
    fn test_output_invariants_over_mixed_inputs() {
        let inputs = [
            "1. a\n\n2.\n3. c",
            "noise\n2. b\n1. a\n3. c\n4. d\n5. e",
            "  \n1.   \n2. x",
            "1. x\ny\nz\n2. w\n6. v",
            "3. only three",
        ];
        for text in inputs {
            for count in 0..=6 {
                let out = segment_thread(text, count);
                assert!(out.len() <= count, "too many segments for {text:?}/{count}");
                for seg in &out {
                    assert!(!seg.trim().is_empty());
                    assert_eq!(seg.trim(), seg);
                }
            }
        }
    }

    #[test]
    fn test_resegmenting_output_is_stable() {
        let inputs = [
            "intro\n1. First\nmore text\n2. Second\n3. Third",
            "1. a\n2. b\n3. c\n4. d\n5. e",
            "1. x\n\n   y  \n2. z",
        ];
        for text in inputs {
            for count in 1..=5 {
                let once = segment_thread(text, count);
                let twice = segment_thread(&once.join("\n"), count);
                assert_eq!(once, twice, "unstable for {text:?}/{count}");
            }
        }
    }

    #[test]
    fn test_order_follows_text() {
        let text = "2. second first\n1. first second";
        assert_eq!(
            segment_thread(text, 2),
            vec!["2. second first", "1. first second"]
        );
    }
}
