//! Tag wire format encoding and parsing.
//!
//! The only wire protocol in this crate is textual, ASCII, space-delimited:
//!
//! ```text
//! >>>IDX<n> <shard>                 ordinary frame
//! >>>HEAD<total> >>>IDX0 <shard>    first frame, carries the total count
//! ```
//!
//! Example literal frame string: `>>>HEAD3 >>>IDX0 Hello, `.
//!
//! The delimiter is a single space shared with payload content, so a shard
//! that itself starts with tag-shaped text can in principle misparse. The
//! format is kept as-is for compatibility with existing flipbook artifacts.
//!
//! # Example
//!
//! ```
//! use flipbook::protocol::{head_tag, index_tag, parse_head_total, parse_index};
//!
//! let frame = format!("{} {} {}", head_tag(3), index_tag(0), "Hello");
//! assert_eq!(frame, ">>>HEAD3 >>>IDX0 Hello");
//! assert_eq!(parse_head_total(&frame), Some(3));
//! assert_eq!(parse_index(&frame), Some(0));
//! ```

/// Prefix token for the index tag.
pub const INDEX_TAG: &str = ">>>IDX";

/// Prefix token for the head tag.
pub const HEAD_TAG: &str = ">>>HEAD";

/// Check if a frame string is head-tagged.
#[inline]
pub fn is_head(s: &str) -> bool {
    s.starts_with(HEAD_TAG)
}

/// Format an index tag for frame ordinal `idx`.
#[inline]
pub fn index_tag(idx: u64) -> String {
    format!("{INDEX_TAG}{idx}")
}

/// Format a head tag for a total of `total` frames.
#[inline]
pub fn head_tag(total: u64) -> String {
    format!("{HEAD_TAG}{total}")
}

/// Parse the frame ordinal out of a tagged string.
///
/// For head-tagged strings the head segment (up to the first space) is
/// skipped before the index segment is parsed. Returns `None` when the index
/// prefix is absent, when no space delimiter follows the index segment, or
/// when the digits between them do not parse.
pub fn parse_index(s: &str) -> Option<u64> {
    // Skip past the head segment first
    let s = if is_head(s) {
        let space = s.find(' ')?;
        &s[space + 1..]
    } else {
        s
    };

    let rest = s.strip_prefix(INDEX_TAG)?;
    let space = rest.find(' ')?;
    rest[..space].parse().ok()
}

/// Parse the total frame count out of a head-tagged string.
///
/// Returns `None` when the string is not head-tagged or has no space after
/// the total.
pub fn parse_head_total(s: &str) -> Option<u64> {
    let rest = s.strip_prefix(HEAD_TAG)?;
    let space = rest.find(' ')?;
    rest[..space].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tag_format() {
        assert_eq!(index_tag(0), ">>>IDX0");
        assert_eq!(index_tag(42), ">>>IDX42");
    }

    #[test]
    fn test_head_tag_format() {
        assert_eq!(head_tag(1), ">>>HEAD1");
        assert_eq!(head_tag(300), ">>>HEAD300");
    }

    #[test]
    fn test_is_head() {
        assert!(is_head(">>>HEAD3 >>>IDX0 Hello"));
        assert!(!is_head(">>>IDX1 , Wor"));
        assert!(!is_head("Hello"));
        assert!(!is_head(""));
    }

    #[test]
    fn test_parse_index_plain_frame() {
        assert_eq!(parse_index(">>>IDX0 Hello"), Some(0));
        assert_eq!(parse_index(">>>IDX17 payload here"), Some(17));
    }

    #[test]
    fn test_parse_index_head_frame_skips_head_segment() {
        assert_eq!(parse_index(">>>HEAD3 >>>IDX0 Hello, "), Some(0));
        assert_eq!(parse_index(">>>HEAD12 >>>IDX0 x"), Some(0));
    }

    #[test]
    fn test_parse_index_missing_prefix() {
        assert_eq!(parse_index("Hello world"), None);
        assert_eq!(parse_index(">>>HEAD3 Hello"), None);
    }

    #[test]
    fn test_parse_index_missing_delimiter() {
        // Index prefix present but no space follows the digits
        assert_eq!(parse_index(">>>IDX5"), None);
        assert_eq!(parse_index(">>>HEAD2 >>>IDX1"), None);
    }

    #[test]
    fn test_parse_index_non_numeric() {
        assert_eq!(parse_index(">>>IDXabc payload"), None);
    }

    #[test]
    fn test_parse_head_total() {
        assert_eq!(parse_head_total(">>>HEAD3 >>>IDX0 Hello"), Some(3));
        assert_eq!(parse_head_total(">>>HEAD1 >>>IDX0 a"), Some(1));
    }

    #[test]
    fn test_parse_head_total_not_head() {
        assert_eq!(parse_head_total(">>>IDX1 , Wor"), None);
        assert_eq!(parse_head_total("plain text"), None);
    }

    #[test]
    fn test_parse_head_total_no_trailing_space() {
        assert_eq!(parse_head_total(">>>HEAD3"), None);
    }

    #[test]
    fn test_example_literal_frame() {
        let frame = ">>>HEAD3 >>>IDX0 Hello, ";
        assert!(is_head(frame));
        assert_eq!(parse_head_total(frame), Some(3));
        assert_eq!(parse_index(frame), Some(0));
    }

    #[test]
    fn test_payload_with_empty_shard() {
        // A tagged frame whose shard is the empty string still parses
        assert_eq!(parse_index(">>>IDX3 "), Some(3));
    }
}
