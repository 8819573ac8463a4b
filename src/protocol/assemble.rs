//! FrameSet accumulation, ordering, and reassembly.
//!
//! The read side collects decoded frame strings into a [`FrameSet`]: an
//! encounter-ordered set deduplicated by exact string equality, together with
//! the expected total frame count learned from the first head frame. Once the
//! set holds the expected number of frames it is sorted (head first, then by
//! ascending index), each frame's tag prefix is stripped, and the shard
//! payloads are concatenated back into the original payload.
//!
//! # Example
//!
//! ```
//! use flipbook::protocol::FrameSet;
//!
//! let mut set = FrameSet::new();
//! set.insert(">>>IDX1 , Wor".to_string());
//! set.insert(">>>HEAD3 >>>IDX0 Hello".to_string());
//! set.insert(">>>IDX2 ld!".to_string());
//! assert!(set.is_complete());
//! assert_eq!(set.into_payload(), "Hello, World!");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use super::tag::{index_tag, is_head, parse_head_total, parse_index};

/// Total, stable order over tagged frame strings.
///
/// The head-tagged string (there is at most one) sorts first; all others sort
/// by ascending parsed index. Strings without a parseable index compare equal
/// to everything, so a stable sort leaves them in encounter order.
pub fn compare_frames(a: &str, b: &str) -> Ordering {
    if is_head(a) {
        return Ordering::Less;
    }
    if is_head(b) {
        return Ordering::Greater;
    }
    match (parse_index(a), parse_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

/// Strip the tag prefix from a frame string, leaving only the shard payload.
///
/// Everything up through and including the index tag's trailing space is
/// removed; for the head frame this removes both the head segment and the
/// nested index segment. A string with no parseable index tag is returned
/// unchanged.
pub fn strip_tags(frame: &str) -> &str {
    match parse_index(frame) {
        Some(idx) => {
            let tag = index_tag(idx);
            match frame.find(&tag) {
                Some(pos) => &frame[pos + tag.len() + 1..],
                None => frame,
            }
        }
        None => frame,
    }
}

/// Sort frames and concatenate their stripped shard payloads.
pub fn assemble(frames: &[String]) -> String {
    let mut sorted: Vec<&String> = frames.iter().collect();
    sorted.sort_by(|a, b| compare_frames(a, b));
    sorted.iter().map(|f| strip_tags(f)).collect()
}

/// Accumulator for one read operation.
///
/// Grows monotonically, never shrinks, and is owned by exactly one capture
/// loop. The expected count is set once, when the first head-tagged frame is
/// observed, and is immutable thereafter.
#[derive(Debug, Default)]
pub struct FrameSet {
    /// Unique frames in encounter order.
    frames: Vec<String>,
    /// Dedup index over `frames`.
    seen: HashSet<String>,
    /// Total frame count from the head tag, once observed.
    expected: Option<usize>,
}

impl FrameSet {
    /// Create an empty frame set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a decoded frame string.
    ///
    /// Empty strings and exact duplicates are no-ops. Returns `true` when the
    /// string was new and was added.
    pub fn insert(&mut self, code: String) -> bool {
        if code.is_empty() || self.seen.contains(&code) {
            return false;
        }

        if self.expected.is_none() {
            if let Some(total) = parse_head_total(&code) {
                tracing::debug!(total, "observed head frame");
                self.expected = Some(total as usize);
            }
        }

        self.seen.insert(code.clone());
        self.frames.push(code);
        true
    }

    /// Number of unique frames captured so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check whether no frames have been captured yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Expected total frame count, if a head frame has been observed.
    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    /// True once the set holds exactly the expected number of frames.
    ///
    /// Always false while the expected count is unknown.
    pub fn is_complete(&self) -> bool {
        self.expected == Some(self.frames.len())
    }

    /// Sort, strip, and concatenate the captured frames into the payload.
    pub fn into_payload(self) -> String {
        assemble(&self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(frames: &[&str]) -> FrameSet {
        let mut set = FrameSet::new();
        for f in frames {
            set.insert((*f).to_string());
        }
        set
    }

    #[test]
    fn test_sort_head_first_then_index() {
        let frames = vec![
            ">>>IDX3 d".to_string(),
            ">>>IDX1 b".to_string(),
            ">>>IDX2 c".to_string(),
            ">>>HEAD4 >>>IDX0 a".to_string(),
        ];
        assert_eq!(assemble(&frames), "abcd");
    }

    #[test]
    fn test_sort_any_arrival_order() {
        let base = vec![
            ">>>HEAD3 >>>IDX0 Hello".to_string(),
            ">>>IDX1 , Wor".to_string(),
            ">>>IDX2 ld!".to_string(),
        ];
        // Every rotation of the arrival order reassembles identically
        for rot in 0..base.len() {
            let mut frames = base.clone();
            frames.rotate_left(rot);
            assert_eq!(assemble(&frames), "Hello, World!");
        }
    }

    #[test]
    fn test_strip_tags_plain() {
        assert_eq!(strip_tags(">>>IDX1 , Wor"), ", Wor");
        assert_eq!(strip_tags(">>>IDX12 payload"), "payload");
    }

    #[test]
    fn test_strip_tags_head() {
        assert_eq!(strip_tags(">>>HEAD3 >>>IDX0 Hello"), "Hello");
    }

    #[test]
    fn test_strip_tags_untagged_passthrough() {
        assert_eq!(strip_tags("no tags here"), "no tags here");
    }

    #[test]
    fn test_strip_tags_preserves_inner_spaces() {
        assert_eq!(strip_tags(">>>IDX0 a b c"), "a b c");
    }

    #[test]
    fn test_dedup_idempotence() {
        let mut set = FrameSet::new();
        assert!(set.insert(">>>IDX1 b".to_string()));
        assert!(!set.insert(">>>IDX1 b".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_string_ignored() {
        let mut set = FrameSet::new();
        assert!(!set.insert(String::new()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_expected_set_once() {
        let mut set = FrameSet::new();
        set.insert(">>>HEAD3 >>>IDX0 a".to_string());
        assert_eq!(set.expected(), Some(3));

        // Re-observing the head frame (duplicate) changes nothing
        set.insert(">>>HEAD3 >>>IDX0 a".to_string());
        assert_eq!(set.expected(), Some(3));
        assert_eq!(set.len(), 1);

        // A second, different head-shaped frame does not overwrite it
        set.insert(">>>HEAD9 >>>IDX0 other".to_string());
        assert_eq!(set.expected(), Some(3));
    }

    #[test]
    fn test_incomplete_without_head() {
        let set = set_of(&[">>>IDX0 a", ">>>IDX1 b"]);
        assert_eq!(set.expected(), None);
        assert!(!set.is_complete());
    }

    #[test]
    fn test_completion_fires_at_expected_count() {
        let mut set = FrameSet::new();
        set.insert(">>>HEAD2 >>>IDX0 ab".to_string());
        assert!(!set.is_complete());
        set.insert(">>>IDX1 cd".to_string());
        assert!(set.is_complete());
        assert_eq!(set.into_payload(), "abcd");
    }

    #[test]
    fn test_stability_for_untagged_frames() {
        // Untagged frames compare equal and keep encounter order
        let frames = vec![
            "zzz".to_string(),
            ">>>HEAD2 >>>IDX0 a".to_string(),
            "yyy".to_string(),
        ];
        assert_eq!(assemble(&frames), "azzzyyy");
    }

    #[test]
    fn test_double_digit_indices() {
        let mut frames: Vec<String> = (1..12).map(|i| format!(">>>IDX{i} [{i}]")).collect();
        frames.push(">>>HEAD12 >>>IDX0 [0]".to_string());
        frames.reverse();
        let expected: String = (0..12).map(|i| format!("[{i}]")).collect();
        assert_eq!(assemble(&frames), expected);
    }
}
