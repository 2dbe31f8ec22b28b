//! The committed source snapshot and its change-detection comparison.

use hotcell_common::ContentHash;

/// The exact source text captured at the last successful refresh.
///
/// Identity is exact text equality. The content hash is a fast first
/// pass: differing hashes prove a change without comparing text, while
/// matching hashes are confirmed by full comparison before the refresh
/// is skipped.
#[derive(Debug, Clone)]
pub struct Snapshot {
    text: String,
    hash: ContentHash,
}

impl Snapshot {
    /// Captures a snapshot of the given source text.
    pub fn new(text: String) -> Self {
        let hash = ContentHash::from_text(&text);
        Self { text, hash }
    }

    /// Returns the captured source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the content hash of the captured text.
    pub fn hash(&self) -> ContentHash {
        self.hash
    }

    /// Returns `true` if `candidate` is byte-for-byte identical to this
    /// snapshot's text.
    pub fn matches(&self, candidate: &str) -> bool {
        self.hash == ContentHash::from_text(candidate) && self.text == candidate
    }
}
