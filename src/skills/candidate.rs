// Match candidates: skill occurrences found before deduplication.

use std::ops::Range;

use serde::Serialize;

use super::casing::title_case;

/// Which matcher produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrigin {
    /// Vocabulary phrase found verbatim (case-insensitive) as a token span
    Phrase,
    /// Single token fuzzily matched to a vocabulary entry
    PartialToken,
}

/// A found skill occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    /// The text that produced the match: the document span for phrase
    /// matches, the vocabulary entry for partial-token matches
    pub matched: String,
    /// Title-cased form stored in the extracted skill set
    pub display: String,
    pub origin: MatchOrigin,
    /// Token index range in the document
    pub tokens: Range<usize>,
}

impl MatchCandidate {
    pub fn new(matched: &str, origin: MatchOrigin, tokens: Range<usize>) -> Self {
        Self {
            matched: matched.to_string(),
            display: title_case(matched),
            origin,
            tokens,
        }
    }
}
