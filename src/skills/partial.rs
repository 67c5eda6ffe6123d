// Partial-token matcher: fuzzy single-token fallback after phrase matching.
//
// Catches near-misses the phrase matcher can't see ("dockers", "kubernets").
// Only alphabetic tokens of at least `min_token_len` characters that no
// phrase match covers are considered; short words, numbers and punctuation
// are never candidates. The reported skill is the vocabulary entry, not the
// token text.

use super::candidate::{MatchCandidate, MatchOrigin};
use super::similarity::SimilarityScorer;
use super::tokenizer::Token;
use super::vocabulary::SkillVocabulary;

/// Whether a token is eligible for fuzzy matching at all.
pub fn is_candidate_token(token: &Token<'_>, min_token_len: usize) -> bool {
    token.is_alpha && token.char_len() >= min_token_len
}

/// Fuzzy-match every eligible, uncovered token against the vocabulary.
///
/// `covered[i]` marks tokens consumed by a phrase match. Returns candidates
/// in document order whose best score is at or above `threshold`; the caller
/// deduplicates them against the phrase matches.
pub fn find_candidates(
    tokens: &[Token<'_>],
    covered: &[bool],
    vocabulary: &SkillVocabulary,
    scorer: &dyn SimilarityScorer,
    threshold: f64,
    min_token_len: usize,
) -> Vec<MatchCandidate> {
    if vocabulary.is_empty() {
        return Vec::new();
    }

    tokens
        .iter()
        .enumerate()
        .filter(|(i, token)| {
            !covered.get(*i).copied().unwrap_or(false) && is_candidate_token(token, min_token_len)
        })
        .filter_map(|(i, token)| {
            let best = scorer.best_match(token.text, vocabulary.entries())?;
            (best.score >= threshold)
                .then(|| MatchCandidate::new(best.candidate, MatchOrigin::PartialToken, i..i + 1))
        })
        .collect()
}
