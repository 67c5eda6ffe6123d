// Skill extractor: the engine that ties vocabulary, tokenizer and scorer
// together for one document at a time.
//
// Built once at startup and shared by reference. Extraction order:
//   1. phrase matches, deduplicated in document order
//   2. partial-token matches over the tokens no phrase covered
// so a phrase match always wins over a fuzzy match for the same skill.

use tracing::debug;

use super::dedup::{ExtractedSkillSet, SeenSkills};
use super::partial;
use super::phrase::PhraseMatcher;
use super::similarity::SimilarityScorer;
use super::tokenizer::Tokenizer;
use super::vocabulary::SkillVocabulary;

/// Tunables shared by deduplication and partial-token matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    /// Similarity (0-100) at or above which two skills are the same, and at
    /// or above which a partial-token match is accepted (default 90)
    pub threshold: f64,
    /// Minimum token length in characters for partial-token matching (default 4)
    pub min_token_len: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: 90.0,
            min_token_len: 4,
        }
    }
}

/// Extracts skills from documents against a fixed vocabulary.
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    tokenizer: Box<dyn Tokenizer>,
    scorer: Box<dyn SimilarityScorer>,
    phrases: PhraseMatcher,
    settings: MatchSettings,
}

impl SkillExtractor {
    pub fn new(
        vocabulary: SkillVocabulary,
        tokenizer: Box<dyn Tokenizer>,
        scorer: Box<dyn SimilarityScorer>,
        settings: MatchSettings,
    ) -> Self {
        let phrases = PhraseMatcher::new(&vocabulary, tokenizer.as_ref());
        Self {
            vocabulary,
            tokenizer,
            scorer,
            phrases,
            settings,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Extract the skills mentioned in `text`, in discovery order.
    pub fn extract(&self, text: &str) -> ExtractedSkillSet {
        let tokens = self.tokenizer.tokenize(text);
        let mut seen = SeenSkills::new(self.scorer.as_ref(), self.settings.threshold);
        let mut covered = vec![false; tokens.len()];

        let phrase_candidates = self.phrases.find_candidates(text, &tokens);
        let phrase_count = phrase_candidates.len();
        for candidate in phrase_candidates {
            covered[candidate.tokens.clone()].fill(true);
            seen.admit(&candidate.display);
        }
        let after_phrases = seen.len();

        let partial_candidates = partial::find_candidates(
            &tokens,
            &covered,
            &self.vocabulary,
            self.scorer.as_ref(),
            self.settings.threshold,
            self.settings.min_token_len,
        );
        let partial_count = partial_candidates.len();
        for candidate in partial_candidates {
            seen.admit(&candidate.display);
        }

        debug!(
            document_tokens = tokens.len(),
            phrase_matches = phrase_count,
            partial_matches = partial_count,
            from_phrases = after_phrases,
            from_partials = seen.len() - after_phrases,
            "Extracted skills"
        );

        seen.finish()
    }
}
