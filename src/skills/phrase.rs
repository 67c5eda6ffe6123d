// Phrase matcher: finds vocabulary entries verbatim in a document.
//
// Each vocabulary entry is tokenized once with the document tokenizer and
// lower-cased. A match is a run of consecutive document tokens whose
// lower-cased texts equal the entry's tokens one-for-one. Patterns are
// indexed by their first token so each document position only checks the
// entries that could start there.

use std::collections::HashMap;

use super::candidate::{MatchCandidate, MatchOrigin};
use super::tokenizer::{Token, Tokenizer};
use super::vocabulary::SkillVocabulary;

/// A phrase occurrence as a token range plus the vocabulary entry it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhraseSpan {
    pub start: usize,
    pub end: usize,
    pub entry: usize,
}

/// Case-insensitive multi-token phrase matcher over a fixed vocabulary.
pub struct PhraseMatcher {
    /// Lower-cased token sequence per vocabulary entry (same order as the vocabulary)
    patterns: Vec<Vec<String>>,
    /// First lower-cased token → indices into `patterns`
    by_first_token: HashMap<String, Vec<usize>>,
}

impl PhraseMatcher {
    pub fn new(vocabulary: &SkillVocabulary, tokenizer: &dyn Tokenizer) -> Self {
        let patterns: Vec<Vec<String>> = vocabulary
            .iter()
            .map(|entry| {
                tokenizer
                    .tokenize(entry)
                    .iter()
                    .map(|t| t.text.to_lowercase())
                    .collect()
            })
            .collect();

        let mut by_first_token: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, pattern) in patterns.iter().enumerate() {
            if let Some(first) = pattern.first() {
                by_first_token.entry(first.clone()).or_default().push(i);
            }
        }

        Self {
            patterns,
            by_first_token,
        }
    }

    /// Find every matching span, ordered by start then end.
    ///
    /// Spans that overlap are all returned. When duplicate vocabulary entries
    /// hit the exact same span, only the first entry is kept.
    pub fn find_spans(&self, tokens: &[Token<'_>]) -> Vec<PhraseSpan> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut spans = Vec::new();

        for start in 0..lowered.len() {
            let Some(pattern_ids) = self.by_first_token.get(&lowered[start]) else {
                continue;
            };
            for &id in pattern_ids {
                let pattern = &self.patterns[id];
                let end = start + pattern.len();
                if end <= lowered.len() && lowered[start..end] == pattern[..] {
                    spans.push(PhraseSpan {
                        start,
                        end,
                        entry: id,
                    });
                }
            }
        }

        spans.sort();
        spans.dedup_by(|b, a| a.start == b.start && a.end == b.end);
        spans
    }

    /// Find phrase matches and turn them into candidates whose display form
    /// is the document's own span text in title case.
    pub fn find_candidates(&self, text: &str, tokens: &[Token<'_>]) -> Vec<MatchCandidate> {
        self.find_spans(tokens)
            .into_iter()
            .map(|span| {
                let byte_start = tokens[span.start].start;
                let byte_end = tokens[span.end - 1].end;
                MatchCandidate::new(
                    &text[byte_start..byte_end],
                    MatchOrigin::Phrase,
                    span.start..span.end,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::tokenizer::UnicodeWordTokenizer;

    fn displays(vocab: &[&str], text: &str) -> Vec<String> {
        let vocabulary = SkillVocabulary::from_lines(vocab.iter().copied());
        let matcher = PhraseMatcher::new(&vocabulary, &UnicodeWordTokenizer);
        let tokens = UnicodeWordTokenizer.tokenize(text);
        matcher
            .find_candidates(text, &tokens)
            .into_iter()
            .map(|c| c.display)
            .collect()
    }

    #[test]
    fn test_case_insensitive_document_order() {
        let found = displays(
            &["Docker", "Kubernetes", "AWS"],
            "Experienced with docker and AWS, familiar with KUBERNETES.",
        );
        assert_eq!(found, vec!["Docker", "Aws", "Kubernetes"]);
    }

    #[test]
    fn test_multi_word_phrase_keeps_document_spacing() {
        let found = displays(&["machine learning"], "Applied Machine  Learning daily");
        assert_eq!(found, vec!["Machine  Learning"]);
    }

    #[test]
    fn test_partial_phrase_does_not_match() {
        let found = displays(&["machine learning"], "machine vision");
        assert!(found.is_empty());
    }

    #[test]
    fn test_token_alignment_required() {
        // "Go" must not match inside "Google"
        let found = displays(&["Go"], "Worked at Google");
        assert!(found.is_empty());
    }

    #[test]
    fn test_overlapping_spans_all_yielded() {
        let found = displays(&["Google Cloud", "Cloud"], "Google Cloud expert");
        assert_eq!(found, vec!["Google Cloud", "Cloud"]);
    }

    #[test]
    fn test_duplicate_entries_collapse_to_one_span() {
        let vocabulary = SkillVocabulary::from_lines(["Git", "git"]);
        let matcher = PhraseMatcher::new(&vocabulary, &UnicodeWordTokenizer);
        let tokens = UnicodeWordTokenizer.tokenize("git and GIT");
        let spans = matcher.find_spans(&tokens);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].entry, 0);
        assert_eq!(spans[1].start, 2);
    }

    #[test]
    fn test_punctuated_phrase() {
        let found = displays(&["CI/CD"], "Built ci/cd pipelines");
        assert_eq!(found, vec!["Ci/Cd"]);
    }

    #[test]
    fn test_empty_vocabulary_and_document() {
        assert!(displays(&[], "Docker everywhere").is_empty());
        assert!(displays(&["Docker"], "").is_empty());
    }
}
