// Similarity scorer trait, the swap-ready string comparison abstraction.
//
// All scores live on a 0-100 scale so a single threshold works for every
// backend. The default backend is the indel ratio (2 * LCS / total length);
// the strsim-based backends are there for vocabularies where edit distance or
// prefix-weighted similarity behaves better.

use super::weighted::weighted_ratio;

/// The best-scoring candidate for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch<'c> {
    /// Position of the candidate in the slice passed to `best_match`
    pub index: usize,
    pub candidate: &'c str,
    pub score: f64,
}

/// Trait for scoring how alike two strings are.
pub trait SimilarityScorer: Send + Sync {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Score two strings as-is (case-sensitive) on a 0-100 scale.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Find the candidate most similar to `query`.
    ///
    /// Both sides are run through `preprocess` first, so this comparison is
    /// case- and punctuation-insensitive, and scored with `weighted_ratio`
    /// so a single word can reach a multi-word entry. Ties keep the earliest
    /// candidate. Returns None when there are no candidates or the query has
    /// nothing left to compare after preprocessing.
    fn best_match<'c>(&self, query: &str, candidates: &'c [String]) -> Option<BestMatch<'c>> {
        let query = preprocess(query);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<BestMatch<'c>> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = weighted_ratio(self, &query, &preprocess(candidate));
            if best.map_or(true, |b| score > b.score) {
                best = Some(BestMatch {
                    index,
                    candidate: candidate.as_str(),
                    score,
                });
            }
        }
        best
    }
}

/// Lower-case, replace anything that isn't a letter or digit with a space,
/// and trim.
pub fn preprocess(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.trim().to_lowercase()
}

/// Indel ratio: `200 * lcs(a, b) / (len(a) + len(b))`, rounded to a whole
/// number. Zero if either side is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndelScorer;

impl SimilarityScorer for IndelScorer {
    fn name(&self) -> &'static str {
        "indel"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let total = (a.len() + b.len()) as f64;
        let lcs = lcs_len(&a, &b) as f64;
        (200.0 * lcs / total).round_ties_even()
    }
}

/// Normalized Levenshtein distance via strsim, scaled to 0-100.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }
}

/// Jaro-Winkler similarity via strsim, scaled to 0-100.
#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinklerScorer;

impl SimilarityScorer for JaroWinklerScorer {
    fn name(&self) -> &'static str {
        "jaro-winkler"
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b) * 100.0
    }
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indel_identical() {
        assert_eq!(IndelScorer.similarity("Docker", "Docker"), 100.0);
    }

    #[test]
    fn test_indel_is_case_sensitive() {
        // "Aws" vs "AWS" share only the leading "A"
        assert_eq!(IndelScorer.similarity("Aws", "AWS"), 33.0);
    }

    #[test]
    fn test_indel_plural() {
        // lcs = 6, total = 13 → 92.3
        assert_eq!(IndelScorer.similarity("dockers", "docker"), 92.0);
    }

    #[test]
    fn test_indel_empty() {
        assert_eq!(IndelScorer.similarity("", "docker"), 0.0);
        assert_eq!(IndelScorer.similarity("", ""), 0.0);
    }

    #[test]
    fn test_lcs_len() {
        let a: Vec<char> = "kubernetes".chars().collect();
        let b: Vec<char> = "docker".chars().collect();
        // "ker"
        assert_eq!(lcs_len(&a, &b), 3);
    }

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("  CI/CD! "), "ci cd");
        assert_eq!(preprocess("..."), "");
    }

    #[test]
    fn test_best_match_picks_highest() {
        let candidates = vec!["Terraform".to_string(), "Docker".to_string()];
        let best = IndelScorer.best_match("dockers", &candidates).unwrap();
        assert_eq!(best.index, 1);
        assert_eq!(best.candidate, "Docker");
        assert_eq!(best.score, 92.0);
    }

    #[test]
    fn test_best_match_ignores_case() {
        let candidates = vec!["AWS".to_string()];
        let best = IndelScorer.best_match("aws", &candidates).unwrap();
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let candidates = vec!["Git".to_string(), "git".to_string()];
        let best = IndelScorer.best_match("GIT", &candidates).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_best_match_single_word_reaches_multi_word_entry() {
        let candidates = vec!["Docker".to_string(), "Amazon Web Services".to_string()];
        let best = IndelScorer.best_match("amazon", &candidates).unwrap();
        assert_eq!(best.candidate, "Amazon Web Services");
        assert_eq!(best.score, 90.0);
    }

    #[test]
    fn test_best_match_empty_inputs() {
        assert!(IndelScorer.best_match("docker", &[]).is_none());
        let candidates = vec!["Docker".to_string()];
        assert!(IndelScorer.best_match("--", &candidates).is_none());
    }

    #[test]
    fn test_strsim_backends_scale() {
        assert!((LevenshteinScorer.similarity("rust", "rust") - 100.0).abs() < 1e-9);
        assert!((JaroWinklerScorer.similarity("rust", "rust") - 100.0).abs() < 1e-9);
        assert!(LevenshteinScorer.similarity("rust", "go") < 50.0);
    }
}
