// Weighted ratio for query-vs-vocabulary matching.
//
// A single document word rarely matches a multi-word skill with a plain
// ratio ("amazon" vs "amazon web services" scores 48). The weighted ratio
// takes the best of several views of the pair:
//   - the plain ratio
//   - the best same-length window of the longer string (partial ratio)
//   - ratios over sorted tokens and over shared/unshared token sets
// Partial and token views are scaled down so they only win when they are
// clearly better. When the lengths are close (ratio < 1.5) partial views are
// skipped entirely; when they are very far apart (ratio > 8) partial views
// are scaled harder.
//
// Every comparison goes through the scorer's own `similarity`, so each
// backend gets its own weighted variant.

use std::collections::BTreeSet;

use super::similarity::SimilarityScorer;

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.90;
const FAR_PARTIAL_SCALE: f64 = 0.60;

/// Best-of-views score on a 0-100 scale, rounded to a whole number.
/// Inputs are expected to be preprocessed already (lower-cased, punctuation
/// replaced by spaces).
pub fn weighted_ratio<S: SimilarityScorer + ?Sized>(scorer: &S, a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    let base = ratio(scorer, a, b);
    let len_ratio = a_len.max(b_len) as f64 / a_len.min(b_len) as f64;

    let best = if len_ratio < 1.5 {
        base.max(token_sort_ratio(scorer, a, b, false) * UNBASE_SCALE)
            .max(token_set_ratio(scorer, a, b, false) * UNBASE_SCALE)
    } else {
        let partial_scale = if len_ratio > 8.0 {
            FAR_PARTIAL_SCALE
        } else {
            PARTIAL_SCALE
        };
        base.max(partial_ratio(scorer, a, b) * partial_scale)
            .max(token_sort_ratio(scorer, a, b, true) * UNBASE_SCALE * partial_scale)
            .max(token_set_ratio(scorer, a, b, true) * UNBASE_SCALE * partial_scale)
    };

    best.round()
}

/// Best score of the shorter string against every same-length window of the
/// longer one.
pub fn partial_ratio<S: SimilarityScorer + ?Sized>(scorer: &S, a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    let long_chars: Vec<char> = long.chars().collect();

    if short_len == 0 {
        return 0.0;
    }
    if short_len == long_chars.len() {
        return ratio(scorer, short, long);
    }

    long_chars
        .windows(short_len)
        .map(|window| {
            let window: String = window.iter().collect();
            ratio(scorer, short, &window)
        })
        .fold(0.0, f64::max)
}

/// Plain similarity with empty strings scoring zero.
fn ratio<S: SimilarityScorer + ?Sized>(scorer: &S, a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        0.0
    } else {
        scorer.similarity(a, b)
    }
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio<S: SimilarityScorer + ?Sized>(
    scorer: &S,
    a: &str,
    b: &str,
    partial: bool,
) -> f64 {
    let a = sorted_tokens(a);
    let b = sorted_tokens(b);
    if partial {
        partial_ratio(scorer, &a, &b)
    } else {
        ratio(scorer, &a, &b)
    }
}

/// Compare the shared tokens against each side's shared + own tokens.
fn token_set_ratio<S: SimilarityScorer + ?Sized>(
    scorer: &S,
    a: &str,
    b: &str,
    partial: bool,
) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared = join(tokens_a.intersection(&tokens_b).copied());
    let only_a = join(tokens_a.difference(&tokens_b).copied());
    let only_b = join(tokens_b.difference(&tokens_a).copied());
    let combined_a = join([shared.as_str(), only_a.as_str()]);
    let combined_b = join([shared.as_str(), only_b.as_str()]);

    let compare = |x: &str, y: &str| {
        if partial {
            partial_ratio(scorer, x, y)
        } else {
            ratio(scorer, x, y)
        }
    };

    compare(&shared, &combined_a)
        .max(compare(&shared, &combined_b))
        .max(compare(&combined_a, &combined_b))
}

fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
