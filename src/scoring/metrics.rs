// Precision / recall / F1 between two extracted skill sets.
//
// The resume set is the prediction and the job set is the reference:
// precision is how much of the resume the job asks for, recall is how much of
// the job the resume covers. Every ratio with a zero denominator is 0.0.

use std::collections::HashSet;

use serde::Serialize;

/// Overlap metrics between a predicted and a reference skill set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillMatchScore {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Score `predicted` against `reference` with exact string equality.
pub fn score_skill_sets(predicted: &[String], reference: &[String]) -> SkillMatchScore {
    let predicted_set: HashSet<&str> = predicted.iter().map(String::as_str).collect();
    let reference_set: HashSet<&str> = reference.iter().map(String::as_str).collect();

    let true_positives = predicted_set.intersection(&reference_set).count();
    let false_positives = predicted.len().saturating_sub(true_positives);
    let false_negatives = reference.len().saturating_sub(true_positives);

    let precision = ratio(true_positives as f64, (true_positives + false_positives) as f64);
    let recall = ratio(true_positives as f64, (true_positives + false_negatives) as f64);
    let f1 = ratio(2.0 * precision * recall, precision + recall);

    SkillMatchScore {
        true_positives,
        false_positives,
        false_negatives,
        precision,
        recall,
        f1,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
