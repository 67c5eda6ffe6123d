// Missing skills: what the job asks for that the resume doesn't show.

use std::collections::HashSet;

/// Every reference skill absent from `predicted`, in reference order.
/// Exact string comparison only.
pub fn missing_skills(predicted: &[String], reference: &[String]) -> Vec<String> {
    let have: HashSet<&str> = predicted.iter().map(String::as_str).collect();
    reference
        .iter()
        .filter(|skill| !have.contains(skill.as_str()))
        .cloned()
        .collect()
}
