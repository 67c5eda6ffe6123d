// Fuzzy deduplication of extracted skills.
//
// Every new display form is compared against every display form accepted so
// far. If any pair scores at or above the threshold, the newcomer is dropped
// and the earlier form stays. This is O(n²) in accepted skills per document,
// fine for vocabularies in the hundreds. A larger vocabulary would want a
// bucketed index (e.g. by preprocessed key) in front of the pairwise check.

use serde::Serialize;

use super::similarity::SimilarityScorer;

/// Ordered, fuzzily-distinct skill display forms in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedSkillSet {
    skills: Vec<String>,
}

impl ExtractedSkillSet {
    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.skills
    }
}

impl From<Vec<String>> for ExtractedSkillSet {
    /// Wrap an already-extracted list (e.g. read back from a file) as-is.
    fn from(skills: Vec<String>) -> Self {
        Self { skills }
    }
}

/// Append-only seen set used while extracting one document.
pub struct SeenSkills<'s> {
    scorer: &'s dyn SimilarityScorer,
    threshold: f64,
    accepted: Vec<String>,
}

impl<'s> SeenSkills<'s> {
    pub fn new(scorer: &'s dyn SimilarityScorer, threshold: f64) -> Self {
        Self {
            scorer,
            threshold,
            accepted: Vec::new(),
        }
    }

    /// True if `display` scores at or above the threshold against any
    /// accepted skill.
    pub fn is_duplicate(&self, display: &str) -> bool {
        self.accepted
            .iter()
            .any(|seen| self.scorer.similarity(display, seen) >= self.threshold)
    }

    /// Accept `display` unless it duplicates an earlier skill.
    /// Returns whether it was accepted.
    pub fn admit(&mut self, display: &str) -> bool {
        if self.is_duplicate(display) {
            return false;
        }
        self.accepted.push(display.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Freeze the accepted skills.
    pub fn finish(self) -> ExtractedSkillSet {
        ExtractedSkillSet {
            skills: self.accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::similarity::IndelScorer;

    #[test]
    fn test_exact_repeat_dropped() {
        let mut seen = SeenSkills::new(&IndelScorer, 90.0);
        assert!(seen.admit("Aws"));
        assert!(!seen.admit("Aws"));
        assert_eq!(seen.finish().as_slice(), &["Aws"]);
    }

    #[test]
    fn test_near_duplicate_dropped_first_wins() {
        let mut seen = SeenSkills::new(&IndelScorer, 90.0);
        assert!(seen.admit("Kubernetes"));
        // 10 of 10 chars shared, total 21 → 95
        assert!(!seen.admit("Kubernetes "));
        assert_eq!(seen.finish().as_slice(), &["Kubernetes"]);
    }

    #[test]
    fn test_distinct_skills_kept_in_order() {
        let mut seen = SeenSkills::new(&IndelScorer, 90.0);
        for skill in ["Docker", "Terraform", "Ansible"] {
            assert!(seen.admit(skill));
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(seen.finish().as_slice(), &["Docker", "Terraform", "Ansible"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // "Dockers" vs "Docker" scores exactly 92
        let mut seen = SeenSkills::new(&IndelScorer, 92.0);
        seen.admit("Docker");
        assert!(seen.is_duplicate("Dockers"));

        let mut seen = SeenSkills::new(&IndelScorer, 93.0);
        seen.admit("Docker");
        assert!(!seen.is_duplicate("Dockers"));
    }

    #[test]
    fn test_set_accessors() {
        let set = ExtractedSkillSet::from(vec!["Git".to_string(), "Rust".to_string()]);
        assert!(set.contains("Git"));
        assert!(!set.contains("git"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Git", "Rust"]);
    }
}
