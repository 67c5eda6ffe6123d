// Resume vs job analysis.
//
// Extracts the skills of both documents with one shared extractor, scores the
// resume (prediction) against the job (reference) and lists what's missing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::scoring::metrics::{score_skill_sets, SkillMatchScore};
use crate::scoring::missing::missing_skills;
use crate::skills::dedup::ExtractedSkillSet;
use crate::skills::extractor::SkillExtractor;

/// Everything the report writer, chart and terminal output need.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The full vocabulary the documents were matched against
    pub all_skills: Vec<String>,
    /// Skills found in the resume
    pub user_skills: ExtractedSkillSet,
    /// Skills found in the job posting
    pub required_skills: ExtractedSkillSet,
    /// Required skills the resume doesn't show
    pub missing_skills: Vec<String>,
    pub score: SkillMatchScore,
    pub generated_at: DateTime<Utc>,
}

/// Run the full analysis for one resume and one job posting.
pub fn run(extractor: &SkillExtractor, resume_text: &str, job_text: &str) -> AnalysisReport {
    let user_skills = extractor.extract(resume_text);
    let required_skills = extractor.extract(job_text);

    info!(
        vocabulary = extractor.vocabulary().len(),
        user_skills = user_skills.len(),
        required_skills = required_skills.len(),
        scorer = extractor.scorer_name(),
        "Extracted resume and job skills"
    );

    let score = score_skill_sets(user_skills.as_slice(), required_skills.as_slice());
    let missing = missing_skills(user_skills.as_slice(), required_skills.as_slice());

    info!(
        precision = score.precision,
        recall = score.recall,
        f1 = score.f1,
        missing = missing.len(),
        "Scored skill match"
    );

    AnalysisReport {
        all_skills: extractor.vocabulary().entries().to_vec(),
        user_skills,
        required_skills,
        missing_skills: missing,
        score,
        generated_at: Utc::now(),
    }
}
