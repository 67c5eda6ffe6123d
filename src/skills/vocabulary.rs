// Skill vocabulary: the canonical list of skill phrases to look for.
//
// One skill per line in the source file. Entries keep their original casing;
// case folding happens in the matchers, never here.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

/// Ordered list of canonical skill strings.
///
/// Every entry is non-empty and trimmed. Duplicates are kept: the phrase
/// matcher and deduplicator tolerate them.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from raw lines, trimming each and skipping blanks.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Read a vocabulary file (UTF-8, one skill per line).
///
/// A file with no entries is not an error, but it is logged since nothing
/// will ever match.
pub fn load_vocabulary(path: &Path) -> Result<SkillVocabulary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skills file {}", path.display()))?;
    let vocabulary = SkillVocabulary::from_lines(raw.lines());
    if vocabulary.is_empty() {
        warn!(
            path = %path.display(),
            "Skills file contains no skills; nothing will be matched"
        );
    }
    Ok(vocabulary)
}
