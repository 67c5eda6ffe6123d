use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::skills::extractor::MatchSettings;
use crate::skills::similarity::{
    IndelScorer, JaroWinklerScorer, LevenshteinScorer, SimilarityScorer,
};

/// Which similarity backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerBackend {
    /// Indel ratio (default): 2 * LCS / total length
    #[default]
    Indel,
    /// Normalized Levenshtein distance (strsim)
    Levenshtein,
    /// Jaro-Winkler similarity (strsim), favors shared prefixes
    JaroWinkler,
}

impl FromStr for ScorerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indel" | "ratio" => Ok(Self::Indel),
            "levenshtein" => Ok(Self::Levenshtein),
            "jaro-winkler" | "jaro_winkler" | "jarowinkler" => Ok(Self::JaroWinkler),
            other => anyhow::bail!(
                "Unknown scorer '{other}'. Expected one of: indel, levenshtein, jaro-winkler"
            ),
        }
    }
}

impl ScorerBackend {
    /// Build the scorer for this backend.
    pub fn create_scorer(self) -> Box<dyn SimilarityScorer> {
        match self {
            Self::Indel => Box::new(IndelScorer),
            Self::Levenshtein => Box::new(LevenshteinScorer),
            Self::JaroWinkler => Box::new(JaroWinklerScorer),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a default;
/// CLI flags override whatever is loaded here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Similarity threshold (0-100) for dedup and partial-token matching
    pub threshold: f64,
    /// Minimum token length for partial-token matching
    pub min_token_len: usize,
    pub scorer_backend: ScorerBackend,
    /// Where the text report is written
    pub output_path: PathBuf,
    /// Where the SVG metrics chart is written
    pub chart_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let settings = MatchSettings::default();
        Self {
            threshold: settings.threshold,
            min_token_len: settings.min_token_len,
            scorer_backend: ScorerBackend::default(),
            output_path: PathBuf::from("./skillgap-report.txt"),
            chart_path: PathBuf::from("./evaluation_metrics.svg"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let threshold = match env::var("SKILLGAP_THRESHOLD") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("SKILLGAP_THRESHOLD is not a number: '{raw}'"))?,
            Err(_) => defaults.threshold,
        };

        let min_token_len = match env::var("SKILLGAP_MIN_TOKEN_LEN") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SKILLGAP_MIN_TOKEN_LEN is not a count: '{raw}'"))?,
            Err(_) => defaults.min_token_len,
        };

        let scorer_backend = match env::var("SKILLGAP_SCORER") {
            Ok(raw) => raw.parse()?,
            // unset means the default backend
            Err(_) => defaults.scorer_backend,
        };

        let config = Self {
            threshold,
            min_token_len,
            scorer_backend,
            output_path: env::var("SKILLGAP_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            chart_path: env::var("SKILLGAP_CHART")
                .map(PathBuf::from)
                .unwrap_or(defaults.chart_path),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. Call again after applying CLI overrides.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0 and 100, got {}",
                self.threshold
            );
        }
        if self.min_token_len == 0 {
            anyhow::bail!("Minimum token length must be at least 1");
        }
        Ok(())
    }

    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            threshold: self.threshold,
            min_token_len: self.min_token_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_backend_parse() {
        assert_eq!("indel".parse::<ScorerBackend>().unwrap(), ScorerBackend::Indel);
        assert_eq!(
            "Jaro-Winkler".parse::<ScorerBackend>().unwrap(),
            ScorerBackend::JaroWinkler
        );
        assert_eq!(
            " levenshtein ".parse::<ScorerBackend>().unwrap(),
            ScorerBackend::Levenshtein
        );
        assert!("cosine".parse::<ScorerBackend>().is_err());
    }

    #[test]
    fn test_create_scorer_names() {
        assert_eq!(ScorerBackend::Indel.create_scorer().name(), "indel");
        assert_eq!(ScorerBackend::JaroWinkler.create_scorer().name(), "jaro-winkler");
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_settings(), MatchSettings::default());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = Config {
            threshold: 120.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            min_token_len: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
