use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use skillgap::config::{Config, ScorerBackend};
use skillgap::skills::extractor::SkillExtractor;
use skillgap::skills::tokenizer::UnicodeWordTokenizer;

/// Skillgap: find the skills a job asks for that your resume doesn't show.
///
/// Extracts skills from a resume and a job posting against a shared skill
/// vocabulary, then scores how well the resume covers the job.
#[derive(Parser)]
#[command(name = "skillgap", version, about)]
struct Cli {
    /// Similarity threshold (0-100) for dedup and fuzzy token matching
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Minimum token length considered for fuzzy token matching
    #[arg(long, global = true)]
    min_token_len: Option<usize>,

    /// Similarity backend: indel, levenshtein, jaro-winkler
    #[arg(long, global = true)]
    scorer: Option<ScorerBackend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a resume against a job posting and write the report and chart
    Analyze {
        /// Skill vocabulary file (one skill per line)
        #[arg(long)]
        skills: PathBuf,

        /// Resume text file
        #[arg(long)]
        resume: PathBuf,

        /// Job posting text file
        #[arg(long)]
        job: PathBuf,

        /// Report file (default: SKILLGAP_OUTPUT or ./skillgap-report.txt)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Chart file (default: SKILLGAP_CHART or ./evaluation_metrics.svg)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Skip writing the chart
        #[arg(long)]
        no_chart: bool,

        /// Print the analysis as JSON instead of the terminal summary
        #[arg(long)]
        json: bool,
    },

    /// Extract the skills mentioned in a single document
    Extract {
        /// Skill vocabulary file (one skill per line)
        #[arg(long)]
        skills: PathBuf,

        /// Document text file
        document: PathBuf,

        /// Print the skills as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score two already-extracted skill lists (one skill per line)
    Compare {
        /// Skills found in the resume
        #[arg(long)]
        resume_skills: PathBuf,

        /// Skills required by the job
        #[arg(long)]
        job_skills: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skillgap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(min_token_len) = cli.min_token_len {
        config.min_token_len = min_token_len;
    }
    if let Some(scorer) = cli.scorer {
        config.scorer_backend = scorer;
    }
    config.validate()?;

    match cli.command {
        Commands::Analyze {
            skills,
            resume,
            job,
            output,
            chart,
            no_chart,
            json,
        } => {
            let extractor = build_extractor(&config, &skills)?;
            let resume_text = read_document(&resume)?;
            let job_text = read_document(&job)?;

            let report = skillgap::pipeline::analyze::run(&extractor, &resume_text, &job_text);

            let output_path = output.unwrap_or_else(|| config.output_path.clone());
            skillgap::output::report::write_report(&output_path, &report)?;
            info!(path = %output_path.display(), "Wrote skills report");

            let chart_path = (!no_chart).then(|| chart.unwrap_or_else(|| config.chart_path.clone()));
            if let Some(path) = &chart_path {
                skillgap::output::chart::write_chart(path, &report.score)?;
                info!(path = %path.display(), "Wrote metrics chart");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            skillgap::output::terminal::display_report(&report);
            println!(
                "\n{}",
                format!("Report saved to: {}", output_path.display()).bold()
            );
            if let Some(path) = chart_path {
                println!("{}", format!("Chart saved to: {}", path.display()).bold());
            }
        }

        Commands::Extract {
            skills,
            document,
            json,
        } => {
            let extractor = build_extractor(&config, &skills)?;
            let text = read_document(&document)?;
            let found = extractor.extract(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                let title = format!("Skills in {}", document.display());
                skillgap::output::terminal::display_skills(&title, found.as_slice());
            }
        }

        Commands::Compare {
            resume_skills,
            job_skills,
        } => {
            let predicted = read_skill_list(&resume_skills)?;
            let reference = read_skill_list(&job_skills)?;

            let score = skillgap::scoring::metrics::score_skill_sets(&predicted, &reference);
            let missing = skillgap::scoring::missing::missing_skills(&predicted, &reference);

            skillgap::output::terminal::display_skills(
                "Recommended Skills (Not in Resume)",
                &missing,
            );
            skillgap::output::terminal::display_metrics(&score);
        }
    }

    Ok(())
}

/// Load the vocabulary and build the extractor once for the whole run.
fn build_extractor(config: &Config, skills_path: &Path) -> Result<SkillExtractor> {
    let vocabulary = skillgap::skills::vocabulary::load_vocabulary(skills_path)?;
    info!(
        skills = vocabulary.len(),
        scorer = ?config.scorer_backend,
        threshold = config.threshold,
        "Loaded skill vocabulary"
    );

    Ok(SkillExtractor::new(
        vocabulary,
        Box::new(UnicodeWordTokenizer),
        config.scorer_backend.create_scorer(),
        config.match_settings(),
    ))
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}

/// Read a list of already-extracted skills, one per line, skipping blanks.
fn read_skill_list(path: &Path) -> Result<Vec<String>> {
    let raw = read_document(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
