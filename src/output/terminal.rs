// Colored terminal output for skill lists and match metrics.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use crate::pipeline::analyze::AnalysisReport;
use crate::scoring::metrics::SkillMatchScore;

const BAR_WIDTH: usize = 20;

/// Display a titled, numbered skill list.
pub fn display_skills(title: &str, skills: &[String]) {
    println!("\n{}", format!("=== {title} ({}) ===", skills.len()).bold());

    if skills.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for (i, skill) in skills.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, skill);
    }
}

/// Build a fixed-width text bar for a 0-1 value.
pub fn metric_bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Display precision, recall and F1 as colored bars.
pub fn display_metrics(score: &SkillMatchScore) {
    println!("\n{}", "=== Skill Matching Evaluation Metrics ===".bold());
    println!();

    for (label, value) in [
        ("Precision", score.precision),
        ("Recall", score.recall),
        ("F1 Score", score.f1),
    ] {
        let bar = metric_bar(value);
        let colored_bar = if value >= 0.75 {
            bar.bright_green()
        } else if value >= 0.40 {
            bar.bright_yellow()
        } else {
            bar.bright_red()
        };
        println!("  {:<10} {} {:.2}", label.bold(), colored_bar, value);
    }

    println!(
        "\n  {}",
        format!(
            "matched {}  |  resume-only {}  |  missing {}",
            score.true_positives, score.false_positives, score.false_negatives
        )
        .dimmed()
    );
}

/// Display the full analysis: both skill lists, the gaps and the metrics.
pub fn display_report(report: &AnalysisReport) {
    display_skills("User's Skills", report.user_skills.as_slice());
    display_skills("Relevant Skills", report.required_skills.as_slice());
    display_skills("Recommended Skills (Not in Resume)", &report.missing_skills);
    display_metrics(&report.score);
}
