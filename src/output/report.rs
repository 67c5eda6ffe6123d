// Text report: titled tables written to a file.
//
// Layout: a "Skills Overview" heading, then one single-column table per skill
// list and a metrics table, each preceded by its title and followed by a
// blank line. Tables use comfy-table's full UTF-8 box drawing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets, Table};

use crate::pipeline::analyze::AnalysisReport;
use crate::scoring::metrics::SkillMatchScore;

pub const REPORT_HEADING: &str = "Skills Overview";

/// Render one titled table followed by a blank line.
pub fn render_section<S: AsRef<str>>(title: &str, headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.iter().map(|cell| cell.as_ref()).collect::<Vec<&str>>());
    }
    format!("{title}\n{table}\n\n")
}

/// Render a single-column "Skill" table.
pub fn render_skill_section(title: &str, skills: &[String]) -> String {
    let rows: Vec<Vec<&str>> = skills.iter().map(|s| vec![s.as_str()]).collect();
    render_section(title, &["Skill"], &rows)
}

/// Render the precision / recall / F1 table.
pub fn render_metrics_section(score: &SkillMatchScore) -> String {
    let rows = vec![
        vec!["Precision".to_string(), format!("{:.2}", score.precision)],
        vec!["Recall".to_string(), format!("{:.2}", score.recall)],
        vec!["F1 Score".to_string(), format!("{:.2}", score.f1)],
    ];
    render_section("Skill Matching Evaluation Metrics", &["Metric", "Score"], &rows)
}

/// Append a rendered section to `path`, creating the file if needed.
pub fn append_section(path: &Path, section: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open report file {}", path.display()))?;
    file.write_all(section.as_bytes())
        .with_context(|| format!("Failed to write report file {}", path.display()))?;
    Ok(())
}

/// Write the full report, replacing any previous file at `path`.
pub fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }

    std::fs::write(path, format!("{REPORT_HEADING}\n"))
        .with_context(|| format!("Failed to create report file {}", path.display()))?;

    append_section(path, &render_skill_section("All Skills", &report.all_skills))?;
    append_section(
        path,
        &render_skill_section("User's Skills", report.user_skills.as_slice()),
    )?;
    append_section(
        path,
        &render_skill_section("Relevant Skills", report.required_skills.as_slice()),
    )?;
    append_section(
        path,
        &render_skill_section("Recommended Skills (Not in Resume)", &report.missing_skills),
    )?;
    append_section(path, &render_metrics_section(&report.score))?;

    Ok(())
}
