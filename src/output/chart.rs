// Metrics bar chart rendered as a standalone SVG document.
//
// Three bars (Precision, Recall, F1 Score) on a fixed 0-1 axis with dashed
// horizontal grid lines and the value printed above each bar.

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::scoring::metrics::SkillMatchScore;

pub const CHART_TITLE: &str = "Skill Matching Evaluation Metrics";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 90.0;
/// Fraction of each slot a bar occupies
const BAR_FILL: f64 = 0.6;

const BARS: [(&str, &str); 3] = [
    ("Precision", "#FF9F00"),
    ("Recall", "#008B8B"),
    ("F1 Score", "#8B008B"),
];

/// Render the metrics chart as SVG markup.
pub fn render_svg(score: &SkillMatchScore) -> Result<String> {
    let mut svg = String::new();
    write_svg(&mut svg, score).context("Failed to render chart SVG")?;
    Ok(svg)
}

/// Write the full SVG document for `score` into `out`.
fn write_svg<W: Write>(out: &mut W, score: &SkillMatchScore) -> fmt::Result {
    let values = [score.precision, score.recall, score.f1];

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let bottom = MARGIN_TOP + plot_h;
    let y_of = |v: f64| bottom - v.clamp(0.0, 1.0) * plot_h;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="20">{CHART_TITLE}</text>"#,
        WIDTH / 2.0,
        MARGIN_TOP / 2.0 + 8.0
    )?;

    // Grid lines and y-axis ticks every 0.2
    for step in 0..=5 {
        let v = step as f64 * 0.2;
        let y = y_of(v);
        writeln!(
            out,
            r##"<line x1="{MARGIN_LEFT:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#b0b0b0" stroke-dasharray="6,4"/>"##,
            MARGIN_LEFT + plot_w
        )?;
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="13">{v:.1}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0
        )?;
    }

    let slot = plot_w / BARS.len() as f64;
    let bar_w = slot * BAR_FILL;
    for (i, ((label, color), value)) in BARS.iter().zip(values).enumerate() {
        let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
        let top = y_of(value);
        writeln!(
            out,
            r#"<rect x="{:.1}" y="{top:.1}" width="{bar_w:.1}" height="{:.1}" fill="{color}"/>"#,
            center - bar_w / 2.0,
            bottom - top
        )?;
        writeln!(
            out,
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="14">{value:.2}</text>"#,
            top - 6.0
        )?;
        writeln!(
            out,
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="14">{label}</text>"#,
            bottom + 22.0
        )?;
    }

    // Axes
    writeln!(
        out,
        r#"<line x1="{MARGIN_LEFT:.1}" y1="{MARGIN_TOP:.1}" x2="{MARGIN_LEFT:.1}" y2="{bottom:.1}" stroke="black"/>"#
    )?;
    writeln!(
        out,
        r#"<line x1="{MARGIN_LEFT:.1}" y1="{bottom:.1}" x2="{:.1}" y2="{bottom:.1}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="15">Metrics</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 25.0
    )?;
    writeln!(
        out,
        r#"<text x="25" y="{:.1}" text-anchor="middle" font-size="15" transform="rotate(-90 25 {:.1})">Score</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    )?;
    writeln!(out, "</svg>")
}

/// Render the chart and write it to `path`.
pub fn write_chart(path: &Path, score: &SkillMatchScore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create chart directory {}", parent.display()))?;
    }
    std::fs::write(path, render_svg(score)?)
        .with_context(|| format!("Failed to write chart {}", path.display()))?;
    Ok(())
}
