// Output formatting: terminal display, text report and metrics chart.

pub mod chart;
pub mod report;
pub mod terminal;
