// Skillgap: skill extraction and resume-to-job skill gap scoring
//
// This is the library root. Each module corresponds to a stage of the
// analysis: extract skills from text, compare skill sets, write results.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod skills;
