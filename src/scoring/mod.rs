// Skill set comparison: overlap metrics and missing skills.

pub mod metrics;
pub mod missing;
