// Pipeline orchestration: the batch run over vocabulary, resume and job.

pub mod analyze;
