// Skill extraction: vocabulary, tokenization, phrase and fuzzy matching.

pub mod candidate;
pub mod casing;
pub mod dedup;
pub mod extractor;
pub mod partial;
pub mod phrase;
pub mod similarity;
pub mod tokenizer;
pub mod vocabulary;
pub mod weighted;
