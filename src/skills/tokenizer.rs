// Tokenizer trait and the default UAX #29 word segmenter.
//
// Phrase matching compares token sequences one-for-one, so vocabulary entries
// and documents must go through the same tokenizer.

use unicode_segmentation::UnicodeSegmentation;

/// A single token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token start in the source text
    pub start: usize,
    /// Byte offset one past the token end
    pub end: usize,
    /// True when every character is alphabetic
    pub is_alpha: bool,
}

impl Token<'_> {
    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits text into ordered, non-overlapping tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

/// Word-boundary tokenizer built on `unicode-segmentation`.
///
/// Words and punctuation become separate tokens ("AWS," → "AWS", ",");
/// whitespace runs are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .map(|(start, segment)| Token {
                text: segment,
                start,
                end: start + segment.len(),
                is_alpha: segment.chars().all(char::is_alphabetic),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_punctuation_and_drops_whitespace() {
        let tokens = UnicodeWordTokenizer.tokenize("docker and AWS, familiar.");
        assert_eq!(texts(&tokens), vec!["docker", "and", "AWS", ",", "familiar", "."]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let text = "  Rust  is fast";
        let tokens = UnicodeWordTokenizer.tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[0].start, 2);
    }

    #[test]
    fn test_alpha_flag() {
        let tokens = UnicodeWordTokenizer.tokenize("Python3 rocks 2024 !");
        let flags: Vec<bool> = tokens.iter().map(|t| t.is_alpha).collect();
        assert_eq!(flags, vec![false, true, false, false]);
    }

    #[test]
    fn test_char_len_counts_characters() {
        let tokens = UnicodeWordTokenizer.tokenize("café");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].char_len(), 4);
        assert!(tokens[0].is_alpha);
    }

    #[test]
    fn test_empty_text() {
        assert!(UnicodeWordTokenizer.tokenize("").is_empty());
        assert!(UnicodeWordTokenizer.tokenize("   \n\t").is_empty());
    }
}
