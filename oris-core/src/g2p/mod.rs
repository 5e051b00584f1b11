//! Grapheme→phoneme conversion.
//!
//! ## Algorithm
//!
//! 1. Normalize the word (lower-case, trim).
//! 2. Exact lexicon lookup — hit returns the stored sequence verbatim.
//! 3. Miss → rule cascade: at each cursor position, try the ordered rule
//!    table top-to-bottom and apply the first left-anchored match, then
//!    advance past the matched text.
//! 4. No rule matches (stray symbol, digit) → skip one character. The cursor
//!    strictly advances every iteration, so transduction always terminates.
//!
//! Same word in, same phonemes out — there is no state between calls.

mod lexicon;
pub mod phoneme;
mod rules;

pub use phoneme::Phoneme;

use crate::text::{self, Fragment, FragmentKind};

/// Grapheme→phoneme conversion seam.
///
/// The pipeline only needs `word_to_phonemes`; a dictionary-backed or neural
/// converter can replace [`RuleG2p`] without touching tokenization or timing.
pub trait Phonemizer: Send + Sync {
    /// Convert one word to its phoneme sequence. Total — unknown input
    /// produces a best-effort (possibly empty) sequence, never an error.
    fn word_to_phonemes(&self, word: &str) -> Vec<Phoneme>;
}

/// Default converter: lexicon first, ordered rule cascade on miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleG2p;

impl RuleG2p {
    fn transduce(word: &str) -> Vec<Phoneme> {
        let mut phonemes = Vec::new();
        let mut suffix = word;

        while !suffix.is_empty() {
            let matched = rules::RULES
                .iter()
                .find_map(|rule| rule.matcher.match_at(suffix).map(|n| (rule, n)));

            match matched {
                Some((rule, consumed)) => {
                    rule.emit(&mut phonemes);
                    suffix = &suffix[consumed..];
                }
                None => {
                    // Character outside the rule set — skip it
                    let mut chars = suffix.chars();
                    chars.next();
                    suffix = chars.as_str();
                }
            }
        }

        phonemes
    }
}

impl Phonemizer for RuleG2p {
    fn word_to_phonemes(&self, word: &str) -> Vec<Phoneme> {
        let normalized = word.trim().to_lowercase();
        if let Some(phonemes) = lexicon::lookup(&normalized) {
            return phonemes;
        }
        Self::transduce(&normalized)
    }
}

/// Convert one word to phonemes with the default [`RuleG2p`].
pub fn word_to_phonemes(word: &str) -> Vec<Phoneme> {
    RuleG2p.word_to_phonemes(word)
}

/// A tokenized unit of input text, ready for timing allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A spoken word and its phoneme sequence.
    Word {
        text: String,
        phonemes: Vec<Phoneme>,
    },
    /// A punctuation run — produces a fixed pause, no phonemes.
    Punctuation { text: String },
}

impl Token {
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Punctuation { .. })
    }

    /// Number of phonemes this token contributes to the timing budget.
    pub fn phoneme_count(&self) -> usize {
        match self {
            Token::Word { phonemes, .. } => phonemes.len(),
            Token::Punctuation { .. } => 0,
        }
    }
}

/// Tokenize `text` and phonemize each word with the default [`RuleG2p`].
pub fn text_to_tokens(text: &str) -> Vec<Token> {
    text_to_tokens_with(text, &RuleG2p)
}

/// Tokenize `text` and phonemize each word with the given converter.
pub fn text_to_tokens_with(text: &str, phonemizer: &dyn Phonemizer) -> Vec<Token> {
    text::tokenize(text)
        .into_iter()
        .map(|Fragment { text, kind }| match kind {
            FragmentKind::Word => {
                let phonemes = phonemizer.word_to_phonemes(&text);
                Token::Word { text, phonemes }
            }
            FragmentKind::Punctuation => Token::Punctuation { text },
        })
        .collect()
}
