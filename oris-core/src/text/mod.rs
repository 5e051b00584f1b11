//! Word/punctuation tokenizer.
//!
//! Splits raw text into word fragments (runs of letters, digits and
//! apostrophes) and punctuation fragments (runs of anything else that is not
//! whitespace). Whitespace separates fragments and is discarded. Order is
//! preserved, any input is valid.

/// Whether a fragment is speakable or a pause trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// A word — will be phonemized downstream.
    Word,
    /// A punctuation run — becomes a fixed-length pause.
    Punctuation,
}

/// A contiguous span of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub kind: FragmentKind,
}

impl Fragment {
    pub fn is_word(&self) -> bool {
        self.kind == FragmentKind::Word
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Split `text` into ordered word and punctuation fragments.
pub fn tokenize(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut kind = FragmentKind::Word;

    let mut flush = |buf: &mut String, kind: FragmentKind| {
        if !buf.is_empty() {
            fragments.push(Fragment {
                text: std::mem::take(buf),
                kind,
            });
        }
    };

    for c in text.chars() {
        if c.is_whitespace() {
            flush(&mut current, kind);
            continue;
        }
        let char_kind = if is_word_char(c) {
            FragmentKind::Word
        } else {
            FragmentKind::Punctuation
        };
        if char_kind != kind {
            flush(&mut current, kind);
            kind = char_kind;
        }
        current.push(c);
    }
    flush(&mut current, kind);

    fragments
}
