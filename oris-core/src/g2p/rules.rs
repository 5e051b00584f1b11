//! Ordered grapheme→phoneme rule cascade.
//!
//! Each rule pairs a matcher with a phoneme sequence. The transducer tries
//! rules top-to-bottom at a fixed cursor and applies the first match, so
//! multi-letter morphological endings and digraphs sit above the one-letter
//! fallbacks. The order is load-bearing: moving a rule changes output.

use super::phoneme::Phoneme;

/// How a rule matches at the cursor. All matches are left-anchored — a rule
/// either matches the start of the remaining suffix or not at all.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Matcher {
    /// Literal text at the cursor.
    Lit(&'static str),
    /// Literal text that must also end the word ("ed", "mb", "mn", "y").
    LitEnd(&'static str),
    /// Literal text whose next character must be one of the listed set
    /// (lookahead, not consumed). Covers soft c/g.
    LitBefore(&'static str, &'static [char]),
}

impl Matcher {
    /// Number of characters consumed if this matcher applies at the start of
    /// `suffix`, else `None`.
    pub(crate) fn match_at(self, suffix: &str) -> Option<usize> {
        match self {
            Matcher::Lit(pat) => suffix.starts_with(pat).then_some(pat.len()),
            Matcher::LitEnd(pat) => (suffix == pat).then_some(pat.len()),
            Matcher::LitBefore(pat, next) => {
                if !suffix.starts_with(pat) {
                    return None;
                }
                let follows = suffix[pat.len()..].chars().next()?;
                next.contains(&follows).then_some(pat.len())
            }
        }
    }
}

pub(crate) struct Rule {
    pub(crate) matcher: Matcher,
    pub(crate) phonemes: &'static [&'static str],
}

impl Rule {
    pub(crate) fn emit(&self, out: &mut Vec<Phoneme>) {
        out.extend(self.phonemes.iter().copied().map(Phoneme::new));
    }
}

const fn lit(pat: &'static str, phonemes: &'static [&'static str]) -> Rule {
    Rule {
        matcher: Matcher::Lit(pat),
        phonemes,
    }
}

const fn lit_end(pat: &'static str, phonemes: &'static [&'static str]) -> Rule {
    Rule {
        matcher: Matcher::LitEnd(pat),
        phonemes,
    }
}

const fn lit_before(
    pat: &'static str,
    next: &'static [char],
    phonemes: &'static [&'static str],
) -> Rule {
    Rule {
        matcher: Matcher::LitBefore(pat, next),
        phonemes,
    }
}

/// Letters that soften a preceding `c` or `g`.
const SOFTENERS: &[char] = &['e', 'i', 'y'];

pub(crate) const RULES: &[Rule] = &[
    // Silent letters and morphological endings
    lit("ght", &["T"]),
    lit("tion", &["SH", "AH", "N"]),
    lit("sion", &["ZH", "AH", "N"]),
    lit("ture", &["CH", "ER"]),
    lit("ous", &["AH", "S"]),
    lit("ious", &["IY", "AH", "S"]),
    lit("eous", &["IY", "AH", "S"]),
    lit("ness", &["N", "AH", "S"]),
    lit("ment", &["M", "AH", "N", "T"]),
    lit("able", &["AH", "B", "AH", "L"]),
    lit("ible", &["AH", "B", "AH", "L"]),
    lit("ally", &["AH", "L", "IY"]),
    lit("ful", &["F", "AH", "L"]),
    lit("less", &["L", "AH", "S"]),
    lit("ing", &["IH", "NG"]),
    lit_end("ed", &["D"]),
    // Digraphs and trigraphs
    lit("tch", &["CH"]),
    lit("dge", &["JH"]),
    lit("wh", &["W"]),
    lit("wr", &["R"]),
    lit("kn", &["N"]),
    lit("gn", &["N"]),
    lit_end("mb", &["M"]),
    lit_end("mn", &["M"]),
    lit("ps", &["S"]),
    lit("pn", &["N"]),
    // Consonant digraphs
    lit("th", &["TH"]),
    lit("sh", &["SH"]),
    lit("ch", &["CH"]),
    lit("ph", &["F"]),
    lit("gh", &["G"]),
    lit("ng", &["NG"]),
    lit("nk", &["NG", "K"]),
    lit("ck", &["K"]),
    lit("qu", &["K", "W"]),
    // Vowel combinations
    lit("oo", &["UW"]),
    lit("ee", &["IY"]),
    lit("ea", &["IY"]),
    lit("ai", &["EY"]),
    lit("ay", &["EY"]),
    lit("oa", &["OW"]),
    lit("ow", &["OW"]),
    lit("ou", &["AW"]),
    lit("au", &["AO"]),
    lit("aw", &["AO"]),
    lit("oi", &["OY"]),
    lit("oy", &["OY"]),
    lit("ie", &["IY"]),
    lit("ei", &["IY"]),
    lit("ue", &["UW"]),
    lit("ew", &["UW"]),
    // R-controlled vowels
    lit("ar", &["AA", "R"]),
    lit("er", &["ER"]),
    lit("ir", &["ER"]),
    lit("or", &["AO", "R"]),
    lit("ur", &["ER"]),
    // Single vowels
    lit("a", &["AE"]),
    lit("e", &["EH"]),
    lit("i", &["IH"]),
    lit("o", &["AA"]),
    lit("u", &["AH"]),
    lit_end("y", &["IY"]),
    lit("y", &["Y"]),
    // Consonants
    lit("b", &["B"]),
    lit_before("c", SOFTENERS, &["S"]),
    lit("c", &["K"]),
    lit("d", &["D"]),
    lit("f", &["F"]),
    lit_before("g", SOFTENERS, &["JH"]),
    lit("g", &["G"]),
    lit("h", &["HH"]),
    lit("j", &["JH"]),
    lit("k", &["K"]),
    lit("l", &["L"]),
    lit("m", &["M"]),
    lit("n", &["N"]),
    lit("p", &["P"]),
    lit("r", &["R"]),
    lit("s", &["S"]),
    lit("t", &["T"]),
    lit("v", &["V"]),
    lit("w", &["W"]),
    lit("x", &["K", "S"]),
    lit("z", &["Z"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(suffix: &str) -> Option<(usize, &'static [&'static str])> {
        RULES
            .iter()
            .find_map(|r| r.matcher.match_at(suffix).map(|n| (n, r.phonemes)))
    }

    #[test]
    fn morphological_ending_beats_single_letters() {
        let (consumed, phonemes) = first_match("tion").expect("tion matches");
        assert_eq!(consumed, 4);
        assert_eq!(phonemes, ["SH", "AH", "N"]);
    }

    #[test]
    fn end_anchor_only_matches_at_word_end() {
        // "ed" mid-word must fall through to e/d single letters
        let (consumed, phonemes) = first_match("edge").expect("e matches");
        assert_eq!(consumed, 1);
        assert_eq!(phonemes, ["EH"]);

        let (consumed, phonemes) = first_match("ed").expect("ed$ matches");
        assert_eq!(consumed, 2);
        assert_eq!(phonemes, ["D"]);
    }

    #[test]
    fn soft_c_requires_lookahead() {
        let (_, soft) = first_match("ce").expect("soft c matches");
        assert_eq!(soft, ["S"]);

        let (_, hard) = first_match("ca").expect("hard c matches");
        assert_eq!(hard, ["K"]);

        // Bare trailing "c" has nothing to look ahead at — hard c
        let (_, bare) = first_match("c").expect("bare c matches");
        assert_eq!(bare, ["K"]);
    }

    #[test]
    fn final_y_is_a_vowel() {
        let (_, end) = first_match("y").expect("y$ matches");
        assert_eq!(end, ["IY"]);

        let (_, mid) = first_match("yes").expect("y matches");
        assert_eq!(mid, ["Y"]);
    }

    #[test]
    fn no_rule_matches_digits() {
        assert!(first_match("42").is_none());
    }
}
