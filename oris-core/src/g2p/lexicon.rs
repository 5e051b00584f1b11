//! Fixed pronunciations for common words.
//!
//! Exact lookup runs before the rule cascade. The table covers the highest
//! frequency English words plus contracted forms — the words where rule-based
//! conversion is most audibly wrong ("the" would otherwise come out T-H-E).

use std::collections::HashMap;
use std::sync::OnceLock;

use super::phoneme::Phoneme;

static LEXICON: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();

/// Look up a normalized (lower-case, trimmed) word.
///
/// Returns the exact phoneme sequence on a hit, `None` on a miss.
pub(crate) fn lookup(word: &str) -> Option<Vec<Phoneme>> {
    let map = LEXICON.get_or_init(|| ENTRIES.iter().copied().collect());
    map.get(word)
        .map(|codes| codes.iter().copied().map(Phoneme::new).collect())
}

const ENTRIES: &[(&str, &[&str])] = &[
    ("the", &["DH", "AH"]),
    ("a", &["AH"]),
    ("an", &["AE", "N"]),
    ("is", &["IH", "Z"]),
    ("are", &["AA", "R"]),
    ("was", &["W", "AA", "Z"]),
    ("were", &["W", "ER"]),
    ("be", &["B", "IY"]),
    ("been", &["B", "IH", "N"]),
    ("have", &["HH", "AE", "V"]),
    ("has", &["HH", "AE", "Z"]),
    ("had", &["HH", "AE", "D"]),
    ("do", &["D", "UW"]),
    ("does", &["D", "AH", "Z"]),
    ("did", &["D", "IH", "D"]),
    ("will", &["W", "IH", "L"]),
    ("would", &["W", "UH", "D"]),
    ("could", &["K", "UH", "D"]),
    ("should", &["SH", "UH", "D"]),
    ("can", &["K", "AE", "N"]),
    ("may", &["M", "EY"]),
    ("might", &["M", "AY", "T"]),
    ("must", &["M", "AH", "S", "T"]),
    ("i", &["AY"]),
    ("you", &["Y", "UW"]),
    ("he", &["HH", "IY"]),
    ("she", &["SH", "IY"]),
    ("it", &["IH", "T"]),
    ("we", &["W", "IY"]),
    ("they", &["DH", "EY"]),
    ("what", &["W", "AH", "T"]),
    ("who", &["HH", "UW"]),
    ("which", &["W", "IH", "CH"]),
    ("this", &["DH", "IH", "S"]),
    ("that", &["DH", "AE", "T"]),
    ("these", &["DH", "IY", "Z"]),
    ("those", &["DH", "OW", "Z"]),
    ("hello", &["HH", "AH", "L", "OW"]),
    ("world", &["W", "ER", "L", "D"]),
    ("yes", &["Y", "EH", "S"]),
    ("no", &["N", "OW"]),
    ("one", &["W", "AH", "N"]),
    ("two", &["T", "UW"]),
    ("three", &["TH", "R", "IY"]),
    ("four", &["F", "AO", "R"]),
    ("five", &["F", "AY", "V"]),
    ("of", &["AH", "V"]),
    ("to", &["T", "UW"]),
    ("and", &["AE", "N", "D"]),
    ("for", &["F", "AO", "R"]),
    ("with", &["W", "IH", "TH"]),
    ("your", &["Y", "AO", "R"]),
    ("my", &["M", "AY"]),
    ("from", &["F", "R", "AH", "M"]),
    ("about", &["AH", "B", "AW", "T"]),
    ("know", &["N", "OW"]),
    ("think", &["TH", "IH", "NG", "K"]),
    ("just", &["JH", "AH", "S", "T"]),
    ("like", &["L", "AY", "K"]),
    ("time", &["T", "AY", "M"]),
    ("very", &["V", "EH", "R", "IY"]),
    ("when", &["W", "EH", "N"]),
    ("come", &["K", "AH", "M"]),
    ("make", &["M", "EY", "K"]),
    ("people", &["P", "IY", "P", "AH", "L"]),
    ("because", &["B", "IH", "K", "AH", "Z"]),
    ("good", &["G", "UH", "D"]),
    ("some", &["S", "AH", "M"]),
    ("take", &["T", "EY", "K"]),
    ("into", &["IH", "N", "T", "UW"]),
    ("year", &["Y", "IH", "R"]),
    ("great", &["G", "R", "EY", "T"]),
    ("after", &["AE", "F", "T", "ER"]),
    ("over", &["OW", "V", "ER"]),
    ("new", &["N", "UW"]),
    ("where", &["W", "EH", "R"]),
    ("most", &["M", "OW", "S", "T"]),
    ("only", &["OW", "N", "L", "IY"]),
    ("other", &["AH", "DH", "ER"]),
    ("work", &["W", "ER", "K"]),
    ("first", &["F", "ER", "S", "T"]),
    ("want", &["W", "AA", "N", "T"]),
    ("give", &["G", "IH", "V"]),
    ("our", &["AW", "ER"]),
    ("there", &["DH", "EH", "R"]),
    ("their", &["DH", "EH", "R"]),
    ("i'm", &["AY", "M"]),
    ("i've", &["AY", "V"]),
    ("i'll", &["AY", "L"]),
    ("it's", &["IH", "T", "S"]),
    ("don't", &["D", "OW", "N", "T"]),
    ("can't", &["K", "AE", "N", "T"]),
    ("won't", &["W", "OW", "N", "T"]),
    ("isn't", &["IH", "Z", "AH", "N", "T"]),
    ("aren't", &["AA", "R", "AH", "N", "T"]),
    ("wasn't", &["W", "AA", "Z", "AH", "N", "T"]),
    ("weren't", &["W", "ER", "AH", "N", "T"]),
    ("haven't", &["HH", "AE", "V", "AH", "N", "T"]),
    ("hasn't", &["HH", "AE", "Z", "AH", "N", "T"]),
    ("hadn't", &["HH", "AE", "D", "AH", "N", "T"]),
    ("didn't", &["D", "IH", "D", "AH", "N", "T"]),
    ("wouldn't", &["W", "UH", "D", "AH", "N", "T"]),
    ("couldn't", &["K", "UH", "D", "AH", "N", "T"]),
    ("shouldn't", &["SH", "UH", "D", "AH", "N", "T"]),
];
