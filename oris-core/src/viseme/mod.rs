//! Oculus OVR viseme set and its static mappings.
//!
//! The 15 OVR visemes (silence included) are the mouth shapes Ready Player Me
//! avatars expose as morph targets. Three total lookups hang off the enum:
//! phoneme→viseme, viseme→legacy Rhubarb letter, viseme→morph-target id.
//! Everything is a pure function over the closed set — unknown input maps to
//! [`Viseme::Sil`], never an error.

use serde::{Deserialize, Serialize};

use crate::g2p::Phoneme;

/// A mouth shape from the Oculus OVR viseme set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viseme {
    #[serde(rename = "sil")]
    Sil,
    #[serde(rename = "PP")]
    Pp,
    #[serde(rename = "FF")]
    Ff,
    #[serde(rename = "TH")]
    Th,
    #[serde(rename = "DD")]
    Dd,
    #[serde(rename = "kk")]
    Kk,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "SS")]
    Ss,
    #[serde(rename = "nn")]
    Nn,
    #[serde(rename = "RR")]
    Rr,
    #[serde(rename = "aa")]
    Aa,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "I")]
    I,
    #[serde(rename = "O")]
    O,
    #[serde(rename = "U")]
    U,
}

impl Viseme {
    /// Every viseme, in declaration order.
    pub const ALL: [Viseme; 15] = [
        Viseme::Sil,
        Viseme::Pp,
        Viseme::Ff,
        Viseme::Th,
        Viseme::Dd,
        Viseme::Kk,
        Viseme::Ch,
        Viseme::Ss,
        Viseme::Nn,
        Viseme::Rr,
        Viseme::Aa,
        Viseme::E,
        Viseme::I,
        Viseme::O,
        Viseme::U,
    ];

    /// Map an ARPAbet phoneme to its viseme.
    ///
    /// `HH` is a breath — it maps to silence, as does anything outside the
    /// known phoneme set.
    pub fn from_phoneme(phoneme: Phoneme) -> Viseme {
        match phoneme.as_str() {
            // Vowels
            "AA" | "AE" | "AH" | "AY" => Viseme::Aa,
            "AO" | "AW" | "OW" | "OY" => Viseme::O,
            "EH" | "ER" | "EY" => Viseme::E,
            "IH" | "IY" | "Y" => Viseme::I,
            "UH" | "UW" | "W" => Viseme::U,
            // Consonants
            "B" | "M" | "P" => Viseme::Pp,
            "CH" | "JH" | "SH" | "ZH" => Viseme::Ch,
            "D" | "T" => Viseme::Dd,
            "DH" | "TH" => Viseme::Th,
            "F" | "V" => Viseme::Ff,
            "G" | "K" | "NG" => Viseme::Kk,
            "L" | "N" => Viseme::Nn,
            "R" => Viseme::Rr,
            "S" | "Z" => Viseme::Ss,
            // Breath, explicit silence, anything unmapped
            _ => Viseme::Sil,
        }
    }

    /// Single-letter code for consumers written against the older
    /// Rhubarb A–H/X alphabet.
    pub fn legacy_code(self) -> char {
        match self {
            Viseme::Sil => 'X',
            Viseme::Pp => 'B',
            Viseme::Ff | Viseme::Ss => 'F',
            Viseme::Th => 'G',
            Viseme::Dd | Viseme::Kk | Viseme::Ch | Viseme::Nn | Viseme::Rr => 'H',
            Viseme::Aa => 'A',
            Viseme::E | Viseme::I => 'C',
            Viseme::O => 'D',
            Viseme::U => 'E',
        }
    }

    /// Ready Player Me morph-target identifier (`viseme_<name>`).
    pub fn morph_target(self) -> &'static str {
        match self {
            Viseme::Sil => "viseme_sil",
            Viseme::Pp => "viseme_PP",
            Viseme::Ff => "viseme_FF",
            Viseme::Th => "viseme_TH",
            Viseme::Dd => "viseme_DD",
            Viseme::Kk => "viseme_kk",
            Viseme::Ch => "viseme_CH",
            Viseme::Ss => "viseme_SS",
            Viseme::Nn => "viseme_nn",
            Viseme::Rr => "viseme_RR",
            Viseme::Aa => "viseme_aa",
            Viseme::E => "viseme_E",
            Viseme::I => "viseme_I",
            Viseme::O => "viseme_O",
            Viseme::U => "viseme_U",
        }
    }

    /// Human-readable name for logs and debug output.
    pub fn display_name(self) -> &'static str {
        match self {
            Viseme::Sil => "Silence",
            Viseme::Pp => "P, B, M",
            Viseme::Ff => "F, V",
            Viseme::Th => "Th",
            Viseme::Dd => "T, D",
            Viseme::Kk => "K, G",
            Viseme::Ch => "Ch, J, Sh",
            Viseme::Ss => "S, Z",
            Viseme::Nn => "N, L",
            Viseme::Rr => "R",
            Viseme::Aa => "A",
            Viseme::E => "E",
            Viseme::I => "I",
            Viseme::O => "O",
            Viseme::U => "U",
        }
    }
}
