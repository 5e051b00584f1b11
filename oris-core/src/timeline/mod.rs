//! Timeline data model and its serialization contract.
//!
//! ## Wire shape
//!
//! ```json
//! {
//!   "metadata": { "soundFile": "", "duration": 1.0, "generatedBy": "oris-core" },
//!   "mouthCues": [
//!     { "start": 0.0, "end": 0.1, "value": "B",
//!       "viseme": "PP", "morphTarget": "viseme_PP", "intensity": 1.0 }
//!   ]
//! }
//! ```
//!
//! `value` is the legacy Rhubarb single-letter code kept for older consumers;
//! `intensity` only appears on smoothed timelines.

pub mod builder;
pub mod stream;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::viseme::Viseme;

/// Generator tag written into every timeline's metadata.
pub const GENERATED_BY: &str = "oris-core";

/// One timed mouth-shape interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouthCue {
    /// Interval start in seconds.
    pub start: f64,
    /// Interval end in seconds. Always >= `start`.
    pub end: f64,
    /// Legacy Rhubarb code (A–H/X).
    pub value: char,
    pub viseme: Viseme,
    /// Render-engine morph-target identifier.
    pub morph_target: String,
    /// Coarticulation intensity in [0, 1]; smoothed timelines only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
}

impl MouthCue {
    /// Build a cue for `viseme` spanning `[start, end]` seconds, deriving the
    /// legacy code and morph target.
    pub fn new(viseme: Viseme, start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            value: viseme.legacy_code(),
            viseme,
            morph_target: viseme.morph_target().to_string(),
            intensity: None,
        }
    }

    /// A silence cue spanning `[start, end]` seconds.
    pub fn silence(start: f64, end: f64) -> Self {
        Self::new(Viseme::Sil, start, end)
    }

    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}

/// Descriptive header of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadata {
    /// Reference to the audio this timeline accompanies; empty when the
    /// duration was estimated rather than measured.
    pub sound_file: String,
    /// Total duration in seconds.
    pub duration: f64,
    /// Tag identifying the generator.
    pub generated_by: String,
}

/// A complete, time-ordered sequence of mouth cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub metadata: TimelineMetadata,
    pub mouth_cues: Vec<MouthCue>,
}

impl Timeline {
    /// Serialize to the compact wire format.
    ///
    /// # Errors
    /// `OrisError::Json` if serde_json fails (practically unreachable for
    /// this data model).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to the pretty-printed wire format.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_serializes_with_camel_case_and_legacy_code() {
        let cue = MouthCue::new(Viseme::Pp, 0.0, 0.1);

        let json = serde_json::to_value(&cue).expect("serialize cue");
        assert_eq!(json["value"], "B");
        assert_eq!(json["viseme"], "PP");
        assert_eq!(json["morphTarget"], "viseme_PP");
        assert!(
            json.get("intensity").is_none(),
            "intensity must be omitted when absent"
        );

        let round_trip: MouthCue = serde_json::from_value(json).expect("deserialize cue");
        assert_eq!(round_trip, cue);
    }

    #[test]
    fn intensity_appears_when_set() {
        let mut cue = MouthCue::new(Viseme::Aa, 0.0, 0.2);
        cue.intensity = Some(0.7);

        let json = serde_json::to_value(&cue).expect("serialize cue");
        let intensity = json["intensity"]
            .as_f64()
            .expect("intensity should serialize as number");
        assert!((intensity - 0.7).abs() < 1e-5);
    }

    #[test]
    fn timeline_serializes_with_contract_field_names() {
        let timeline = Timeline {
            metadata: TimelineMetadata {
                sound_file: String::new(),
                duration: 2.0,
                generated_by: GENERATED_BY.to_string(),
            },
            mouth_cues: vec![MouthCue::silence(0.0, 2.0)],
        };

        let json: serde_json::Value =
            serde_json::from_str(&timeline.to_json().expect("to_json")).expect("parse json");
        assert_eq!(json["metadata"]["soundFile"], "");
        assert_eq!(json["metadata"]["generatedBy"], "oris-core");
        assert_eq!(json["mouthCues"][0]["value"], "X");
        assert_eq!(json["mouthCues"][0]["viseme"], "sil");
        assert_eq!(json["mouthCues"][0]["morphTarget"], "viseme_sil");
    }
}
