//! # oris-core
//!
//! Text-driven lip-sync SDK: spoken text plus a target audio duration in,
//! a time-ordered sequence of mouth-shape cues out. No audio analysis, no
//! external alignment binary — the whole pipeline is an in-process,
//! sub-millisecond computation.
//!
//! ## Pipeline
//!
//! ```text
//! text → tokenize → word_to_phonemes (lexicon, then rule cascade)
//!                        │
//!                  Vec<Token>
//!                        │
//!               TimingPlan (duration allocation)
//!                        │
//!        Viseme mapping → MouthCue assembly
//!                        │
//!            Timeline  |  CueStream (pull-based)
//! ```
//!
//! Every stage is a pure function over immutable inputs and compiled-in
//! tables, so synthesis calls are safe to run concurrently from any number
//! of threads without coordination. Synthesis is total: any text and any
//! duration produce a valid timeline.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod estimate;
pub mod g2p;
pub mod text;
pub mod timeline;
pub mod timing;
pub mod viseme;

// Convenience re-exports for downstream crates
pub use error::OrisError;
pub use estimate::estimate_duration_secs;
pub use g2p::{text_to_tokens, word_to_phonemes, Phoneme, Phonemizer, RuleG2p, Token};
pub use text::{tokenize, Fragment, FragmentKind};
pub use timeline::builder::{
    synthesize, synthesize_smoothed, synthesize_smoothed_with_config, synthesize_with_config,
};
pub use timeline::stream::{synthesize_stream, CueStream};
pub use timeline::{MouthCue, Timeline, TimelineMetadata, GENERATED_BY};
pub use timing::TimingConfig;
pub use viseme::Viseme;
