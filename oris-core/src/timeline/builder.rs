//! Timeline assembly — standard and smoothed variants.
//!
//! ## Assembly loop (shared with the streaming variant)
//!
//! ```text
//! cursor t = 0
//! per token, in order:
//!   punctuation → silence cue [t, t+pause]
//!   word        → one cue per phoneme, duration from the TimingPlan
//! finally, if t < duration → trailing silence cue [t, duration]
//! ```
//!
//! The trailing cue is what guarantees full coverage: the allocator's floors
//! mean cue durations only approximately sum to the audio duration.

use tracing::debug;

use crate::g2p::{text_to_tokens, Token};
use crate::timeline::{MouthCue, Timeline, TimelineMetadata, GENERATED_BY};
use crate::timing::{TimingConfig, TimingPlan};
use crate::viseme::Viseme;

/// Intensity for cues at the ends of the sequence (smoothed variant).
const BOUNDARY_INTENSITY: f32 = 0.7;
/// Intensity for strictly interior cues (smoothed variant).
const INTERIOR_INTENSITY: f32 = 1.0;

/// Walk the tokens and emit the cue sequence, including the trailing
/// coverage cue.
pub(crate) fn build_cues(tokens: &[Token], plan: &TimingPlan) -> Vec<MouthCue> {
    let mut cues = Vec::new();
    let mut t_ms = 0.0_f64;

    for token in tokens {
        match token {
            Token::Punctuation { .. } => {
                let pause = plan.pause_ms();
                cues.push(MouthCue::silence(t_ms / 1000.0, (t_ms + pause) / 1000.0));
                t_ms += pause;
            }
            Token::Word { phonemes, .. } => {
                for &phoneme in phonemes {
                    let duration = plan.phoneme_ms(phoneme);
                    let viseme = Viseme::from_phoneme(phoneme);
                    cues.push(MouthCue::new(
                        viseme,
                        t_ms / 1000.0,
                        (t_ms + duration) / 1000.0,
                    ));
                    t_ms += duration;
                }
            }
        }
    }

    if t_ms < plan.duration_ms() {
        cues.push(MouthCue::silence(t_ms / 1000.0, plan.duration_ms() / 1000.0));
    }

    cues
}

fn assemble(text: &str, audio_duration_secs: f64, config: &TimingConfig) -> Timeline {
    let tokens = text_to_tokens(text);
    let plan = TimingPlan::new(&tokens, audio_duration_secs, config);
    let cues = build_cues(&tokens, &plan);

    debug!(
        tokens = tokens.len(),
        cues = cues.len(),
        per_phoneme_ms = plan.per_phoneme_ms(),
        "assembled timeline"
    );

    Timeline {
        metadata: TimelineMetadata {
            sound_file: String::new(),
            duration: audio_duration_secs.max(0.0),
            generated_by: GENERATED_BY.to_string(),
        },
        mouth_cues: cues,
    }
}

/// Synthesize a viseme timeline for `text` spanning `audio_duration_secs`.
///
/// Total: any text and any duration produce a valid timeline. Non-positive
/// durations clamp to zero.
pub fn synthesize(text: &str, audio_duration_secs: f64) -> Timeline {
    synthesize_with_config(text, audio_duration_secs, &TimingConfig::default())
}

/// [`synthesize`] with explicit timing constants.
pub fn synthesize_with_config(
    text: &str,
    audio_duration_secs: f64,
    config: &TimingConfig,
) -> Timeline {
    assemble(text, audio_duration_secs, config)
}

/// Synthesize with coarticulation intensities attached.
///
/// Timing and visemes are identical to [`synthesize`]; the first and last
/// cues are softened to 0.7, interior cues get full intensity.
pub fn synthesize_smoothed(text: &str, audio_duration_secs: f64) -> Timeline {
    synthesize_smoothed_with_config(text, audio_duration_secs, &TimingConfig::default())
}

/// [`synthesize_smoothed`] with explicit timing constants.
pub fn synthesize_smoothed_with_config(
    text: &str,
    audio_duration_secs: f64,
    config: &TimingConfig,
) -> Timeline {
    let mut timeline = assemble(text, audio_duration_secs, config);

    let last = timeline.mouth_cues.len().saturating_sub(1);
    for (i, cue) in timeline.mouth_cues.iter_mut().enumerate() {
        cue.intensity = Some(if i > 0 && i < last {
            INTERIOR_INTENSITY
        } else {
            BOUNDARY_INTENSITY
        });
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hello_world_covers_the_full_duration() {
        let timeline = synthesize("Hello world", 1.0);
        let cues = &timeline.mouth_cues;

        assert!(!cues.is_empty());
        assert_abs_diff_eq!(cues[0].start, 0.0);
        assert_abs_diff_eq!(cues.last().expect("non-empty").end, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn punctuation_becomes_silence_cues() {
        let timeline = synthesize("Hi. Bye.", 1.0);
        let silences: Vec<_> = timeline
            .mouth_cues
            .iter()
            .filter(|c| c.viseme == Viseme::Sil)
            .collect();
        // Two periods, and the budget divides exactly — no trailing cue
        assert_eq!(silences.len(), 2);
    }

    #[test]
    fn empty_text_is_one_long_silence() {
        let timeline = synthesize("", 2.0);
        assert_eq!(timeline.mouth_cues.len(), 1);
        let cue = &timeline.mouth_cues[0];
        assert_eq!(cue.viseme, Viseme::Sil);
        assert_abs_diff_eq!(cue.start, 0.0);
        assert_abs_diff_eq!(cue.end, 2.0);
    }

    #[test]
    fn zero_duration_with_empty_text_yields_no_cues() {
        let timeline = synthesize("", 0.0);
        assert!(timeline.mouth_cues.is_empty());
        assert_abs_diff_eq!(timeline.metadata.duration, 0.0);
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let timeline = synthesize("hello", -1.0);
        assert_abs_diff_eq!(timeline.metadata.duration, 0.0);
        // Floored cues still exist; they just overrun the (zero) duration
        assert!(!timeline.mouth_cues.is_empty());
    }

    #[test]
    fn smoothing_softens_only_the_boundaries() {
        let timeline = synthesize_smoothed("Hello world", 1.0);
        let cues = &timeline.mouth_cues;
        assert!(cues.len() >= 3);

        assert_eq!(cues[0].intensity, Some(0.7));
        assert_eq!(cues.last().expect("non-empty").intensity, Some(0.7));
        for cue in &cues[1..cues.len() - 1] {
            assert_eq!(cue.intensity, Some(1.0));
        }
    }

    #[test]
    fn smoothing_leaves_timing_untouched() {
        let standard = synthesize("Hello, world. Again!", 2.5);
        let smoothed = synthesize_smoothed("Hello, world. Again!", 2.5);

        assert_eq!(standard.mouth_cues.len(), smoothed.mouth_cues.len());
        for (a, b) in standard.mouth_cues.iter().zip(&smoothed.mouth_cues) {
            assert_abs_diff_eq!(a.start, b.start);
            assert_abs_diff_eq!(a.end, b.end);
            assert_eq!(a.viseme, b.viseme);
        }
    }
}
