//! Duration allocation across phonemes and punctuation pauses.
//!
//! ## Policy
//!
//! 1. Every punctuation token costs a fixed pause.
//! 2. The remaining budget is split evenly per phoneme, floored at the
//!    minimum viseme duration.
//! 3. Each phoneme then scales its archetype duration (vowels are longer
//!    than consonants) by `per_phoneme / mean(vowel, consonant)` and is
//!    floored again.
//!
//! The floors mean the cue durations need not sum to the budget exactly;
//! the timeline builder covers any shortfall with a trailing silence cue.

use crate::error::{OrisError, Result};
use crate::g2p::{Phoneme, Token};

/// Timing constants in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Archetype duration of a vowel phoneme.
    pub vowel_ms: f64,
    /// Archetype duration of a consonant phoneme.
    pub consonant_ms: f64,
    /// Pause inserted for each punctuation token.
    pub punctuation_pause_ms: f64,
    /// Floor for any single cue — keeps cues visible when text is long
    /// relative to the audio.
    pub min_viseme_ms: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            vowel_ms: 120.0,
            consonant_ms: 80.0,
            punctuation_pause_ms: 200.0,
            min_viseme_ms: 50.0,
        }
    }
}

impl TimingConfig {
    /// Reject configs the allocator cannot work with.
    ///
    /// # Errors
    /// `OrisError::InvalidConfig` if any field is non-finite or negative, or
    /// if both archetype durations are zero (the scale ratio would divide by
    /// zero).
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("vowel_ms", self.vowel_ms),
            ("consonant_ms", self.consonant_ms),
            ("punctuation_pause_ms", self.punctuation_pause_ms),
            ("min_viseme_ms", self.min_viseme_ms),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(OrisError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.vowel_ms + self.consonant_ms == 0.0 {
            return Err(OrisError::InvalidConfig(
                "vowel_ms and consonant_ms cannot both be zero".into(),
            ));
        }
        Ok(())
    }
}

/// Precomputed duration allocation for one synthesis call.
#[derive(Debug, Clone, Copy)]
pub struct TimingPlan {
    config: TimingConfig,
    duration_ms: f64,
    per_phoneme_ms: f64,
    scale: f64,
}

impl TimingPlan {
    /// Distribute `duration_secs` of audio across the given tokens.
    ///
    /// Non-positive durations are treated as zero.
    pub fn new(tokens: &[Token], duration_secs: f64, config: &TimingConfig) -> Self {
        let duration_ms = duration_secs.max(0.0) * 1000.0;

        let phoneme_count: usize = tokens.iter().map(Token::phoneme_count).sum();
        let pause_count = tokens.iter().filter(|t| t.is_punctuation()).count();

        let budget = (duration_ms - pause_count as f64 * config.punctuation_pause_ms).max(0.0);
        let per_phoneme_ms = (budget / phoneme_count.max(1) as f64).max(config.min_viseme_ms);
        let scale = per_phoneme_ms / ((config.vowel_ms + config.consonant_ms) / 2.0);

        Self {
            config: *config,
            duration_ms,
            per_phoneme_ms,
            scale,
        }
    }

    /// Total audio duration in milliseconds (clamped at zero).
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Even per-phoneme share of the budget, after the floor.
    pub fn per_phoneme_ms(&self) -> f64 {
        self.per_phoneme_ms
    }

    /// Pause length for one punctuation token.
    pub fn pause_ms(&self) -> f64 {
        self.config.punctuation_pause_ms
    }

    /// Scaled, floored duration for one phoneme.
    pub fn phoneme_ms(&self, phoneme: Phoneme) -> f64 {
        let archetype = if phoneme.is_vowel() {
            self.config.vowel_ms
        } else {
            self.config.consonant_ms
        };
        (archetype * self.scale).max(self.config.min_viseme_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2p::text_to_tokens;
    use approx::assert_abs_diff_eq;

    fn vowel() -> Phoneme {
        Phoneme::new("AA")
    }

    fn consonant() -> Phoneme {
        Phoneme::new("K")
    }

    #[test]
    fn vowels_run_longer_than_consonants() {
        let tokens = text_to_tokens("hello world");
        let plan = TimingPlan::new(&tokens, 1.0, &TimingConfig::default());
        assert!(plan.phoneme_ms(vowel()) > plan.phoneme_ms(consonant()));
    }

    #[test]
    fn relative_shape_matches_archetypes() {
        // 8 phonemes, no pauses, 1s budget → per-phoneme 125ms, scale 1.25
        let tokens = text_to_tokens("hello world");
        let plan = TimingPlan::new(&tokens, 1.0, &TimingConfig::default());
        assert_abs_diff_eq!(plan.per_phoneme_ms(), 125.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plan.phoneme_ms(vowel()), 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plan.phoneme_ms(consonant()), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn pauses_come_off_the_top() {
        // "Hi. Bye." → 4 phonemes, 2 pauses: budget 600ms, per-phoneme 150ms
        let tokens = text_to_tokens("Hi. Bye.");
        let plan = TimingPlan::new(&tokens, 1.0, &TimingConfig::default());
        assert_abs_diff_eq!(plan.per_phoneme_ms(), 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plan.pause_ms(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn long_text_floors_at_min_viseme_duration() {
        let text = "one two three four five one two three four five";
        let tokens = text_to_tokens(text);
        // Far too little audio for this much text
        let plan = TimingPlan::new(&tokens, 0.1, &TimingConfig::default());
        let config = TimingConfig::default();
        assert!(plan.phoneme_ms(consonant()) >= config.min_viseme_ms);
        assert!(plan.phoneme_ms(vowel()) >= config.min_viseme_ms);
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let tokens = text_to_tokens("hello");
        let plan = TimingPlan::new(&tokens, -3.0, &TimingConfig::default());
        assert_abs_diff_eq!(plan.duration_ms(), 0.0);
        // Floors still apply — cues keep their minimum length
        assert!(plan.phoneme_ms(consonant()) >= TimingConfig::default().min_viseme_ms);
    }

    #[test]
    fn empty_tokens_use_the_whole_duration() {
        let plan = TimingPlan::new(&[], 2.0, &TimingConfig::default());
        assert_abs_diff_eq!(plan.duration_ms(), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn default_config_validates() {
        TimingConfig::default().validate().expect("default is valid");
    }

    #[test]
    fn validation_rejects_bad_fields() {
        let negative = TimingConfig {
            vowel_ms: -1.0,
            ..TimingConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = TimingConfig {
            punctuation_pause_ms: f64::NAN,
            ..TimingConfig::default()
        };
        assert!(nan.validate().is_err());

        let zero_archetypes = TimingConfig {
            vowel_ms: 0.0,
            consonant_ms: 0.0,
            ..TimingConfig::default()
        };
        assert!(zero_archetypes.validate().is_err());
    }
}
