//! Speaking-rate duration estimate.
//!
//! When the caller has no measured audio length (TTS still in flight, or the
//! audio never materialized), a word-count estimate at a typical speaking
//! rate is good enough to drive the timeline.

/// Average speaking rate, ~150 words per minute.
pub const WORDS_PER_SECOND: f64 = 2.5;

/// Shortest estimate returned, so one-word replies still animate.
pub const MIN_DURATION_SECS: f64 = 0.5;

/// Estimate how long `text` takes to speak, in seconds.
pub fn estimate_duration_secs(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    (words as f64 / WORDS_PER_SECOND).max(MIN_DURATION_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rate_is_two_and_a_half_words_per_second() {
        assert_abs_diff_eq!(
            estimate_duration_secs("one two three four five"),
            2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn short_text_floors_at_half_a_second() {
        assert_abs_diff_eq!(estimate_duration_secs("hi"), 0.5);
        assert_abs_diff_eq!(estimate_duration_secs(""), 0.5);
    }
}
