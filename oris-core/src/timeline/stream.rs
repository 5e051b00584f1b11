//! Streaming variant — cues on demand.
//!
//! [`CueStream`] yields the same cue sequence as the standard builder, one
//! cue per `next()` call, so a consumer can start driving morph targets
//! before the rest of the text is processed. It is a plain pull-based
//! cursor: single-consumer, synchronous, no channels, no background work.
//! Cancellation is simply dropping the iterator.
//!
//! The stream does not emit the trailing coverage cue on its own — a
//! consumer that drains to completion and wants full coverage asks for it
//! explicitly via [`CueStream::trailing_silence`].

use crate::g2p::{text_to_tokens, Token};
use crate::timeline::MouthCue;
use crate::timing::{TimingConfig, TimingPlan};
use crate::viseme::Viseme;

/// Lazy, forward-only cue sequence for one synthesis call.
#[derive(Debug, Clone)]
pub struct CueStream {
    tokens: Vec<Token>,
    plan: TimingPlan,
    token_idx: usize,
    phoneme_idx: usize,
    cursor_ms: f64,
    exhausted: bool,
}

impl CueStream {
    /// Stream cues for `text` spanning `audio_duration_secs`, with default
    /// timing constants.
    pub fn new(text: &str, audio_duration_secs: f64) -> Self {
        Self::with_config(text, audio_duration_secs, &TimingConfig::default())
    }

    /// [`CueStream::new`] with explicit timing constants.
    pub fn with_config(text: &str, audio_duration_secs: f64, config: &TimingConfig) -> Self {
        let tokens = text_to_tokens(text);
        let plan = TimingPlan::new(&tokens, audio_duration_secs, config);
        Self {
            tokens,
            plan,
            token_idx: 0,
            phoneme_idx: 0,
            cursor_ms: 0.0,
            exhausted: false,
        }
    }

    /// The coverage cue the standard variant appends, if one is needed.
    ///
    /// Returns `None` until the stream is drained, and `None` after draining
    /// when the emitted cues already reach the full duration.
    pub fn trailing_silence(&self) -> Option<MouthCue> {
        if !self.exhausted || self.cursor_ms >= self.plan.duration_ms() {
            return None;
        }
        Some(MouthCue::silence(
            self.cursor_ms / 1000.0,
            self.plan.duration_ms() / 1000.0,
        ))
    }
}

impl Iterator for CueStream {
    type Item = MouthCue;

    fn next(&mut self) -> Option<MouthCue> {
        loop {
            let token = match self.tokens.get(self.token_idx) {
                Some(token) => token,
                None => {
                    self.exhausted = true;
                    return None;
                }
            };

            match token {
                Token::Punctuation { .. } => {
                    let pause = self.plan.pause_ms();
                    let cue =
                        MouthCue::silence(self.cursor_ms / 1000.0, (self.cursor_ms + pause) / 1000.0);
                    self.cursor_ms += pause;
                    self.token_idx += 1;
                    return Some(cue);
                }
                Token::Word { phonemes, .. } => {
                    let Some(&phoneme) = phonemes.get(self.phoneme_idx) else {
                        // Word exhausted (or had no phonemes at all, e.g. digits)
                        self.token_idx += 1;
                        self.phoneme_idx = 0;
                        continue;
                    };
                    let duration = self.plan.phoneme_ms(phoneme);
                    let cue = MouthCue::new(
                        Viseme::from_phoneme(phoneme),
                        self.cursor_ms / 1000.0,
                        (self.cursor_ms + duration) / 1000.0,
                    );
                    self.cursor_ms += duration;
                    self.phoneme_idx += 1;
                    return Some(cue);
                }
            }
        }
    }
}

impl std::iter::FusedIterator for CueStream {}

/// Stream cues for `text` spanning `audio_duration_secs`.
pub fn synthesize_stream(text: &str, audio_duration_secs: f64) -> CueStream {
    CueStream::new(text, audio_duration_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::builder::synthesize;
    use approx::assert_abs_diff_eq;

    #[test]
    fn matches_the_standard_variant_minus_the_trailing_cue() {
        let text = "Hello there, world.";
        let standard = synthesize(text, 2.0);
        let streamed: Vec<_> = synthesize_stream(text, 2.0).collect();

        // Standard ends with a coverage cue the stream withholds
        let body = &standard.mouth_cues[..standard.mouth_cues.len() - 1];
        assert_eq!(streamed.len(), body.len());
        for (s, b) in streamed.iter().zip(body) {
            assert_abs_diff_eq!(s.start, b.start);
            assert_abs_diff_eq!(s.end, b.end);
            assert_eq!(s.viseme, b.viseme);
        }
    }

    #[test]
    fn trailing_silence_completes_coverage() {
        let text = "Hello there, world.";
        let mut stream = synthesize_stream(text, 2.0);

        assert!(
            stream.trailing_silence().is_none(),
            "no trailing cue before draining"
        );
        let mut cues: Vec<_> = stream.by_ref().collect();
        let trailing = stream
            .trailing_silence()
            .expect("this text leaves a shortfall to cover");
        cues.push(trailing);

        let standard = synthesize(text, 2.0);
        assert_eq!(cues.len(), standard.mouth_cues.len());
        assert_abs_diff_eq!(
            cues.last().expect("non-empty").end,
            2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn no_trailing_cue_when_cues_fill_the_duration() {
        // 4 phonemes + 2 pauses divide a 1s budget exactly
        let mut stream = synthesize_stream("Hi. Bye.", 1.0);
        for _ in stream.by_ref() {}
        assert!(stream.trailing_silence().is_none());
    }

    #[test]
    fn empty_text_streams_nothing() {
        let mut stream = synthesize_stream("", 2.0);
        assert!(stream.next().is_none());
        // The coverage cue is still available explicitly
        let trailing = stream.trailing_silence().expect("whole duration uncovered");
        assert_abs_diff_eq!(trailing.start, 0.0);
        assert_abs_diff_eq!(trailing.end, 2.0);
    }

    #[test]
    fn stream_is_fused() {
        let mut stream = synthesize_stream("hi", 0.5);
        while stream.next().is_some() {}
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn words_without_phonemes_are_skipped() {
        // "123" tokenizes as a word but no rule matches digits
        let cues: Vec<_> = synthesize_stream("123", 1.0).collect();
        assert!(cues.is_empty());
    }
}
