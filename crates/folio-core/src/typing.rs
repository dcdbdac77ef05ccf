//! Typewriter banner: type a phrase, hold it, erase it, move on.

use std::time::Duration;

// Shortest step; zero-length timings would never yield.
const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    phrases: Vec<String>,
    timings: TypingTimings,
    index: usize,
    shown: usize, // visible chars of the current phrase
    phase: TypingPhase,
    elapsed: Duration,
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Self {
        let phrases = phrases.into_iter().filter(|p| !p.is_empty()).collect();
        Self {
            phrases,
            timings,
            index: 0,
            shown: 0,
            phase: TypingPhase::Typing,
            elapsed: Duration::ZERO,
        }
    }

    /// Split a `|`-separated attribute value into phrases, skipping blanks.
    pub fn parse_phrases(raw: &str) -> Vec<String> {
        raw.split('|')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[inline]
    pub fn is_deleting(&self) -> bool {
        self.phase == TypingPhase::Deleting
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map_or(0, |p| p.chars().count())
    }

    /// Feed elapsed wall time. Returns whether `text()` changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        self.elapsed += dt;
        let mut changed = false;
        loop {
            match self.phase {
                TypingPhase::Typing if self.shown >= self.phrase_len() => {
                    self.phase = TypingPhase::Paused;
                }
                TypingPhase::Deleting if self.shown == 0 => {
                    self.phase = TypingPhase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                }
                phase => {
                    let step = match phase {
                        TypingPhase::Typing => self.timings.typing,
                        TypingPhase::Paused => self.timings.pause,
                        TypingPhase::Deleting => self.timings.deleting,
                    }
                    .max(MIN_STEP);
                    if self.elapsed < step {
                        break;
                    }
                    self.elapsed -= step;
                    match phase {
                        TypingPhase::Typing => {
                            self.shown += 1;
                            changed = true;
                        }
                        TypingPhase::Paused => self.phase = TypingPhase::Deleting,
                        TypingPhase::Deleting => {
                            self.shown -= 1;
                            changed = true;
                        }
                    }
                }
            }
        }
        changed
    }
}
