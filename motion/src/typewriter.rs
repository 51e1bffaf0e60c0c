//! Typing/deleting state machine for the hero banner.
//!
//! The machine is pure: [`Typewriter::tick`] advances exactly one step and
//! returns the delay before the next step should run. It never loops or
//! schedules on its own; [`crate::driver::TypewriterDriver`] owns timing.
//!
//! ```text
//!   Growing --(phrase complete)--> Holding --(pause elapsed)--> Shrinking
//!      ^                                                            |
//!      +------------(text empty, advance phrase index)--------------+
//! ```
//!
//! Lengths are counted in `char`s, so multi-byte phrases grow and shrink one
//! visible character at a time.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts::{DELETE_INTERVAL_MS, HOLD_INTERVAL_MS, TYPE_INTERVAL_MS};
use crate::error::MotionError;

/// Phrase list and step cadence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    /// Delay between appended characters.
    pub type_ms: u32,
    /// Delay between removed characters.
    pub delete_ms: u32,
    /// Hold after a phrase is complete, before deletion starts.
    pub pause_ms: u32,
}

impl TypewriterConfig {
    /// Config with default cadence.
    #[must_use]
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            type_ms: TYPE_INTERVAL_MS,
            delete_ms: DELETE_INTERVAL_MS,
            pause_ms: HOLD_INTERVAL_MS,
        }
    }

    #[must_use]
    pub fn with_intervals(mut self, type_ms: u32, delete_ms: u32, pause_ms: u32) -> Self {
        self.type_ms = type_ms;
        self.delete_ms = delete_ms;
        self.pause_ms = pause_ms;
        self
    }

    /// Reject configurations that could never show text or would spin.
    pub fn validate(&self) -> Result<(), MotionError> {
        if self.phrases.is_empty() {
            return Err(MotionError::EmptyPhraseList);
        }
        if self.phrases.iter().all(String::is_empty) {
            return Err(MotionError::BlankPhraseList);
        }
        if self.type_ms == 0 {
            return Err(MotionError::ZeroInterval("typing"));
        }
        if self.delete_ms == 0 {
            return Err(MotionError::ZeroInterval("deleting"));
        }
        if self.pause_ms == 0 {
            return Err(MotionError::ZeroInterval("pause"));
        }
        Ok(())
    }
}

/// Current phase of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Appending characters.
    #[default]
    Growing,
    /// Phrase complete; waiting out the pause before deleting.
    Holding,
    /// Removing characters.
    Shrinking,
}

/// Outcome of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Delay before the next step.
    pub delay_ms: u32,
    /// Whether the displayed text changed on this step.
    pub changed: bool,
}

/// The typewriter itself. Construct with [`Typewriter::new`].
#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase_index: usize,
    shown: usize,
    text: String,
    phase: Phase,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self { config, phrase_index: 0, shown: 0, text: String::new(), phase: Phase::Growing })
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Tick {
        match self.phase {
            Phase::Growing => self.grow(),
            Phase::Holding => {
                self.phase = Phase::Shrinking;
                Tick { delay_ms: self.config.delete_ms, changed: false }
            }
            Phase::Shrinking => self.shrink(),
        }
    }

    fn grow(&mut self) -> Tick {
        let phrase = self.current_phrase();
        let next = phrase.chars().nth(self.shown);
        let phrase_len = phrase.chars().count();
        let changed = match next {
            Some(ch) => {
                self.text.push(ch);
                self.shown += 1;
                true
            }
            None => false,
        };
        if self.shown >= phrase_len {
            self.phase = Phase::Holding;
            Tick { delay_ms: self.config.pause_ms, changed }
        } else {
            Tick { delay_ms: self.config.type_ms, changed }
        }
    }

    fn shrink(&mut self) -> Tick {
        let changed = self.text.pop().is_some();
        if changed {
            self.shown -= 1;
        }
        if self.shown == 0 {
            self.phrase_index = (self.phrase_index + 1) % self.config.phrases.len();
            self.phase = Phase::Growing;
            Tick { delay_ms: self.config.type_ms, changed }
        } else {
            Tick { delay_ms: self.config.delete_ms, changed }
        }
    }

    fn current_phrase(&self) -> &str {
        self.config.phrases.get(self.phrase_index).map_or("", String::as_str)
    }

    /// Text currently on screen: always a prefix of the current phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of [`Self::text`] in characters.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Full text of the phrase being typed or deleted.
    #[must_use]
    pub fn phrase(&self) -> &str {
        self.current_phrase()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Shrinking
    }

    /// Delay before the very first step after mount.
    #[must_use]
    pub fn first_delay_ms(&self) -> u32 {
        self.config.type_ms
    }

    #[must_use]
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }
}
