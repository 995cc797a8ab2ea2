//! # Word Sequence
//!
//! Cycles a [`Typewriter`] through an ordered list of words.
//!
//! ```text
//! Writing ──(word idle)──▶ Pausing ──(pause elapsed)──▶ Writing (next word)
//!    │
//!    └──(last word idle, looping off)──▶ Finished
//! ```
//!
//! An empty word list publishes `None` once and never wakes again.

use rand::Rng;

use super::animation::{Animation, Tick};
use super::options::SequenceOptions;
use super::writer::Typewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Writing,
    Pausing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Sequence {
    words: Vec<String>,
    index: usize,
    options: SequenceOptions,
    writer: Typewriter,
    phase: Phase,
}

impl Sequence {
    pub fn new(words: Vec<String>, options: SequenceOptions) -> Self {
        let mut writer = Typewriter::new(options.writer_options());
        if let Some(first) = words.first() {
            writer.set_target(first.as_str());
        }
        Self {
            words,
            index: 0,
            options,
            writer,
            phase: Phase::Writing,
        }
    }

    /// Position of the word being typed, erased or paused on.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Text on display right now.
    pub fn current(&self) -> &str {
        self.writer.current()
    }

    /// True once the last word settled with looping off, or the list is empty.
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.words.len()
    }

    fn write<R: Rng>(&mut self, rng: &mut R) -> Tick {
        let text = self.writer.step().to_string();
        if !self.writer.is_idle() {
            return Tick::rearm(Some(text), self.writer.next_delay(rng));
        }

        if self.is_last() && !self.options.looping {
            self.phase = Phase::Finished;
            return Tick::settled(Some(text));
        }

        self.phase = Phase::Pausing;
        Tick::rearm(Some(text), self.options.pause)
    }

    fn advance(&mut self) {
        self.index = if self.is_last() { 0 } else { self.index + 1 };
        self.writer.set_target(self.words[self.index].as_str());
        self.phase = Phase::Writing;
    }
}

impl Animation for Sequence {
    fn tick<R: Rng>(&mut self, rng: &mut R) -> Tick {
        if self.words.is_empty() {
            self.phase = Phase::Finished;
            return Tick::settled(None);
        }

        match self.phase {
            Phase::Writing => self.write(rng),
            Phase::Pausing => {
                self.advance();
                self.write(rng)
            }
            Phase::Finished => Tick::settled(Some(self.writer.current().to_string())),
        }
    }
}
