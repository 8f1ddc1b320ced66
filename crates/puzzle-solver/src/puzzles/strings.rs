//! String ladder: turn one string into another by nudging a single
//! character forwards or backwards through a cyclic alphabet.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};

/// A contiguous, wrapping range of symbols such as `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            first: 'A',
            last: 'Z',
        }
    }
}

impl Alphabet {
    pub fn new(first: char, last: char) -> Result<Self> {
        if first > last {
            return Err(PuzzleError::InvalidAlphabet { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn contains(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&ch)
    }

    /// Next symbol, wrapping from the last back to the first
    pub fn after(&self, ch: char) -> char {
        if ch == self.last {
            self.first
        } else {
            // Only fails inside the surrogate gap
            char::from_u32(ch as u32 + 1).unwrap_or(self.first)
        }
    }

    /// Previous symbol, wrapping from the first back to the last
    pub fn before(&self, ch: char) -> char {
        if ch == self.first {
            self.last
        } else {
            char::from_u32(ch as u32 - 1).unwrap_or(self.last)
        }
    }
}

/// Data shared by every configuration of one puzzle.
#[derive(Debug)]
struct Target {
    finish: String,
    alphabet: Alphabet,
}

/// One rung of the ladder. Equality and hashing use the current string
/// only; the finish string and alphabet are shared.
#[derive(Debug, Clone)]
pub struct StringsConfig {
    current: String,
    target: Arc<Target>,
}

impl StringsConfig {
    pub fn new(start: &str, finish: &str) -> Result<Self> {
        Self::with_alphabet(start, finish, Alphabet::default())
    }

    pub fn with_alphabet(start: &str, finish: &str, alphabet: Alphabet) -> Result<Self> {
        if start.chars().count() != finish.chars().count() {
            return Err(PuzzleError::InvalidString(format!(
                "{start:?} and {finish:?} differ in length"
            )));
        }
        for word in [start, finish] {
            if let Some(bad) = word.chars().find(|&ch| !alphabet.contains(ch)) {
                return Err(PuzzleError::InvalidString(format!(
                    "{bad:?} in {word:?} is outside the alphabet"
                )));
            }
        }
        Ok(Self {
            current: start.to_string(),
            target: Arc::new(Target {
                finish: finish.to_string(),
                alphabet,
            }),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }

    pub fn finish(&self) -> &str {
        &self.target.finish
    }

    fn with_char(&self, index: usize, ch: char) -> Self {
        let current = self
            .current
            .chars()
            .enumerate()
            .map(|(i, c)| if i == index { ch } else { c })
            .collect();
        Self {
            current,
            target: Arc::clone(&self.target),
        }
    }
}

impl PartialEq for StringsConfig {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for StringsConfig {}

impl Hash for StringsConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl Configuration for StringsConfig {
    fn is_goal(&self) -> bool {
        self.current == self.target.finish
    }

    fn neighbors(&self) -> Vec<Self> {
        let alphabet = self.target.alphabet;
        let mut neighbors = Vec::with_capacity(self.current.len() * 2);
        for (index, ch) in self.current.chars().enumerate() {
            neighbors.push(self.with_char(index, alphabet.after(ch)));
            neighbors.push(self.with_char(index, alphabet.before(ch)));
        }
        neighbors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}
