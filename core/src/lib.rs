#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use hint::*;
pub use letter::*;
pub use round::*;
pub use session::*;
pub use view::*;
pub use words::*;

mod error;
mod hint;
mod letter;
mod round;
mod session;
mod view;
mod words;

/// Count type used for the turn budget and remaining turns.
pub type Turns = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_turns: Turns,
}

impl GameConfig {
    pub const DEFAULT_TURNS: Turns = 6;

    pub const fn new_unchecked(max_turns: Turns) -> Self {
        Self { max_turns }
    }

    pub fn new(max_turns: Turns) -> Self {
        Self::new_unchecked(max_turns.clamp(1, ALPHABET_LEN))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_TURNS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Repeated,
    Hit,
    Miss,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            Repeated => false,
            Hit => true,
            Miss => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    TextRevealed,
    /// Number of letters newly taken out of play.
    LettersDisabled(u8),
    /// Number of vowels newly revealed.
    VowelsRevealed(u8),
    Won,
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        true
    }
}

/// Advisory signal raised by the session after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    AboutToLose,
    Lost,
    GuessedRight,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        use Notice::*;
        match self {
            AboutToLose => "You're about to die!",
            Lost => "You lost!",
            GuessedRight => "You guessed it right!",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report<O> {
    pub outcome: O,
    pub notice: Option<Notice>,
}

impl Report<GuessOutcome> {
    pub const fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}

impl Report<HintOutcome> {
    pub const fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}
