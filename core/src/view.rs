use alloc::string::String;

use crate::*;

/// Placeholder shown for letters that have not been revealed yet.
pub const HIDDEN_LETTER: char = '_';

/// Remaining turns below this are shown as critical.
pub const CRITICAL_TURNS: Turns = 3;

/// One key of the on-screen letter grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LetterKey {
    pub letter: Letter,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Health {
    pub remaining: Turns,
    pub max: Turns,
}

impl Health {
    pub fn fraction(self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        f32::from(self.remaining) / f32::from(self.max)
    }

    pub const fn is_critical(self) -> bool {
        self.remaining < CRITICAL_TURNS
    }
}

/// Read-only presentation view of a round.
#[derive(Copy, Clone, Debug)]
pub struct RoundView<'a> {
    round: &'a Round,
}

impl<'a> RoundView<'a> {
    pub fn new(round: &'a Round) -> Self {
        Self { round }
    }

    /// The word with unrevealed letters masked, letters separated by spaces.
    pub fn masked_word(&self) -> String {
        let mut masked = String::with_capacity(self.round.word().len() * 2);
        for (i, letter) in self.round.entry().letters().enumerate() {
            if i > 0 {
                masked.push(' ');
            }
            masked.push(if self.round.is_guessed(letter) {
                letter.as_char()
            } else {
                HIDDEN_LETTER
            });
        }
        masked
    }

    pub fn letter_keys(&self) -> impl Iterator<Item = LetterKey> + use<'a> {
        let guessed = self.round.guessed();
        let playing = self.round.state().is_playing();
        Letter::alphabet().map(move |letter| LetterKey {
            letter,
            enabled: playing && !guessed.contains(letter),
        })
    }

    /// Label for the hint button, `None` once every hint has been used.
    pub fn hint_label(&self) -> Option<&'static str> {
        use HintStage::*;
        match self.round.hint_stage() {
            Unused => Some("Get Hint"),
            TextShown => Some("Disable Half Letters (Cost 1 turn)"),
            LettersDisabled => Some("Show Vowels (Cost 1 turn)"),
            VowelsShown => None,
        }
    }

    pub fn hint_text(&self) -> Option<&'a str> {
        self.round.hint_text()
    }

    pub fn health(&self) -> Health {
        Health {
            remaining: self.round.remaining_turns(),
            max: self.round.max_turns(),
        }
    }

    pub fn turns_label(&self) -> String {
        alloc::format!("Turns remaining: {}", self.round.remaining_turns())
    }
}
