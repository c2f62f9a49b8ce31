use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of letters in the playable alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// A single uppercase letter `A..=Z`, stored as its offset from `A`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const VOWELS: [Letter; 5] = [
        Letter::from_ascii(b'A'),
        Letter::from_ascii(b'E'),
        Letter::from_ascii(b'I'),
        Letter::from_ascii(b'O'),
        Letter::from_ascii(b'U'),
    ];

    /// `byte` must be in `b'A'..=b'Z'`.
    const fn from_ascii(byte: u8) -> Self {
        Self(byte - b'A')
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn is_vowel(self) -> bool {
        Self::VOWELS.contains(&self)
    }

    /// All letters in alphabetical order.
    pub fn alphabet() -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator {
        (0..ALPHABET_LEN).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(ch: char) -> Result<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self::from_ascii(upper as u8))
        } else {
            Err(GameError::InvalidLetter(ch))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Membership-only set of letters, one bit per letter.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    const MASK: u32 = (1 << ALPHABET_LEN) - 1;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Returns `true` when the letter was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = Self::bit(letter);
        let inserted = self.0 & bit == 0;
        self.0 |= bit;
        inserted
    }

    pub const fn contains(&self, letter: Letter) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    pub const fn len(&self) -> u8 {
        (self.0 & Self::MASK).count_ones() as u8
    }

    pub const fn is_empty(&self) -> bool {
        self.0 & Self::MASK == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub const fn is_superset(&self, other: &Self) -> bool {
        other.0 & !self.0 & Self::MASK == 0
    }

    pub const fn complement(&self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::alphabet().filter(|&letter| self.contains(letter))
    }

    const fn bit(letter: Letter) -> u32 {
        1 << letter.index()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Letter::as_char)).finish()
    }
}
