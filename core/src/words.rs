use alloc::borrow::Cow;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A puzzle word together with the description shown by the first hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordEntry")]
pub struct WordEntry {
    word: Cow<'static, str>,
    hint: Cow<'static, str>,
}

impl WordEntry {
    /// Caller guarantees `word` is non-empty uppercase ASCII.
    pub const fn new_unchecked(word: &'static str, hint: &'static str) -> Self {
        Self {
            word: Cow::Borrowed(word),
            hint: Cow::Borrowed(hint),
        }
    }

    pub fn new(word: impl Into<Cow<'static, str>>, hint: impl Into<Cow<'static, str>>) -> Result<Self> {
        let word = word.into();
        if word.is_empty() || !word.bytes().all(|byte| byte.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord);
        }
        Ok(Self {
            word,
            hint: hint.into(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Letters of the word in reading order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.word.chars().filter_map(|ch| Letter::try_from(ch).ok())
    }

    pub fn letter_set(&self) -> LetterSet {
        self.letters().collect()
    }
}

#[derive(Deserialize)]
struct RawWordEntry {
    word: Cow<'static, str>,
    hint: Cow<'static, str>,
}

impl TryFrom<RawWordEntry> for WordEntry {
    type Error = GameError;

    fn try_from(raw: RawWordEntry) -> Result<Self> {
        Self::new(raw.word, raw.hint)
    }
}

const BUILTIN_WORDS: [WordEntry; 20] = [
    WordEntry::new_unchecked(
        "ROBOT",
        "A machine capable of carrying out complex actions automatically.",
    ),
    WordEntry::new_unchecked("SPACESHIP", "A vehicle used for travel in outer space."),
    WordEntry::new_unchecked(
        "DINOSAUR",
        "A large reptile from the Mesozoic era, now extinct.",
    ),
    WordEntry::new_unchecked("VOLCANO", "A mountain that can erupt with lava and ash."),
    WordEntry::new_unchecked("TURTLE", "A reptile with a hard shell that moves slowly."),
    WordEntry::new_unchecked("RAINBOW", "A multicolored arc often seen after rain."),
    WordEntry::new_unchecked("CAMEL", "An animal with humps, adapted to desert life."),
    WordEntry::new_unchecked(
        "JUGGLER",
        "A performer who keeps several objects in motion at once.",
    ),
    WordEntry::new_unchecked(
        "OCTOPUS",
        "A sea creature with eight arms and a bulbous head.",
    ),
    WordEntry::new_unchecked(
        "MARATHON",
        "A long-distance race, usually over 26 miles.",
    ),
    WordEntry::new_unchecked("CUPCAKE", "A small cake baked in a cup-shaped container."),
    WordEntry::new_unchecked(
        "PYTHON",
        "A large non-venomous snake, or a popular programming language.",
    ),
    WordEntry::new_unchecked(
        "BALLOON",
        "An inflatable rubber bag that can float when filled with gas.",
    ),
    WordEntry::new_unchecked("LANTERN", "A portable light source typically used outdoors."),
    WordEntry::new_unchecked(
        "HURRICANE",
        "A severe tropical storm with strong winds and heavy rain.",
    ),
    WordEntry::new_unchecked(
        "TREASURE",
        "A collection of valuable items like gold, gems, or coins.",
    ),
    WordEntry::new_unchecked(
        "SKELETON",
        "The internal framework of bones in an animal's body.",
    ),
    WordEntry::new_unchecked(
        "MERMAID",
        "A mythical creature with the upper body of a woman and the tail of a fish.",
    ),
    WordEntry::new_unchecked(
        "BICYCLE",
        "A two-wheeled vehicle that you pedal to move forward.",
    ),
    WordEntry::new_unchecked(
        "PIRATE",
        "A person who attacks ships at sea to steal valuables.",
    ),
];

/// Ordered, non-empty pool of puzzles. Word indices wrap around its length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordTable")]
pub struct WordTable {
    entries: Vec<WordEntry>,
}

#[derive(Deserialize)]
struct RawWordTable {
    entries: Vec<WordEntry>,
}

impl TryFrom<RawWordTable> for WordTable {
    type Error = GameError;

    fn try_from(raw: RawWordTable) -> Result<Self> {
        Self::new(raw.entries)
    }
}

impl WordTable {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GameError::EmptyWordTable);
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_WORDS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapped modulo the table length.
    pub fn entry(&self, index: usize) -> &WordEntry {
        &self.entries[self.wrap(index)]
    }

    pub fn wrap(&self, index: usize) -> usize {
        index % self.entries.len()
    }

    pub fn next_index(&self, index: usize) -> usize {
        self.wrap(index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn builtin_table_starts_with_robot_and_has_twenty_valid_words() {
        let table = WordTable::builtin();

        assert_eq!(table.len(), 20);
        assert_eq!(table.entry(0).word(), "ROBOT");
        assert_eq!(table.entry(19).word(), "PIRATE");
        for entry in table.iter() {
            assert_eq!(
                WordEntry::new(String::from(entry.word()), String::from(entry.hint())).as_ref(),
                Ok(entry),
            );
        }
    }

    #[test]
    fn indices_wrap_around_the_table() {
        let table = WordTable::builtin();

        assert_eq!(table.next_index(19), 0);
        assert_eq!(table.entry(21).word(), "SPACESHIP");
    }

    #[test]
    fn word_entry_rejects_non_uppercase_words() {
        assert_eq!(WordEntry::new("robot", "lowercase"), Err(GameError::InvalidWord));
        assert_eq!(WordEntry::new("", "empty"), Err(GameError::InvalidWord));
        assert_eq!(WordEntry::new("ICE CREAM", "space"), Err(GameError::InvalidWord));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(WordTable::new(vec![]), Err(GameError::EmptyWordTable));
    }

    #[test]
    fn letter_set_ignores_repeats() {
        let entry = WordEntry::new("BALLOON", "").unwrap();

        assert_eq!(entry.letters().count(), 7);
        assert_eq!(entry.letter_set().len(), 5);
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let table: WordTable =
            serde_json::from_str(r#"{"entries":[{"word":"CAMEL","hint":"humps"}]}"#).unwrap();
        assert_eq!(table.entry(0).word(), "CAMEL");

        assert!(serde_json::from_str::<WordTable>(r#"{"entries":[]}"#).is_err());
        assert!(serde_json::from_str::<WordEntry>(r#"{"word":"robot","hint":"beep"}"#).is_err());
        assert!(serde_json::from_str::<WordEntry>(r#"{"word":"","hint":"blank"}"#).is_err());
    }
}
