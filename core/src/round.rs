use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Play state for a single word: guessed letters, turns left and hint progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    entry: WordEntry,
    #[serde(skip)]
    word_letters: LetterSet,
    guessed: LetterSet,
    max_turns: Turns,
    remaining_turns: Turns,
    hint_stage: HintStage,
    state: RoundState,
}

impl Round {
    pub fn new(entry: WordEntry, config: GameConfig) -> Self {
        let word_letters = entry.letter_set();
        Self {
            entry,
            word_letters,
            guessed: LetterSet::new(),
            max_turns: config.max_turns,
            remaining_turns: config.max_turns,
            hint_stage: Default::default(),
            state: Default::default(),
        }
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn word(&self) -> &str {
        self.entry.word()
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(letter)
    }

    pub fn max_turns(&self) -> Turns {
        self.max_turns
    }

    pub fn remaining_turns(&self) -> Turns {
        self.remaining_turns
    }

    pub fn hint_stage(&self) -> HintStage {
        self.hint_stage
    }

    /// The word's description, once the first hint has been taken.
    pub fn hint_text(&self) -> Option<&str> {
        self.hint_stage
            .text_revealed()
            .then(|| self.entry.hint())
    }

    pub fn is_solved(&self) -> bool {
        self.guessed.is_superset(&self.word_letters)
    }

    /// Whether taking the next hint would be accepted right now.
    pub fn can_use_hint(&self) -> bool {
        self.check_hint_allowed().is_ok()
    }

    pub fn guess(&mut self, letter: Letter) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        self.check_playing()?;

        if !self.guessed.insert(letter) {
            log::trace!("{} already guessed", letter);
            return Ok(Repeated);
        }

        let hit = self.word_letters.contains(letter);
        if !hit {
            self.spend_turn();
        }
        log::debug!(
            "guess {}: {}, {} turns left",
            letter,
            if hit { "hit" } else { "miss" },
            self.remaining_turns
        );

        Ok(match self.settle() {
            RoundState::Won => Won,
            RoundState::Lost => Lost,
            RoundState::Playing if hit => Hit,
            RoundState::Playing => Miss,
        })
    }

    pub fn use_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<HintOutcome> {
        use HintStage::*;

        self.check_hint_allowed()?;

        let cost = self.hint_stage.next_cost();
        let outcome = match self.hint_stage {
            Unused => HintOutcome::TextRevealed,
            TextShown => HintOutcome::LettersDisabled(self.disable_absent_letters(rng)),
            LettersDisabled => HintOutcome::VowelsRevealed(self.reveal_vowels()),
            VowelsShown => return Err(GameError::NoMoreHints),
        };

        for _ in 0..cost {
            self.spend_turn();
        }
        if let Some(next) = self.hint_stage.next() {
            self.hint_stage = next;
        }
        log::debug!(
            "hint stage {} taken, {} turns left",
            self.hint_stage.index(),
            self.remaining_turns
        );

        // paid hints are refused at one turn left, so a hint never loses the round
        debug_assert!(cost == 0 || self.remaining_turns > 0);
        Ok(match self.settle() {
            RoundState::Won => HintOutcome::Won,
            _ => outcome,
        })
    }

    pub fn restart(&mut self) {
        self.guessed.clear();
        self.remaining_turns = self.max_turns;
        self.hint_stage = HintStage::Unused;
        self.state = RoundState::Playing;
    }

    /// Takes half (rounded down) of the letters absent from the word out of play, picked at random.
    fn disable_absent_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let mut absent: Vec<Letter> = self.word_letters.complement().iter().collect();
        absent.shuffle(rng);
        let take = absent.len() / 2;

        let mut disabled = 0;
        for &letter in &absent[..take] {
            if self.guessed.insert(letter) {
                disabled += 1;
            }
        }
        disabled
    }

    fn reveal_vowels(&mut self) -> u8 {
        let word_letters = self.word_letters;
        let mut revealed = 0;
        for vowel in Letter::VOWELS {
            if word_letters.contains(vowel) && self.guessed.insert(vowel) {
                revealed += 1;
            }
        }
        revealed
    }

    fn spend_turn(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }

    fn settle(&mut self) -> RoundState {
        if self.state.is_playing() {
            if self.is_solved() {
                self.state = RoundState::Won;
            } else if self.remaining_turns == 0 {
                self.state = RoundState::Lost;
            }
        }
        self.state
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }

    fn check_hint_allowed(&self) -> Result<()> {
        self.check_playing()?;
        if self.hint_stage.is_exhausted() {
            Err(GameError::NoMoreHints)
        } else if self.hint_stage.next_cost() > 0 && self.remaining_turns <= 1 {
            Err(GameError::HintsUnavailable)
        } else {
            Ok(())
        }
    }
}

#[derive(Deserialize)]
struct RawRound {
    entry: WordEntry,
    guessed: LetterSet,
    max_turns: Turns,
    remaining_turns: Turns,
    hint_stage: HintStage,
    state: RoundState,
}

impl TryFrom<RawRound> for Round {
    type Error = GameError;

    fn try_from(raw: RawRound) -> Result<Self> {
        let round = Self {
            word_letters: raw.entry.letter_set(),
            entry: raw.entry,
            guessed: raw.guessed,
            max_turns: raw.max_turns,
            remaining_turns: raw.remaining_turns,
            hint_stage: raw.hint_stage,
            state: raw.state,
        };

        if round.remaining_turns > round.max_turns {
            return Err(GameError::InvalidSnapshot);
        }
        let settled = if round.is_solved() {
            RoundState::Won
        } else if round.remaining_turns == 0 {
            RoundState::Lost
        } else {
            RoundState::Playing
        };
        if settled != round.state {
            return Err(GameError::InvalidSnapshot);
        }
        Ok(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn round(word: &'static str) -> Round {
        Round::new(WordEntry::new(word, "test hint").unwrap(), GameConfig::default())
    }

    fn letter(ch: char) -> Letter {
        Letter::try_from(ch).unwrap()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn guessing_every_letter_wins() {
        let mut round = round("ROBOT");

        assert_eq!(round.guess(letter('R')).unwrap(), GuessOutcome::Hit);
        assert_eq!(round.guess(letter('O')).unwrap(), GuessOutcome::Hit);
        assert_eq!(round.guess(letter('B')).unwrap(), GuessOutcome::Hit);
        assert_eq!(round.guess(letter('T')).unwrap(), GuessOutcome::Won);

        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.remaining_turns(), 6);
        assert!(round.is_solved());
    }

    #[test]
    fn wrong_guesses_cost_turns_until_lost() {
        let mut round = round("ROBOT");

        for ch in ['X', 'Y', 'Z', 'Q', 'W'] {
            assert_eq!(round.guess(letter(ch)).unwrap(), GuessOutcome::Miss);
        }
        assert_eq!(round.remaining_turns(), 1);

        assert_eq!(round.guess(letter('V')).unwrap(), GuessOutcome::Lost);
        assert_eq!(round.remaining_turns(), 0);
        assert_eq!(round.guess(letter('R')), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn repeated_guess_is_a_no_op() {
        let mut round = round("ROBOT");

        round.guess(letter('X')).unwrap();
        assert_eq!(round.guess(letter('x')).unwrap(), GuessOutcome::Repeated);
        assert_eq!(round.remaining_turns(), 5);

        round.guess(letter('R')).unwrap();
        assert_eq!(round.guess(letter('R')).unwrap(), GuessOutcome::Repeated);
        assert_eq!(round.remaining_turns(), 5);
    }

    #[test]
    fn first_hint_reveals_text_for_free() {
        let mut round = round("CAMEL");
        assert_eq!(round.hint_text(), None);

        assert_eq!(round.use_hint(&mut rng()).unwrap(), HintOutcome::TextRevealed);

        assert_eq!(round.hint_text(), Some("test hint"));
        assert_eq!(round.hint_stage(), HintStage::TextShown);
        assert_eq!(round.remaining_turns(), 6);
    }

    #[test]
    fn second_hint_disables_half_the_absent_letters() {
        let mut round = round("ROBOT");
        let mut rng = rng();
        round.use_hint(&mut rng).unwrap();

        let outcome = round.use_hint(&mut rng).unwrap();

        // 26 - |{R, O, B, T}| = 22 absent letters
        assert_eq!(outcome, HintOutcome::LettersDisabled(11));
        assert_eq!(round.guessed().len(), 11);
        assert!(round.guessed().iter().all(|l| !"ROBOT".contains(l.as_char())));
        assert_eq!(round.remaining_turns(), 5);
        assert_eq!(round.hint_stage(), HintStage::LettersDisabled);
    }

    #[test]
    fn third_hint_reveals_vowels_in_word() {
        let mut round = round("DINOSAUR");
        let mut rng = rng();
        round.use_hint(&mut rng).unwrap();
        round.use_hint(&mut rng).unwrap();

        let outcome = round.use_hint(&mut rng).unwrap();

        assert_eq!(outcome, HintOutcome::VowelsRevealed(4));
        for vowel in ['I', 'O', 'A', 'U'] {
            assert!(round.is_guessed(letter(vowel)));
        }
        assert_eq!(round.remaining_turns(), 4);
        assert_eq!(round.use_hint(&mut rng), Err(GameError::NoMoreHints));
    }

    #[test]
    fn vowel_hint_can_complete_the_word() {
        let mut round = round("PIRATE");
        let mut rng = rng();
        for ch in ['P', 'R', 'T'] {
            round.guess(letter(ch)).unwrap();
        }
        round.use_hint(&mut rng).unwrap();
        round.use_hint(&mut rng).unwrap();

        assert_eq!(round.use_hint(&mut rng).unwrap(), HintOutcome::Won);
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn paid_hints_are_refused_at_one_turn_left() {
        let mut round = round("ROBOT");
        let mut rng = rng();

        for ch in ['X', 'Y', 'Z', 'Q', 'W'] {
            round.guess(letter(ch)).unwrap();
        }
        // the free tier is still allowed
        assert_eq!(round.use_hint(&mut rng).unwrap(), HintOutcome::TextRevealed);

        assert!(!round.can_use_hint());
        assert_eq!(round.use_hint(&mut rng), Err(GameError::HintsUnavailable));
        assert_eq!(round.remaining_turns(), 1);
        assert_eq!(round.hint_stage(), HintStage::TextShown);
    }

    #[test]
    fn vowel_hint_is_refused_at_one_turn_left() {
        let mut round = round("ROBOT");
        let mut rng = rng();
        round.use_hint(&mut rng).unwrap();
        round.use_hint(&mut rng).unwrap();

        for l in Letter::alphabet() {
            if round.remaining_turns() == 1 {
                break;
            }
            if !round.is_guessed(l) && !"ROBOT".contains(l.as_char()) {
                round.guess(l).unwrap();
            }
        }
        assert_eq!(round.remaining_turns(), 1);
        assert_eq!(round.hint_stage(), HintStage::LettersDisabled);
        let before = round.clone();

        assert_eq!(round.use_hint(&mut rng), Err(GameError::HintsUnavailable));
        assert_eq!(round, before);
    }

    #[test]
    fn free_hint_works_without_turns() {
        let mut round = Round::new(
            WordEntry::new("ROBOT", "test hint").unwrap(),
            GameConfig::new_unchecked(0),
        );

        assert_eq!(round.use_hint(&mut rng()).unwrap(), HintOutcome::TextRevealed);
        assert_eq!(round.remaining_turns(), 0);
    }

    #[test]
    fn snapshot_recomputes_word_letters() {
        let mut round = round("ROBOT");
        round.guess(letter('R')).unwrap();

        let value = serde_json::to_value(&round).unwrap();
        assert!(value.get("word_letters").is_none());

        let restored: Round = serde_json::from_value(value).unwrap();
        assert_eq!(restored, round);
        assert!(!restored.is_solved());
    }

    #[test]
    fn tampered_snapshots_are_rejected() {
        let round = round("ROBOT");
        let snapshot = serde_json::to_value(&round).unwrap();

        let mut too_many_turns = snapshot.clone();
        too_many_turns["remaining_turns"] = 60.into();
        assert!(serde_json::from_value::<Round>(too_many_turns).is_err());

        let mut lowercase = snapshot.clone();
        lowercase["entry"]["word"] = "robot".into();
        assert!(serde_json::from_value::<Round>(lowercase).is_err());

        let mut dead_but_playing = snapshot.clone();
        dead_but_playing["remaining_turns"] = 0.into();
        assert!(serde_json::from_value::<Round>(dead_but_playing).is_err());

        let mut solved_but_playing = snapshot;
        solved_but_playing["guessed"] = serde_json::to_value(LetterSet::all()).unwrap();
        assert!(serde_json::from_value::<Round>(solved_but_playing).is_err());
    }

    #[test]
    fn restart_resets_progress_but_keeps_word() {
        let mut round = round("TURTLE");
        round.guess(letter('T')).unwrap();
        round.guess(letter('K')).unwrap();
        round.use_hint(&mut rng()).unwrap();

        round.restart();

        assert_eq!(round.word(), "TURTLE");
        assert!(round.guessed().is_empty());
        assert_eq!(round.remaining_turns(), 6);
        assert_eq!(round.hint_stage(), HintStage::Unused);
        assert_eq!(round.state(), RoundState::Playing);
    }

    #[test]
    fn counters_stay_in_bounds_under_any_input() {
        let mut round = round("HURRICANE");
        let mut rng = rng();

        for ch in ('A'..='Z').rev() {
            let _ = round.use_hint(&mut rng);
            let _ = round.guess(letter(ch));
            assert!(round.remaining_turns() <= round.max_turns());
            assert!(round.hint_stage().index() <= 3);
        }
        assert!(round.state().is_finished());
    }
}
