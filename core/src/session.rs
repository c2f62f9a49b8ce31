use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Whole play session: cycles through the word table, restarting a lost word and moving on after a win.
///
/// The round held here is always [`RoundState::Playing`] between calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    words: WordTable,
    config: GameConfig,
    word_index: usize,
    round: Round,
}

impl GameState {
    pub fn new(words: WordTable, config: GameConfig) -> Self {
        Self::starting_at(words, config, 0)
    }

    /// `index` wraps around the table length.
    pub fn starting_at(words: WordTable, config: GameConfig, index: usize) -> Self {
        let word_index = words.wrap(index);
        let round = Round::new(words.entry(word_index).clone(), config);
        log::debug!("session starts at word {}", word_index);
        Self {
            words,
            config,
            word_index,
            round,
        }
    }

    pub fn words(&self) -> &WordTable {
        &self.words
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn view(&self) -> RoundView<'_> {
        RoundView::new(&self.round)
    }

    pub fn guess(&mut self, letter: Letter) -> Result<Report<GuessOutcome>> {
        let turns_before = self.round.remaining_turns();
        let outcome = self.round.guess(letter)?;
        let notice = self.settle(turns_before);
        Ok(Report { outcome, notice })
    }

    /// Same as [`GameState::guess`], for raw key or button input.
    pub fn guess_char(&mut self, ch: char) -> Result<Report<GuessOutcome>> {
        self.guess(Letter::try_from(ch)?)
    }

    pub fn use_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Report<HintOutcome>> {
        let turns_before = self.round.remaining_turns();
        let outcome = self.round.use_hint(rng)?;
        let notice = self.settle(turns_before);
        Ok(Report { outcome, notice })
    }

    /// Fresh round on the same word.
    pub fn restart(&mut self) {
        log::debug!("restarting word {}", self.word_index);
        self.round.restart();
    }

    /// Fresh round on the next word in the table.
    pub fn advance(&mut self) {
        self.word_index = self.words.next_index(self.word_index);
        self.round = Round::new(self.words.entry(self.word_index).clone(), self.config);
        log::debug!("advanced to word {}", self.word_index);
    }

    fn settle(&mut self, turns_before: Turns) -> Option<Notice> {
        match self.round.state() {
            RoundState::Lost => {
                log::info!("lost on word {}", self.word_index);
                self.restart();
                Some(Notice::Lost)
            }
            RoundState::Won => {
                log::info!(
                    "solved word {} with {} turns left",
                    self.word_index,
                    self.round.remaining_turns()
                );
                self.advance();
                Some(Notice::GuessedRight)
            }
            RoundState::Playing if self.round.remaining_turns() == 1 && turns_before != 1 => {
                Some(Notice::AboutToLose)
            }
            RoundState::Playing => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(WordTable::builtin(), GameConfig::default())
    }
}

#[derive(Deserialize)]
struct RawGameState {
    words: WordTable,
    config: GameConfig,
    word_index: usize,
    round: Round,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let word_index = raw.words.wrap(raw.word_index);
        if raw.round.entry() != raw.words.entry(word_index)
            || raw.round.max_turns() != raw.config.max_turns
            || !raw.round.state().is_playing()
        {
            return Err(GameError::InvalidSnapshot);
        }
        Ok(Self {
            words: raw.words,
            config: raw.config,
            word_index,
            round: raw.round,
        })
    }
}
