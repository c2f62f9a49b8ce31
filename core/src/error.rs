use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not a letter: {0:?}")]
    InvalidLetter(char),
    #[error("Words must be non-empty and use only the letters A to Z")]
    InvalidWord,
    #[error("Word table must not be empty")]
    EmptyWordTable,
    #[error("Round already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Hints not available! (1 hp left)")]
    HintsUnavailable,
    #[error("No more hints available!")]
    NoMoreHints,
    #[error("Saved game does not describe a reachable state")]
    InvalidSnapshot,
}

pub type Result<T> = core::result::Result<T, GameError>;
