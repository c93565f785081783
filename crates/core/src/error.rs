use thiserror::Error;

/// Recoverable game errors.
///
/// None of these are fatal: the controller reports them from its checked
/// primitives and the interactive paths ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("pair count {requested} is outside {min}..={max}")]
    PairCountOutOfBounds {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("card {index} does not exist (deck has {len} cards)")]
    CardOutOfRange { index: usize, len: usize },
}

pub type GameResult<T> = Result<T, GameError>;
