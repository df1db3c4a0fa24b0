//! Error types for the validating boundary layer.
//!
//! The pure engines (`grid`, `search`, `lottery` scoring) treat malformed
//! input as a programming error and assert. Everything that accepts player
//! input (`session`, `chests`, card construction, config loading) returns
//! `Result<T>` with an `ArcadeError`.

use thiserror::Error;

use super::amount::Amount;

pub type Result<T> = std::result::Result<T, ArcadeError>;

#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("Match is already finished")]
    MatchFinished,

    #[error("It is not this side's turn")]
    NotYourTurn,

    #[error("Unsupported board size: {0}")]
    UnsupportedBoardSize(usize),

    #[error("Card needs exactly {expected} numbers, got {actual}")]
    WrongPickCount { expected: usize, actual: usize },

    #[error("Number {0} was picked more than once")]
    DuplicatePick(u8),

    #[error("Number {0} is outside the draw pool")]
    PickOutOfRange(u8),

    #[error("Unsupported bet amount: {0}")]
    UnsupportedBet(Amount),

    #[error("Unknown chest id: {0}")]
    UnknownChest(u8),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ArcadeError::OutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(err.to_string(), "Cell (3, 0) is outside a 3x3 board");

        let err = ArcadeError::WrongPickCount { expected: 24, actual: 23 };
        assert_eq!(err.to_string(), "Card needs exactly 24 numbers, got 23");

        let err = ArcadeError::UnsupportedBet(Amount::from_coins(0.3));
        assert_eq!(err.to_string(), "Unsupported bet amount: 0.3");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ArcadeError = json_err.into();
        assert!(matches!(err, ArcadeError::Config(_)));
    }
}
