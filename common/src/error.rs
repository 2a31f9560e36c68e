use thiserror::Error;

use crate::games::tictactoe::BOARD_CELLS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveReason),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl GameError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("cell {index} is out of range 0..{}", BOARD_CELLS)]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cannot place an empty mark")]
    EmptyMark,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::from(InvalidMoveReason::Occupied { index: 4 });
        assert_eq!(err.to_string(), "invalid move: cell 4 is already occupied");

        let err = GameError::from(InvalidMoveReason::OutOfRange { index: 9 });
        assert_eq!(err.to_string(), "invalid move: cell 9 is out of range 0..9");

        let err = GameError::invalid_configuration("symbols must differ");
        assert_eq!(err.to_string(), "invalid configuration: symbols must differ");
    }
}
