use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, InvalidMoveReason};
use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid stored row-major: row = index / 3, column = index % 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn cells(&self) -> [Mark; BOARD_CELLS] {
        self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty {
            return Err(InvalidMoveReason::EmptyMark.into());
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMoveReason::OutOfRange { index })?;
        if *cell != Mark::Empty {
            return Err(InvalidMoveReason::Occupied { index }.into());
        }
        *cell = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Independent copy for speculative search. Changes to it never reach `self`.
    pub fn clone_for_lookahead(&self) -> Board {
        *self
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }

    // Unchecked place/undo pair for search on a lookahead copy.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

pub fn get_available_moves(cells: &[Mark]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '\n' && *c != '|').collect();
        if chars.len() != BOARD_CELLS {
            return Err(GameError::invalid_configuration(format!(
                "board must have {} cells, got {} in '{}'",
                BOARD_CELLS,
                chars.len(),
                s
            )));
        }

        let mut cells = [Mark::Empty; BOARD_CELLS];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i] = Mark::from_char(c).ok_or_else(|| {
                GameError::invalid_configuration(format!(
                    "invalid character '{}' at position {} in '{}'",
                    c, i, s
                ))
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&c| c == Mark::Empty));
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_apply_sets_only_target_cell() {
        let mut board = Board::new();
        board.apply(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.cells().iter().filter(|&&c| c != Mark::Empty).count(), 1);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        let before = board;
        let result = board.apply(0, Mark::O);
        assert_eq!(
            result,
            Err(GameError::InvalidMove(InvalidMoveReason::Occupied { index: 0 }))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.apply(9, Mark::X),
            Err(GameError::InvalidMove(InvalidMoveReason::OutOfRange { index: 9 }))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_rejects_empty_mark() {
        let mut board = Board::new();
        assert_eq!(
            board.apply(3, Mark::Empty),
            Err(GameError::InvalidMove(InvalidMoveReason::EmptyMark))
        );
    }

    #[test]
    fn test_is_full() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_lookahead_copy_is_independent() {
        let board: Board = "X...O....".parse().unwrap();
        let mut copy = board.clone_for_lookahead();
        copy.apply(8, Mark::X).unwrap();
        assert_eq!(board.get(8), Some(Mark::Empty));
        assert_eq!(copy.get(8), Some(Mark::X));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
        assert!("XX".parse::<Board>().is_err());
        assert!("XX?OO....".parse::<Board>().is_err());
    }
}
