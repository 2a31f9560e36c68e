use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::Win(winner);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn winners(board: &Board) -> HashSet<Mark> {
        let cells = board.cells();
        WINNING_LINES
            .iter()
            .filter(|line| {
                cells[line[0]] != Mark::Empty
                    && cells[line[0]] == cells[line[1]]
                    && cells[line[1]] == cells[line[2]]
            })
            .map(|line| cells[line[0]])
            .collect()
    }

    fn collect_reachable(board: Board, to_move: Mark, out: &mut Vec<Board>) {
        out.push(board);
        if evaluate(&board).is_terminal() {
            return;
        }
        for index in board.available_moves() {
            let mut next = board;
            next.apply(index, to_move).unwrap();
            collect_reachable(next, to_move.opponent().unwrap(), out);
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for index in line {
                b.apply(index, Mark::O).unwrap();
            }
            assert_eq!(evaluate(&b), Outcome::Win(Mark::O));
            assert_eq!(check_win_with_line(&b), Some(WinningLine::new(Mark::O, line)));
        }
    }

    #[test]
    fn test_diagonal_win_with_mixed_column() {
        let b = board("XOXOXOX..");
        assert_eq!(evaluate(&b), Outcome::Win(Mark::X));
        assert_eq!(check_win_with_line(&b).unwrap().cells, [2, 4, 6]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOXXOOOXX");
        assert_eq!(evaluate(&b), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let b = board("XXXOOXXOO");
        assert_eq!(evaluate(&b), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for s in ["XOXOXOX..", "XOXXOOOXX", "XX.OO....", "........."] {
            let b = board(s);
            let first = evaluate(&b);
            assert_eq!(evaluate(&b), first);
            assert_eq!(b, board(s));
        }
    }

    #[test]
    fn test_reachable_positions_have_at_most_one_winner() {
        let mut positions = Vec::new();
        collect_reachable(Board::new(), Mark::X, &mut positions);
        assert!(positions.len() > 5000);
        for b in positions {
            let found = winners(&b);
            assert!(found.len() <= 1, "two winners on\n{}", b);
            assert_eq!(check_win(&b), found.into_iter().next());
        }
    }
}
