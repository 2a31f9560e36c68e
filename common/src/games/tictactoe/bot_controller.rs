use super::board::Board;
use super::game_state::GameSession;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub player_mark: Mark,
}

impl BotInput {
    pub fn from_session(session: &GameSession) -> Self {
        let symbols = session.symbols();
        Self {
            board: session.board().clone_for_lookahead(),
            bot_mark: symbols.ai,
            player_mark: symbols.player,
        }
    }
}

/// Best cell for the bot, or `None` when the board has no empty cell.
///
/// Candidates are scanned in ascending index order and only a strictly
/// greater score replaces the current best, so equal scores resolve to the
/// lowest index. That tie-break is a scan-order artefact kept for
/// reproducibility, not a positional preference.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in score_moves(input) {
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exact minimax score of every empty cell, in ascending index order.
pub fn score_moves(input: &BotInput) -> Vec<(usize, i32)> {
    let mut board = input.board.clone_for_lookahead();
    let available_moves = board.available_moves();
    let mut scores = Vec::with_capacity(available_moves.len());

    for index in available_moves {
        board.place(index, input.bot_mark);

        let score = minimax(
            &mut board,
            0,
            false,
            input.bot_mark,
            input.player_mark,
            i32::MIN,
            i32::MAX,
        );

        board.clear(index);
        scores.push((index, score));
    }

    scores
}

fn terminal_score(outcome: Outcome, bot_mark: Mark, depth: usize) -> Option<i32> {
    match outcome {
        Outcome::Win(winner) if winner == bot_mark => Some(WIN_SCORE - depth as i32),
        Outcome::Win(_) => Some(depth as i32 - WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    bot_mark: Mark,
    player_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), bot_mark, depth) {
        return score;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.place(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, player_mark, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.place(index, player_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, player_mark, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
