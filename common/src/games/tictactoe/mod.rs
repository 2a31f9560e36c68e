mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIZE, Board, get_available_moves};
pub use bot_controller::{BotInput, calculate_minimax_move, score_moves};
pub use game_state::{GameSession, Move, Side, TurnState};
pub use settings::{FirstPlayerMode, SymbolAssignment};
pub use types::{Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
