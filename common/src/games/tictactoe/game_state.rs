use crate::error::{GameError, InvalidMoveReason};
use crate::log;
use super::board::{BOARD_CELLS, Board};
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::settings::SymbolAssignment;
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPlayerMove,
    ComputerThinking,
    GameOver(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
    pub side: Side,
}

/// One game against the computer. Owns the only authoritative board; every
/// mutation goes through `submit_player_move`, `play_computer_move` or `reset`.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    symbols: SymbolAssignment,
    state: TurnState,
    last_move: Option<Move>,
}

impl GameSession {
    pub fn new(symbols: SymbolAssignment, player_goes_first: bool) -> Self {
        let session = Self {
            board: Board::new(),
            symbols,
            state: initial_state(player_goes_first),
            last_move: None,
        };
        log!(
            "Session started: player {}, computer {}, {} moves first",
            symbols.player,
            symbols.ai,
            if player_goes_first { "player" } else { "computer" }
        );
        session
    }

    pub fn start_session(player_symbol: Mark, player_goes_first: bool) -> Result<Self, GameError> {
        let symbols = SymbolAssignment::for_player(player_symbol)?;
        Ok(Self::new(symbols, player_goes_first))
    }

    pub fn submit_player_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        if self.state != TurnState::AwaitingPlayerMove {
            return Err(InvalidMoveReason::NotPlayerTurn.into());
        }

        self.board.apply(index, self.symbols.player)?;
        self.last_move = Some(Move {
            index,
            mark: self.symbols.player,
            side: Side::Player,
        });

        Ok(self.advance(TurnState::ComputerThinking))
    }

    /// Runs the search to completion and applies its move. The front end
    /// decides when to call this; the core adds no delay.
    pub fn play_computer_move(&mut self) -> Result<Outcome, GameError> {
        if self.state != TurnState::ComputerThinking {
            return Err(InvalidMoveReason::NotComputerTurn.into());
        }

        let Some(index) = calculate_minimax_move(&BotInput::from_session(self)) else {
            return Ok(self.advance(TurnState::AwaitingPlayerMove));
        };

        self.board.apply(index, self.symbols.ai)?;
        self.last_move = Some(Move {
            index,
            mark: self.symbols.ai,
            side: Side::Computer,
        });
        log!("Computer played {} at cell {}", self.symbols.ai, index);

        Ok(self.advance(TurnState::AwaitingPlayerMove))
    }

    pub fn reset(&mut self, player_goes_first: bool) {
        self.board = Board::new();
        self.state = initial_state(player_goes_first);
        self.last_move = None;
        log!(
            "Session reset, {} moves first",
            if player_goes_first { "player" } else { "computer" }
        );
    }

    pub fn current_board(&self) -> [Mark; BOARD_CELLS] {
        self.board.cells()
    }

    pub fn current_outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn symbols(&self) -> SymbolAssignment {
        self.symbols
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    fn advance(&mut self, next: TurnState) -> Outcome {
        let outcome = evaluate(&self.board);
        self.state = if outcome.is_terminal() {
            log!("Game over: {:?}", outcome);
            TurnState::GameOver(outcome)
        } else {
            next
        };
        outcome
    }
}

fn initial_state(player_goes_first: bool) -> TurnState {
    if player_goes_first {
        TurnState::AwaitingPlayerMove
    } else {
        TurnState::ComputerThinking
    }
}
