use common::games::tictactoe::{BOARD_CELLS, BOARD_SIZE, Mark, Outcome, SymbolAssignment, WinningLine};

pub const HELP_TEXT: &str = "\
Commands:
  1-9  place your mark (cells are numbered left to right, top to bottom)
  r    reset the game
  h    show this help
  q    quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "reset" => return Ok(Command::Reset),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    match line.parse::<usize>() {
        Ok(cell @ 1..=BOARD_CELLS) => Ok(Command::Place(cell - 1)),
        Ok(_) => Err(format!("Cell must be between 1 and {}", BOARD_CELLS)),
        Err(_) => Err(format!("Unknown command '{}'. Type 'h' for help.", line)),
    }
}

pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Empty cells show their 1-based number; winning cells are bracketed.
pub fn render_board(cells: &[Mark; BOARD_CELLS], winning_line: Option<WinningLine>) -> String {
    let rows: Vec<String> = cells
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    match mark {
                        Mark::Empty => format!(" {} ", index + 1),
                        _ if winning_line.is_some_and(|line| line.contains(index)) => {
                            format!("[{}]", mark)
                        }
                        _ => format!(" {} ", mark),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: Outcome, symbols: SymbolAssignment) -> &'static str {
    match outcome {
        Outcome::Win(mark) if mark == symbols.player => "You win!",
        Outcome::Win(_) => "Computer wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::InProgress => "Game in progress.",
    }
}
