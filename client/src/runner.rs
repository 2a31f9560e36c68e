use std::error::Error;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::tictactoe::{GameSession, SymbolAssignment, TurnState};
use common::log;

use crate::config::ClientConfig;
use crate::ui::{Command, HELP_TEXT, outcome_message, parse_command, parse_yes_no, render_board};

pub struct TerminalRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: ClientConfig,
}

impl<R: BufRead, W: Write> TerminalRunner<R, W> {
    pub fn new(input: R, output: W, config: ClientConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays games until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let symbols = SymbolAssignment::for_player(self.config.player_mark)?;

        writeln!(self.output, "Tic-Tac-Toe AI")?;
        writeln!(
            self.output,
            "You are {}. Enter a cell number (1-9) to move, 'h' for help.",
            symbols.player
        )?;

        let Some(player_goes_first) = self.choose_first_player(symbols)? else {
            return Ok(());
        };
        let mut session = GameSession::new(symbols, player_goes_first);

        loop {
            match session.turn_state() {
                TurnState::ComputerThinking => {
                    self.show_board(&session)?;
                    writeln!(self.output, "Computer is thinking...")?;
                    self.output.flush()?;
                    if self.config.bot_move_delay_ms > 0 {
                        thread::sleep(Duration::from_millis(self.config.bot_move_delay_ms));
                    }
                    session.play_computer_move()?;
                }
                TurnState::AwaitingPlayerMove => {
                    self.show_board(&session)?;
                    let prompt = format!("Your move ({}): ", symbols.player);
                    let Some(line) = self.prompt(&prompt)? else {
                        return Ok(());
                    };

                    match parse_command(&line) {
                        Ok(Command::Place(index)) => {
                            if let Err(e) = session.submit_player_move(index) {
                                writeln!(self.output, "{}", e)?;
                            }
                        }
                        Ok(Command::Reset) => {
                            let Some(first) = self.choose_first_player(symbols)? else {
                                return Ok(());
                            };
                            session.reset(first);
                        }
                        Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                        Ok(Command::Quit) => return Ok(()),
                        Err(message) => writeln!(self.output, "{}", message)?,
                    }
                }
                TurnState::GameOver(outcome) => {
                    self.show_board(&session)?;
                    writeln!(self.output, "Game over: {}", outcome_message(outcome, symbols))?;

                    if self.ask_yes_no("Play again? (y/n) ")? != Some(true) {
                        return Ok(());
                    }
                    let Some(first) = self.choose_first_player(symbols)? else {
                        return Ok(());
                    };
                    session.reset(first);
                }
            }
        }
    }

    fn choose_first_player(&mut self, symbols: SymbolAssignment) -> Result<Option<bool>, Box<dyn Error>> {
        if let Some(first) = self.config.first_player.resolve(&mut rand::rng()) {
            log!("First player resolved from {:?}: player first = {}", self.config.first_player, first);
            return Ok(Some(first));
        }
        let question = format!("Do you want to go first as {}? (y/n) ", symbols.player);
        self.ask_yes_no(&question)
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<Option<bool>, Box<dyn Error>> {
        loop {
            let Some(line) = self.prompt(question)? else {
                return Ok(None);
            };
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Please answer 'y' or 'n'.")?;
        }
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_board(&mut self, session: &GameSession) -> Result<(), Box<dyn Error>> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            render_board(&session.current_board(), session.winning_line())
        )?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{FirstPlayerMode, Mark};

    fn config(player_mark: Mark, first_player: FirstPlayerMode) -> ClientConfig {
        ClientConfig {
            player_mark,
            first_player,
            bot_move_delay_ms: 0,
            log_file: None,
        }
    }

    fn run_script(config: ClientConfig, script: &str) -> String {
        let mut output = Vec::new();
        TerminalRunner::new(script.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_player_move_then_computer_reply() {
        let output = run_script(config(Mark::X, FirstPlayerMode::Player), "5\nq\n");
        assert!(output.contains("Computer is thinking..."));
        assert!(output.contains(" O | 2 | 3 \n---+---+---\n 4 | X | 6 "));
    }

    #[test]
    fn test_bad_input_is_reported_and_reprompted() {
        let output = run_script(config(Mark::X, FirstPlayerMode::Player), "abc\n0\n5\n5\nq\n");
        assert!(output.contains("Unknown command 'abc'"));
        assert!(output.contains("Cell must be between 1 and 9"));
        assert!(output.contains("invalid move: cell 4 is already occupied"));
    }

    #[test]
    fn test_computer_wins_scripted_game() {
        // Computer opens in the corner; answering on the adjacent edge loses.
        let output = run_script(config(Mark::O, FirstPlayerMode::Computer), "2\n3\nn\n");
        assert!(output.contains("Game over: Computer wins!"));
        assert!(output.contains("[X]| O | O "));
        assert!(output.contains("Play again? (y/n) "));
    }

    #[test]
    fn test_ask_mode_prompts_until_answered() {
        let output = run_script(config(Mark::X, FirstPlayerMode::Ask), "maybe\ny\nq\n");
        assert!(output.contains("Do you want to go first as X? (y/n) "));
        assert!(output.contains("Please answer 'y' or 'n'."));
        assert!(!output.contains("Computer is thinking..."));
    }

    #[test]
    fn test_reset_clears_board() {
        let output = run_script(config(Mark::X, FirstPlayerMode::Player), "5\nr\nq\n");
        let last_board = output.rsplit("Computer is thinking...").next().unwrap();
        assert!(last_board.contains(" 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 "));
    }

    #[test]
    fn test_help_and_end_of_input() {
        let output = run_script(config(Mark::X, FirstPlayerMode::Player), "h\n");
        assert!(output.contains("Commands:"));
        assert!(output.ends_with("Your move (X): \n"));
    }
}
