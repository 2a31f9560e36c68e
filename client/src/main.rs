mod config;
mod runner;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, Mark};
use common::logger::{self, LogSink};
use common::log;

use config::get_config_manager;
use runner::TerminalRunner;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Player,
    Computer,
    Random,
    Ask,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(value: FirstArg) -> Self {
        match value {
            FirstArg::Player => FirstPlayerMode::Player,
            FirstArg::Computer => FirstPlayerMode::Computer,
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::Ask => FirstPlayerMode::Ask,
        }
    }
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    match value.trim() {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        other => Err(format!("mark must be X or O, got '{}'", other)),
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Your symbol (X always moves first when you go first as X)
    #[arg(long, value_parser = parse_mark)]
    mark: Option<Mark>,

    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Delay before the computer's reply, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(mark) = args.mark {
        config.player_mark = mark;
    }
    if let Some(first) = args.first {
        config.first_player = first.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.bot_move_delay_ms = delay_ms;
    }
    if args.log_file.is_some() {
        config.log_file = args.log_file.clone();
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
    }

    if let Some(ref log_file) = config.log_file {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix, LogSink::append_to_file(Path::new(log_file))?);
    }

    log!("Client started with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    TerminalRunner::new(stdin.lock(), stdout.lock(), config).run()?;

    log!("Client exited");
    Ok(())
}
