mod config;
mod game_loop;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::{log, logger};

use config::get_config_manager;
use game_loop::{GameLoopSettings, run_game_loop};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against an unbeatable AI")]
struct Args {
    /// YAML config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log game events to stderr
    #[arg(long)]
    verbose: bool,

    /// Print the search score of every AI move
    #[arg(long)]
    show_score: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    if args.verbose {
        logger::init_logger(config.log_prefix.clone());
    }
    log!("Starting tic-tac-toe client");

    let settings = GameLoopSettings {
        display: config.display,
        show_bot_score: args.show_score || config.show_bot_score,
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_game_loop(stdin.lock(), &mut stdout, &settings)?;

    log!("Client exited");
    Ok(())
}
