use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_common::GameError;
use tictactoe_common::log;
use tictactoe_common::tictactoe::TicTacToeGameState;

use crate::config::DisplayConfig;
use crate::input::{Command, parse_command};
use crate::render::{HELP_TEXT, describe_illegal_move, outcome_banner, render_board};

pub struct GameLoopSettings {
    pub display: DisplayConfig,
    pub show_bot_score: bool,
}

fn write_board<W: Write>(
    output: &mut W,
    state: &TicTacToeGameState,
    display: &DisplayConfig,
) -> std::io::Result<()> {
    writeln!(
        output,
        "{}",
        render_board(state.board(), state.winning_line(), display)
    )?;
    writeln!(output)
}

fn write_prompt<W: Write>(output: &mut W, state: &TicTacToeGameState) -> std::io::Result<()> {
    if state.current_outcome().is_over() {
        write!(output, "Type r to play again or q to quit: ")?;
    } else {
        write!(output, "Your move (1-9): ")?;
    }
    output.flush()
}

/// Drives one session from `input` until the player quits or input ends.
pub fn run_game_loop<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    settings: &GameLoopSettings,
) -> Result<(), Box<dyn Error>> {
    let display = &settings.display;
    let mut state = TicTacToeGameState::new();

    writeln!(
        output,
        "You are {}, the AI is {}. Type h for help.",
        display.human_symbol, display.bot_symbol
    )?;
    write_board(output, &state, display)?;
    write_prompt(output, &state)?;

    for line in input.lines() {
        let line = line?;
        writeln!(output)?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                write_prompt(output, &state)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Restart => {
                state.new_game();
                writeln!(output, "New game.")?;
                write_board(output, &state, display)?;
            }
            Command::Place(index) => match state.play_turn(index) {
                Ok(report) => {
                    if let Some(bot_move) = report.bot_move
                        && let Some(bot_index) = bot_move.index
                    {
                        write!(output, "AI played cell {}", bot_index + 1)?;
                        if settings.show_bot_score {
                            write!(output, " (score {})", bot_move.score)?;
                        }
                        writeln!(output, ".")?;
                    }
                    write_board(output, &state, display)?;
                    if let Some(banner) = outcome_banner(report.outcome, display) {
                        log!("Game finished: {}", report.outcome);
                        writeln!(output, "{}", banner)?;
                    }
                }
                Err(GameError::IllegalMove(err)) => {
                    writeln!(output, "{}", describe_illegal_move(&err))?;
                }
                Err(err) => return Err(err.into()),
            },
        }

        write_prompt(output, &state)?;
    }

    writeln!(output)?;
    Ok(())
}
