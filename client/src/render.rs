use tictactoe_common::IllegalMove;
use tictactoe_common::tictactoe::{Board, GameOutcome, Mark, WinningLine};

use crate::config::DisplayConfig;

pub const HELP_TEXT: &str = "\
Cells are numbered left to right, top to bottom:
 1 | 2 | 3
 4 | 5 | 6
 7 | 8 | 9
Type a number to play there, r to restart, h for this help, q to quit.";

fn symbol(mark: Mark, display: &DisplayConfig) -> char {
    match mark {
        Mark::X => display.human_symbol,
        Mark::O => display.bot_symbol,
        Mark::Empty => display.empty_symbol,
    }
}

/// Cells of the winning line, if any, are drawn in brackets.
pub fn render_board(
    board: &Board,
    winning_line: Option<WinningLine>,
    display: &DisplayConfig,
) -> String {
    let cells: Vec<String> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, &mark)| {
            let symbol = symbol(mark, display);
            match winning_line {
                Some(line) if line.contains(index) => format!("[{}]", symbol),
                _ => format!(" {} ", symbol),
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// End-of-game banner, `None` while the game is still running.
pub fn outcome_banner(outcome: GameOutcome, display: &DisplayConfig) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Win(Mark::O) => Some("Hey AI Wins!".to_string()),
        GameOutcome::Win(mark) => Some(format!("Hey {} Wins!", symbol(mark, display))),
        GameOutcome::Draw => Some("It's a Draw!".to_string()),
    }
}

/// Same as the library message but with the 1-based cell numbers the player typed.
pub fn describe_illegal_move(err: &IllegalMove) -> String {
    match err {
        IllegalMove::OutOfBounds { index } => format!("Cell {} does not exist.", index + 1),
        IllegalMove::CellOccupied { index } => format!("Cell {} is already taken.", index + 1),
        IllegalMove::EmptyMark { index } => format!("Cannot clear cell {}.", index + 1),
        IllegalMove::GameOver => "The game is over, type r to play again.".to_string(),
        IllegalMove::NotYourTurn { .. } => "Wait for the AI to move.".to_string(),
    }
}
