mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::{best_move, calculate_move};
pub use game_state::{TicTacToeGameState, TurnReport};
pub use types::{BOARD_CELLS, GameOutcome, Mark, SearchMove, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
