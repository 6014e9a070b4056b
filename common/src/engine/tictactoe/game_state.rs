use crate::error::{GameError, IllegalMove};

use super::board::Board;
use super::bot::calculate_move;
use super::types::{GameOutcome, Mark, SearchMove, WinningLine};

const HUMAN_MARK: Mark = Mark::X;
const BOT_MARK: Mark = Mark::O;

/// What one human click produced: the human placement and, if the game was
/// still open afterwards, the automated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human_index: usize,
    pub bot_move: Option<SearchMove>,
    pub outcome: GameOutcome,
}

/// One game session, owned by whatever presents it.
///
/// The turn is never stored: it is derived from the mark counts on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    last_search: Option<SearchMove>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            last_search: None,
        }
    }

    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.last_search = None;
        crate::log!("New game, {} moves first", HUMAN_MARK);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_mark(&self) -> Mark {
        self.board.next_mark()
    }

    pub fn last_search(&self) -> Option<SearchMove> {
        self.last_search
    }

    pub fn current_outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn human_move(&mut self, index: usize) -> Result<GameOutcome, GameError> {
        if self.current_outcome().is_over() {
            return Err(IllegalMove::GameOver.into());
        }

        let expected = self.next_mark();
        if expected != HUMAN_MARK {
            return Err(IllegalMove::NotYourTurn { expected }.into());
        }

        self.board.place(index, HUMAN_MARK)?;

        let outcome = self.current_outcome();
        crate::log!("{} played cell {}, {}", HUMAN_MARK, index, outcome);
        Ok(outcome)
    }

    pub fn automated_move(&mut self) -> Result<(GameOutcome, usize), GameError> {
        let outcome = self.current_outcome();
        if outcome.is_over() {
            return Err(invariant_violation(format!(
                "automated move requested on a finished game ({})",
                outcome
            )));
        }

        let expected = self.next_mark();
        if expected != BOT_MARK {
            return Err(invariant_violation(format!(
                "automated move requested while {} is to move",
                expected
            )));
        }

        let Some(search_move) = calculate_move(&self.board, BOT_MARK) else {
            return Err(invariant_violation(
                "search found no move on an open board".to_string(),
            ));
        };
        let Some(index) = search_move.index else {
            return Err(invariant_violation(
                "search returned a terminal result on an open board".to_string(),
            ));
        };

        self.board.place(index, BOT_MARK).map_err(|err| {
            invariant_violation(format!("search chose an illegal cell: {}", err))
        })?;
        self.last_search = Some(search_move);

        let outcome = self.current_outcome();
        crate::log!(
            "{} played cell {} (score {}), {}",
            BOT_MARK,
            index,
            search_move.score,
            outcome
        );
        Ok((outcome, index))
    }

    /// Human move followed by the automated reply when the game is still open.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnReport, GameError> {
        let outcome = self.human_move(index)?;
        if outcome.is_over() {
            return Ok(TurnReport {
                human_index: index,
                bot_move: None,
                outcome,
            });
        }

        let (outcome, _) = self.automated_move()?;
        Ok(TurnReport {
            human_index: index,
            bot_move: self.last_search,
            outcome,
        })
    }
}

/// Panics in debug builds; release builds get the error and an untouched board.
fn invariant_violation(message: String) -> GameError {
    if cfg!(debug_assertions) {
        panic!("invariant violation: {}", message);
    }
    crate::log!("Invariant violation: {}", message);
    GameError::InvariantViolation(message)
}
