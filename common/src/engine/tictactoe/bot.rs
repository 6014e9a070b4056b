use super::board::Board;
use super::types::{Mark, SearchMove};

const WIN_SCORE: i32 = 10;

/// Exhaustive minimax over every legal continuation of `board`.
///
/// Wins score `10 - depth` and losses `depth - 10`, so faster wins rank higher
/// and unavoidable losses are pushed as deep as possible. Candidates are tried
/// in ascending cell order and only a strictly better score replaces the
/// current pick, so ties go to the lowest index.
///
/// The board is mutated while searching and restored before returning.
pub fn best_move(
    board: &mut Board,
    depth: i32,
    maximizing_mark: Mark,
    minimizing_mark: Mark,
    is_maximizing: bool,
) -> SearchMove {
    debug_assert!(
        !maximizing_mark.is_empty()
            && !minimizing_mark.is_empty()
            && maximizing_mark != minimizing_mark,
        "search needs two distinct player marks"
    );

    if board.is_win(maximizing_mark) {
        return SearchMove::terminal(WIN_SCORE - depth);
    }
    if board.is_win(minimizing_mark) {
        return SearchMove::terminal(depth - WIN_SCORE);
    }

    let available_cells = board.available_cells();
    if available_cells.is_empty() {
        return SearchMove::terminal(0);
    }

    let mark = if is_maximizing {
        maximizing_mark
    } else {
        minimizing_mark
    };

    let mut best: Option<SearchMove> = None;

    for index in available_cells {
        // Only an empty mark can be rejected here.
        if board.place(index, mark).is_err() {
            continue;
        }

        let score = best_move(
            board,
            depth + 1,
            maximizing_mark,
            minimizing_mark,
            !is_maximizing,
        )
        .score;

        board.remove(index);

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(SearchMove::new(index, score));
        }
    }

    best.unwrap_or(SearchMove::terminal(0))
}

/// Picks the move for `bot_mark` on a private copy of `board`.
///
/// Returns `None` when the board is already decided or `bot_mark` is empty.
pub fn calculate_move(board: &Board, bot_mark: Mark) -> Option<SearchMove> {
    let opponent_mark = bot_mark.opponent()?;

    let mut scratch = *board;
    let search_move = best_move(&mut scratch, 0, bot_mark, opponent_mark, true);

    search_move.index.map(|_| search_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::GameOutcome;
    use crate::engine::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_picks_first_cell() {
        let mut board = Board::new();

        let result = best_move(&mut board, 0, X, O, true);

        assert_eq!(result, SearchMove::new(0, 0));
    }

    #[test]
    fn test_minimizing_side_blocks_immediate_threat() {
        let mut board = Board::from_cells([X, X, E, E, O, E, E, E, E]);

        let result = best_move(&mut board, 0, X, O, false);

        assert_eq!(result.index, Some(2));
    }

    #[test]
    fn test_maximizing_side_blocks_immediate_threat() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);

        let result = calculate_move(&board, O).unwrap();

        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_immediate_win_beats_block() {
        let board = Board::from_cells([X, X, E, O, O, E, X, E, E]);

        let result = calculate_move(&board, O).unwrap();

        assert_eq!(result, SearchMove::new(5, 9));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let original = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        let mut board = original;

        best_move(&mut board, 0, O, X, true);

        assert_eq!(board, original);
    }

    #[test]
    fn test_terminal_scores_depend_on_depth() {
        let mut won = Board::from_cells([O, O, O, X, X, E, X, E, E]);
        let mut lost = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let mut drawn = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert_eq!(best_move(&mut won, 3, O, X, true), SearchMove::terminal(7));
        assert_eq!(best_move(&mut lost, 3, O, X, true), SearchMove::terminal(-7));
        assert_eq!(best_move(&mut drawn, 5, O, X, false), SearchMove::terminal(0));
    }

    #[test]
    fn test_faster_win_is_preferred() {
        // Cell 1 forks (win two plies later), cell 8 wins at once.
        let board = Board::from_cells([O, E, E, X, O, X, E, X, E]);

        let result = calculate_move(&board, O).unwrap();

        assert_eq!(result, SearchMove::new(8, 9));
    }

    #[test]
    fn test_lost_position_delays_the_loss() {
        // Every reply loses, but blocking the diagonal on 8 holds out two more plies.
        let board = Board::from_cells([X, O, E, E, X, E, E, E, E]);

        let result = calculate_move(&board, O).unwrap();

        assert_eq!(result, SearchMove::new(8, -6));
    }

    #[test]
    fn test_double_threat_loses_at_next_ply() {
        let board = Board::from_cells([X, X, E, X, O, E, E, E, O]);

        let result = calculate_move(&board, O).unwrap();

        assert_eq!(result, SearchMove::new(2, -8));
    }

    #[test]
    fn test_calculate_move_on_finished_board_is_none() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);

        assert_eq!(calculate_move(&board, O), None);
    }

    #[test]
    fn test_calculate_move_without_player_mark_is_none() {
        let board = Board::new();

        assert_eq!(calculate_move(&board, E), None);
    }

    #[test]
    fn test_self_play_from_empty_board_is_draw() {
        let mut board = Board::new();

        while board.outcome() == GameOutcome::InProgress {
            let mark = board.next_mark();
            let index = calculate_move(&board, mark).unwrap().index.unwrap();
            board.place(index, mark).unwrap();
        }

        assert_eq!(board.outcome(), GameOutcome::Draw);
    }
}
