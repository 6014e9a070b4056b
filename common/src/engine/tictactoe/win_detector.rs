use super::types::{BOARD_CELLS, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_line(cells: &[Mark; BOARD_CELLS], mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == mark))
}

pub fn check_win(cells: &[Mark; BOARD_CELLS]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

/// First completed line in `WINNING_LINES` order.
pub fn check_win_with_line(cells: &[Mark; BOARD_CELLS]) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let mark = cells[line[0]];
        if mark == Mark::Empty {
            continue;
        }
        if cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
