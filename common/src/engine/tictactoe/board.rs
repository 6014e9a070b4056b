use crate::error::IllegalMove;

use super::types::{BOARD_CELLS, GameOutcome, Mark, WinningLine};
use super::win_detector::{check_win_with_line, has_line};

/// 3x3 grid, cells in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMove> {
        if index >= BOARD_CELLS {
            return Err(IllegalMove::OutOfBounds { index });
        }
        if mark == Mark::Empty {
            return Err(IllegalMove::EmptyMark { index });
        }
        if self.cells[index] != Mark::Empty {
            return Err(IllegalMove::CellOccupied { index });
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Clears a cell. Only the search calls this, to undo a hypothetical placement.
    pub fn remove(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Mark::Empty;
        }
    }

    pub fn is_win(&self, mark: Mark) -> bool {
        has_line(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.is_win(Mark::X) && !self.is_win(Mark::O)
    }

    /// Empty cell indices, ascending. Search tie-breaking depends on this order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X moves first and turns alternate, so the counts alone decide the turn.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.is_win(Mark::X) {
            GameOutcome::Win(Mark::X)
        } else if self.is_win(Mark::O) {
            GameOutcome::Win(Mark::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}
