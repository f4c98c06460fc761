//! Win detection over board lines.

use crate::board::{Board, Cell, Side, WIDTH};
use tracing::instrument;

/// Returns the first fully matching line in scan order, if any, as the
/// winning side and the indices it occupies.
///
/// Scan order is rows, then columns, then the main diagonal, then the
/// anti-diagonal. Index formulas generalize over the board width: row
/// `r` holds `r*N + c`, the main diagonal `i*(N+1)`, and the
/// anti-diagonal `i*N + (N-1-i)`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Side, [usize; WIDTH])> {
    for row in 0..WIDTH {
        let line = std::array::from_fn(|col| row * WIDTH + col);
        if let Some(side) = line_owner(board, line) {
            return Some((side, line));
        }
    }
    for col in 0..WIDTH {
        let line = std::array::from_fn(|row| row * WIDTH + col);
        if let Some(side) = line_owner(board, line) {
            return Some((side, line));
        }
    }
    let main = std::array::from_fn(|i| i * (WIDTH + 1));
    if let Some(side) = line_owner(board, main) {
        return Some((side, main));
    }
    let anti = std::array::from_fn(|i| i * WIDTH + (WIDTH - 1 - i));
    if let Some(side) = line_owner(board, anti) {
        return Some((side, anti));
    }
    None
}

/// The side occupying every cell of `line`, if the line is complete.
fn line_owner(board: &Board, line: [usize; WIDTH]) -> Option<Side> {
    let first = match board.get(line[0])? {
        Cell::Occupied(side) => side,
        Cell::Empty => return None,
    };
    line[1..]
        .iter()
        .all(|&index| board.get(index) == Some(Cell::Occupied(first)))
        .then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Side)]) -> Board {
        let mut board = Board::new();
        for &(index, side) in marks {
            board.place(index, side).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_middle_row() {
        let board = board_with(&[
            (3, Side::Player),
            (0, Side::Computer),
            (4, Side::Player),
            (1, Side::Computer),
            (5, Side::Player),
        ]);
        assert_eq!(winning_line(&board), Some((Side::Player, [3, 4, 5])));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (1, Side::Player),
            (0, Side::Computer),
            (4, Side::Player),
            (2, Side::Computer),
            (7, Side::Player),
        ]);
        assert_eq!(winning_line(&board), Some((Side::Player, [1, 4, 7])));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_with(&[
            (0, Side::Computer),
            (1, Side::Player),
            (4, Side::Computer),
            (2, Side::Player),
            (8, Side::Computer),
        ]);
        assert_eq!(winning_line(&board), Some((Side::Computer, [0, 4, 8])));
    }

    #[test]
    fn test_winner_anti_diagonal_canonical_indices() {
        let board = board_with(&[
            (2, Side::Player),
            (0, Side::Computer),
            (4, Side::Player),
            (1, Side::Computer),
            (6, Side::Player),
        ]);
        assert_eq!(winning_line(&board), Some((Side::Player, [2, 4, 6])));
    }

    #[test]
    fn test_rows_scan_before_columns() {
        // The final move at 0 completes row 0 and column 0 at once;
        // the row is reported because rows scan first.
        let board = board_with(&[
            (1, Side::Player),
            (4, Side::Computer),
            (2, Side::Player),
            (5, Side::Computer),
            (3, Side::Player),
            (7, Side::Computer),
            (6, Side::Player),
            (8, Side::Computer),
            (0, Side::Player),
        ]);
        assert_eq!(winning_line(&board), Some((Side::Player, [0, 1, 2])));
    }

    #[test]
    fn test_incomplete_line_no_winner() {
        let board = board_with(&[(0, Side::Player), (4, Side::Computer), (1, Side::Player)]);
        assert_eq!(winning_line(&board), None);
    }
}
