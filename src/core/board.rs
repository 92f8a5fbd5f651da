//! Board contents.
//!
//! A square grid of points, each empty or holding a stone. Points off the
//! board are a caller bug: accessors panic rather than return a sentinel.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{AnalysisError, Result};
use super::point::Point;

/// Largest supported board.
pub const MAX_BOARD_SIZE: u8 = 19;

/// Stones on a square board.
///
/// ## Example
///
/// ```
/// use go_connections::core::{Board, Color, Point};
///
/// let board = Board::from_diagram("
///     . X .
///     O . O
///     . X .
/// ").unwrap();
///
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.get(Point::new(0, 1)), Color::Black);
/// assert_eq!(board.get(Point::new(1, 0)), Color::White);
/// assert!(board.is_empty(Point::new(1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    points: Vec<Color>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Board must have at least one point");
        assert!(size <= MAX_BOARD_SIZE, "At most 19x19 boards supported");

        Self {
            size,
            points: vec![Color::Empty; size as usize * size as usize],
        }
    }

    /// Parse a diagram of `X`, `O`, `.` (or `+`) rows.
    ///
    /// Whitespace inside rows is ignored, blank lines are skipped. The
    /// diagram must be square.
    pub fn from_diagram(diagram: &str) -> Result<Self> {
        let rows: Vec<(usize, Vec<char>)> = diagram
            .lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>()))
            .filter(|(_, row)| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(AnalysisError::EmptyDiagram);
        }

        let size = rows.len();
        if size > MAX_BOARD_SIZE as usize {
            return Err(AnalysisError::InvalidBoardSize(size));
        }

        let mut board = Board::new(size as u8);
        for (row, (line, symbols)) in rows.iter().enumerate() {
            if symbols.len() != size {
                return Err(AnalysisError::RaggedRow {
                    row,
                    found: symbols.len(),
                    expected: size,
                });
            }
            for (col, &ch) in symbols.iter().enumerate() {
                let color = Color::from_symbol(ch)
                    .ok_or(AnalysisError::UnexpectedChar { ch, line: *line })?;
                board.set(Point::new(row as u8, col as u8), color);
            }
        }

        Ok(board)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Check if a point lies on this board.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.is_on_board(self.size)
    }

    /// Contents of a point.
    ///
    /// Panics if the point is off the board.
    #[must_use]
    pub fn get(&self, point: Point) -> Color {
        self.points[self.checked_index(point)]
    }

    /// Check if a point is empty.
    #[must_use]
    pub fn is_empty(&self, point: Point) -> bool {
        self.get(point) == Color::Empty
    }

    /// Place a stone, or clear the point with `Color::Empty`.
    pub fn set(&mut self, point: Point, color: Color) {
        let index = self.checked_index(point);
        self.points[index] = color;
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size as usize * size as usize).map(move |i| Point::from_index(i, size))
    }

    /// All points holding a stone of `color`.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self.get(p) == color)
    }

    /// Orthogonal neighbors of a point.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
        point.neighbors(self.size)
    }

    fn checked_index(&self, point: Point) -> usize {
        assert!(self.contains(point), "{} is off a {}x{} board", point, self.size, self.size);
        point.index(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.get(Point::new(row, col)).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.points().count(), 81);
        assert!(board.points().all(|p| board.is_empty(p)));
    }

    #[test]
    fn test_from_diagram() {
        let board = Board::from_diagram(
            "
            XO.
            .+.
            ..X
            ",
        )
        .unwrap();

        assert_eq!(board.size(), 3);
        assert_eq!(board.stones(Color::Black).collect::<Vec<_>>(), vec![
            Point::new(0, 0),
            Point::new(2, 2),
        ]);
        assert_eq!(board.stones(Color::White).count(), 1);
    }

    #[test]
    fn test_from_diagram_errors() {
        assert_eq!(Board::from_diagram("\n  \n"), Err(AnalysisError::EmptyDiagram));
        assert_eq!(
            Board::from_diagram("..\n."),
            Err(AnalysisError::RaggedRow { row: 1, found: 1, expected: 2 })
        );
        assert_eq!(
            Board::from_diagram("..\n.#"),
            Err(AnalysisError::UnexpectedChar { ch: '#', line: 2 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let diagram = "X.O\n.O.\nX..\n";
        let board = Board::from_diagram(diagram).unwrap();
        assert_eq!(board.to_string(), diagram);
    }

    #[test]
    #[should_panic(expected = "off a 9x9 board")]
    fn test_off_board_panics() {
        let board = Board::new(9);
        let _ = board.get(Point::new(9, 0));
    }

    #[test]
    #[should_panic(expected = "At most 19x19")]
    fn test_oversized_board_panics() {
        let _ = Board::new(20);
    }
}
