//! Sliding tile boards.
//!
//! A board is `rows x cols` numbered tiles with a single blank (stored as 0).
//! A move slides a tile orthogonally adjacent to the blank into it. The board
//! is solved when the tiles read `1, 2, ...` in row-major order with the
//! blank in the last cell.
//!
//! Puzzle files look like:
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 . 5
//! ```

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};

/// Row/column position on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    pub fn distance(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlideConfig {
    rows: usize,
    cols: usize,
    /// Row-major tiles, 0 is the blank
    tiles: Vec<u32>,
    blank: Coordinate,
}

impl SlideConfig {
    /// Build a board from its rows. Rows must be non-empty and of equal
    /// length, with exactly one 0.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(PuzzleError::NoEmptyCell);
        }

        let mut tiles = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PuzzleError::RowLength {
                    line: index + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Self::from_tiles(height, width, tiles)
    }

    fn from_tiles(rows: usize, cols: usize, tiles: Vec<u32>) -> Result<Self> {
        let mut blanks = tiles.iter().enumerate().filter(|&(_, &tile)| tile == 0);
        let index = match blanks.next() {
            Some((index, _)) => index,
            None => return Err(PuzzleError::NoEmptyCell),
        };
        if blanks.next().is_some() {
            return Err(PuzzleError::DuplicateEmptyCell);
        }
        Ok(Self {
            rows,
            cols,
            tiles,
            blank: Coordinate::new(index / cols, index % cols),
        })
    }

    /// Parse the text puzzle format: a `rows cols` header followed by one
    /// line per row, `.` marking the blank.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (header_line, header) = lines.next().ok_or(PuzzleError::MissingHeader)?;
        let dims: Vec<usize> = header
            .split_whitespace()
            .map(str::parse)
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| PuzzleError::BadDimensions {
                line: header_line,
                found: header.to_string(),
            })?;
        let (rows, cols) = match dims.as_slice() {
            &[rows, cols] if rows > 0 && cols > 0 => (rows, cols),
            _ => {
                return Err(PuzzleError::BadDimensions {
                    line: header_line,
                    found: header.to_string(),
                })
            }
        };

        let mut tiles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let (line_no, line) = lines.next().ok_or_else(|| PuzzleError::RowCount {
                expected: rows,
                found: row,
            })?;
            let before = tiles.len();
            for token in line.split_whitespace() {
                let tile = if token == "." {
                    0
                } else {
                    token.parse().map_err(|_| PuzzleError::InvalidTile {
                        line: line_no,
                        token: token.to_string(),
                    })?
                };
                tiles.push(tile);
            }
            let found = tiles.len() - before;
            if found != cols {
                return Err(PuzzleError::RowLength {
                    line: line_no,
                    expected: cols,
                    found,
                });
            }
        }

        Self::from_tiles(rows, cols, tiles)
    }

    /// Read and parse a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn blank(&self) -> Coordinate {
        self.blank
    }

    /// Tile at a cell (0 for the blank), or `None` when out of bounds
    pub fn tile(&self, at: Coordinate) -> Option<u32> {
        if self.in_bounds(at) {
            Some(self.tiles[at.row * self.cols + at.col])
        } else {
            None
        }
    }

    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Slide the tile at `from` into the blank. Caller guarantees adjacency.
    fn slide_into_blank(&self, from: Coordinate) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(
            from.row * self.cols + from.col,
            self.blank.row * self.cols + self.blank.col,
        );
        Self {
            rows: self.rows,
            cols: self.cols,
            tiles,
            blank: from,
        }
    }

    /// Move the tile at `from` one step to the blank at `to`.
    pub fn move_piece(&self, from: Coordinate, to: Coordinate) -> Result<Self> {
        let legal = self.in_bounds(from)
            && self.in_bounds(to)
            && from.distance(to) == 1
            && to == self.blank;
        if !legal {
            return Err(PuzzleError::IllegalMove {
                from_row: from.row,
                from_col: from.col,
                to_row: to.row,
                to_col: to.col,
            });
        }
        Ok(self.slide_into_blank(from))
    }

    /// Render the board with row and column indexes.
    pub fn grid(&self) -> String {
        let mut out = String::from("    ");
        for col in 0..self.cols {
            let _ = write!(out, "{col}   ");
        }
        out.push_str("\n  ");
        out.push_str(&"----".repeat(self.cols));
        out.push('\n');
        for row in 0..self.rows {
            let _ = write!(out, "{row}|");
            for tile in &self.tiles[row * self.cols..(row + 1) * self.cols] {
                if *tile == 0 {
                    out.push_str("  . ");
                } else {
                    let _ = write!(out, "{tile:>3} ");
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Configuration for SlideConfig {
    fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .zip(1..)
                .all(|(&tile, expected)| tile == expected)
    }

    fn neighbors(&self) -> Vec<Self> {
        let Coordinate { row, col } = self.blank;
        // North, south, west, east of the blank
        let mut sources: SmallVec<[Coordinate; 4]> = SmallVec::new();
        if row > 0 {
            sources.push(Coordinate::new(row - 1, col));
        }
        if row + 1 < self.rows {
            sources.push(Coordinate::new(row + 1, col));
        }
        if col > 0 {
            sources.push(Coordinate::new(row, col - 1));
        }
        if col + 1 < self.cols {
            sources.push(Coordinate::new(row, col + 1));
        }
        sources
            .into_iter()
            .map(|from| self.slide_into_blank(from))
            .collect()
    }
}

impl fmt::Display for SlideConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols) {
            for &tile in row {
                if tile == 0 {
                    f.write_str(" .")?;
                } else {
                    write!(f, "{tile:>2}")?;
                }
                f.write_str(" ")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use std::io::Write;

    fn board(rows: &[&[u32]]) -> SlideConfig {
        SlideConfig::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_parse() {
        let config = SlideConfig::parse("2 3\n1 2 3\n4 . 5\n").unwrap();
        assert_eq!(config, board(&[&[1, 2, 3], &[4, 0, 5]]));
        assert_eq!(config.blank(), Coordinate::new(1, 1));
        assert_eq!(config.tile(Coordinate::new(1, 2)), Some(5));
        assert_eq!(config.tile(Coordinate::new(2, 0)), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(SlideConfig::parse(""), Err(PuzzleError::MissingHeader)));
        assert!(matches!(
            SlideConfig::parse("2\n1 ."),
            Err(PuzzleError::BadDimensions { line: 1, .. })
        ));
        assert!(matches!(
            SlideConfig::parse("2 2\n1 ."),
            Err(PuzzleError::RowCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            SlideConfig::parse("1 2\n1 . 3"),
            Err(PuzzleError::RowLength { line: 2, .. })
        ));
        assert!(matches!(
            SlideConfig::parse("1 2\n1 x"),
            Err(PuzzleError::InvalidTile { line: 2, .. })
        ));
        assert!(matches!(
            SlideConfig::parse("1 2\n1 2"),
            Err(PuzzleError::NoEmptyCell)
        ));
        assert!(matches!(
            SlideConfig::parse("1 2\n. ."),
            Err(PuzzleError::DuplicateEmptyCell)
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2 2\n1 2\n. 3\n").unwrap();
        let config = SlideConfig::load(file.path()).unwrap();
        assert_eq!(config, board(&[&[1, 2], &[0, 3]]));

        assert!(matches!(
            SlideConfig::load("/nonexistent/puzzle.txt"),
            Err(PuzzleError::Io(_))
        ));
    }

    #[test]
    fn test_goal() {
        assert!(board(&[&[1, 2], &[3, 0]]).is_goal());
        assert!(!board(&[&[1, 2], &[0, 3]]).is_goal());
        assert!(!board(&[&[2, 1], &[3, 0]]).is_goal());
        assert!(board(&[&[0]]).is_goal());
    }

    #[test]
    fn test_neighbor_order() {
        let center = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        let neighbors = center.neighbors();
        let blanks: Vec<Coordinate> = neighbors.iter().map(SlideConfig::blank).collect();
        assert_eq!(
            blanks,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
            ]
        );
        assert_eq!(neighbors[0].tile(Coordinate::new(1, 1)), Some(2));

        let corner = board(&[&[0, 1], &[2, 3]]);
        assert_eq!(corner.neighbors().len(), 2);
    }

    #[test]
    fn test_move_piece() {
        let config = board(&[&[1, 2], &[0, 3]]);
        let moved = config
            .move_piece(Coordinate::new(1, 1), Coordinate::new(1, 0))
            .unwrap();
        assert!(moved.is_goal());

        // Not adjacent, not into the blank, out of bounds
        for (from, to) in [
            ((0, 1), (1, 0)),
            ((0, 0), (0, 1)),
            ((1, 2), (1, 1)),
        ] {
            let result = config.move_piece(
                Coordinate::new(from.0, from.1),
                Coordinate::new(to.0, to.1),
            );
            assert!(matches!(result, Err(PuzzleError::IllegalMove { .. })));
        }
    }

    #[test]
    fn test_solve_small_board() {
        let start = board(&[&[1, 2, 3], &[4, 0, 5]]);
        let mut solver = Solver::new(start.clone());
        assert!(solver.solve());
        let path = solver.solution_path();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.len(), 2);
        assert!(path[1].is_goal());
    }

    #[test]
    fn test_unsolvable_board() {
        // Swapped tiles: odd permutation on a 2x2 board
        let mut solver = Solver::new(board(&[&[2, 1], &[3, 0]]));
        assert!(!solver.solve());
        assert!(solver.solution_path().is_empty());
        // Half of the 4! arrangements are reachable
        assert_eq!(solver.unique_configurations(), 12);
    }

    #[test]
    fn test_display() {
        let config = board(&[&[1, 12], &[0, 3]]);
        assert_eq!(config.to_string(), " 1 12 \n .  3 \n");
        assert_eq!(
            config.grid(),
            "    0   1   \n  --------\n0|  1  12 \n1|  .   3 \n"
        );
    }
}
