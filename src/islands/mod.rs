//! Number of Islands
//!
//! Input format:
//!  -- `<rows> <cols>`
//!  -- `rows` lines of `cols` space separated cells, 1 for land and 0 for water
//!
//! Output format:
//!  -- the number of 4-connected land components

use crate::testcase::{ParseError, TestCase, TokenReader};

use std::io;
use std::io::Write;
use rand::Rng;

pub const MIN_SIDE: usize = 5;
pub const MAX_SIDE: usize = 999;

pub const WATER: u8 = 0;
pub const LAND: u8 = 1;

/// A rectangular land/water map, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>
}

impl Grid {
    /// Create a `Grid` out of its rows
    ///
    /// Returns `Err` if the rows are ragged or contain anything but `WATER` and `LAND`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ParseError> {
        let cols = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::new(&format!("row {} has {} cells, expected {}", i, row.len(), cols)));
            }
            cells.extend_from_slice(row);
        }
        Grid::from_cells(rows.len(), cols, cells)
    }

    fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self, ParseError> {
        if let Some(pos) = cells.iter().position(|&cell| cell != WATER && cell != LAND) {
            return Err(ParseError::new(
                &format!("cell ({}, {}) is {}, expected 0 or 1", pos / cols, pos % cols, cells[pos])));
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Draw a grid with both sides in `[MIN_SIDE, MAX_SIDE]` and fair coin cells
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rows = rng.gen_range(MIN_SIDE, MAX_SIDE + 1);
        let cols = rng.gen_range(MIN_SIDE, MAX_SIDE + 1);
        let cells = (0..rows * cols).map(|_| rng.gen_range(WATER, LAND + 1)).collect();
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    /// The same map with rows and columns swapped
    pub fn transposed(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.get(row, col));
            }
        }
        Grid { rows: self.cols, cols: self.rows, cells }
    }

    /// Count the islands without touching the grid
    pub fn count_islands(&self) -> usize {
        self.clone().sink_islands()
    }

    /// Count the islands, turning every land cell into water on the way
    ///
    /// Each island is flooded from its first cell in row-major order with an explicit stack, so
    /// the depth of an island never reaches the call stack. A cell is sunk when it is pushed,
    /// which keeps it from being pushed twice.
    pub fn sink_islands(&mut self) -> usize {
        const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

        let mut islands = 0;
        let mut stack = Vec::new();
        for start in 0..self.cells.len() {
            if self.cells[start] != LAND {
                continue;
            }
            islands += 1;
            self.cells[start] = WATER;
            stack.push((start / self.cols, start % self.cols));

            while let Some((row, col)) = stack.pop() {
                for &(d_row, d_col) in DIRECTIONS.iter() {
                    let next_row = row as isize + d_row;
                    let next_col = col as isize + d_col;
                    if next_row < 0 || next_col < 0 {
                        continue;
                    }
                    let (next_row, next_col) = (next_row as usize, next_col as usize);
                    if next_row >= self.rows || next_col >= self.cols {
                        continue;
                    }
                    let next = next_row * self.cols + next_col;
                    if self.cells[next] == LAND {
                        self.cells[next] = WATER;
                        stack.push((next_row, next_col));
                    }
                }
            }
        }
        islands
    }
}

impl TestCase for Grid {
    type Answer = usize;

    const NAME: &'static str = "islands";

    fn generate<R: Rng>(rng: &mut R) -> Self {
        Grid::random(rng)
    }

    fn read_input(text: &str) -> Result<Self, ParseError> {
        let mut reader = TokenReader::new(text);
        let rows: usize = reader.next("row count")?;
        let cols: usize = reader.next("column count")?;
        let size = rows.checked_mul(cols).ok_or_else(|| ParseError::new("grid dimensions overflow"))?;
        // the header is untrusted, a short file must fail on its tokens rather than on allocation
        let mut cells = Vec::with_capacity(size.min(MAX_SIDE * MAX_SIDE));
        for _ in 0..size {
            cells.push(reader.next("cell")?);
        }
        reader.finish()?;
        Grid::from_cells(rows, cols, cells)
    }

    fn write_input<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                write!(writer, "{} ", cell)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn solve(mut self) -> usize {
        self.sink_islands()
    }

    fn write_answer<W: Write>(answer: &usize, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", answer)
    }
}
