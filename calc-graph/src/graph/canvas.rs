use std::fmt::{self, Display, Formatter};
use super::point::CanvasPoint;

/// A grid of characters that a graph is drawn onto.
///
/// Rows are stored top to bottom. [`Display`] prints each row on its own line, without a trailing
/// newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Creates a blank canvas of the given size, filled with spaces.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![' '; width]; height],
        }
    }

    /// The number of columns in the canvas.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The number of rows in the canvas.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the character at the given cell, if it is inside the canvas.
    pub fn get(&self, cell: CanvasPoint<usize>) -> Option<char> {
        self.rows.get(cell.1).and_then(|row| row.get(cell.0)).copied()
    }

    /// Writes a character to the given cell. Cells outside the canvas are ignored.
    pub fn set(&mut self, cell: CanvasPoint<usize>, c: char) {
        if let Some(slot) = self.rows.get_mut(cell.1).and_then(|row| row.get_mut(cell.0)) {
            *slot = c;
        }
    }

    /// Fills an entire column with a character.
    pub fn fill_column(&mut self, column: usize, c: char) {
        for row in 0..self.height() {
            self.set(CanvasPoint(column, row), c);
        }
    }

    /// Fills an entire row with a character.
    pub fn fill_row(&mut self, row: usize, c: char) {
        for column in 0..self.width() {
            self.set(CanvasPoint(column, row), c);
        }
    }

    /// Returns the rows of the canvas as strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
