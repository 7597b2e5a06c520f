use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// Board coordinates as (column, row), column-major like the rendered table.
pub type CellCoords = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: String, clues: Vec<Clue>) -> Self {
        Self { title, clues }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Trims surplus clues down to `count`; a category that cannot fill a
    /// whole column is rejected.
    pub fn with_clue_count(mut self, count: usize) -> Result<Self> {
        if self.clues.len() < count {
            return Err(GameError::TooFewClues {
                expected: count,
                actual: self.clues.len(),
                title: self.title,
            });
        }
        if self.clues.len() > count {
            log::debug!(
                "Category {:?} has {} clues, keeping the first {}",
                self.title,
                self.clues.len(),
                count
            );
            self.clues.truncate(count);
        }
        Ok(self)
    }
}

/// Rectangular grid of clues grouped into titled category columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Category>,
}

impl Board {
    pub fn from_columns(columns: Vec<Category>) -> Result<Self> {
        let rows = match columns.first() {
            Some(first) => first.clues.len(),
            None => return Err(GameError::InvalidBoardShape),
        };
        if rows == 0 || columns.iter().any(|category| category.clues.len() != rows) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { columns })
    }

    pub fn size(&self) -> CellCoords {
        (self.columns.len(), self.columns[0].clues.len())
    }

    pub fn columns(&self) -> &[Category] {
        &self.columns
    }

    pub fn validate_coords(&self, coords: CellCoords) -> Result<CellCoords> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: CellCoords) -> &Clue {
        &self.columns[coords.0].clues[coords.1]
    }

    /// Single mutation entry point, advances the clue under `coords`.
    pub fn activate(&mut self, coords: CellCoords) -> Result<RevealOutcome> {
        let (col, row) = self.validate_coords(coords)?;
        Ok(self.columns[col].clues[row].activate())
    }
}
