#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use error::*;
pub use sample::*;
pub use source::*;

mod board;
mod clue;
mod error;
mod sample;
mod source;

/// Shape of a trivia session: how many categories the provider pool holds,
/// how many of them end up on the board and how many clues each column gets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub pool_size: usize,
    pub categories: usize,
    pub clues_per_category: usize,
}

impl BoardConfig {
    pub const fn new_unchecked(
        pool_size: usize,
        categories: usize,
        clues_per_category: usize,
    ) -> Self {
        Self {
            pool_size,
            categories,
            clues_per_category,
        }
    }

    pub fn new(pool_size: usize, categories: usize, clues_per_category: usize) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let pool_size = pool_size.max(categories);
        Self::new_unchecked(pool_size, categories, clues_per_category)
    }

    pub const fn total_clues(&self) -> usize {
        self.categories * self.clues_per_category
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(100, 6, 5)
    }
}
