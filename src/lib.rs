//! Toruslife runs Conway's Game of Life on a fixed-size grid whose edges wrap around.
//!
//! Two rules are provided: the classic binary [`Life`] rule and [`AgingLife`], where every live
//! cell carries an age counter that cycles while it survives. Both run through the same
//! [`Automaton`], which computes every generation into a fresh buffer before replacing the
//! current one, so readers only ever see complete generations.
//!
//! ```
//! use toruslife::Automaton;
//!
//! let mut life = Automaton::life(5, 5).unwrap();
//! life.seed([(1, 2), (2, 2), (3, 2)]);
//! life.advance();
//! assert!(*life.get(2, 1) && *life.get(2, 3));
//! ```

mod aging;
mod automaton;
mod direction;
mod error;
mod grid;
mod life;
mod moore;
mod neighborhood;

pub use aging::*;
pub use automaton::*;
pub use direction::*;
pub use error::*;
pub use grid::*;
pub use life::*;
pub use moore::*;
pub use neighborhood::*;

/// Defines a transition rule for a cellular automaton.
///
/// Every next cell is produced only from the previous generation and its live neighbor count.
/// This keeps the update order from affecting the result.
pub trait Rule {
    /// The cells of the grid.
    type Cell: Clone;

    /// The value every cell of a new grid starts with.
    fn dead(&self) -> Self::Cell;

    /// The value a seeded cell gets.
    fn seed(&self) -> Self::Cell;

    /// Whether the cell counts towards the live neighbors of the cells around it.
    fn is_alive(&self, cell: &Self::Cell) -> bool;

    /// Computes the next state of `cell` given how many of its 8 neighbors are alive.
    fn transition(&self, cell: &Self::Cell, live_neighbors: usize) -> Self::Cell;
}

/// A cell that can be drawn as a single character.
pub trait Glyph {
    fn glyph(&self) -> char;
}

impl Glyph for bool {
    #[inline]
    fn glyph(&self) -> char {
        if *self {
            '*'
        } else {
            ' '
        }
    }
}
