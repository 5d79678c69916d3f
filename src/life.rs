use crate::Rule;

/// Conway's Game of Life on `bool` cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Life;

impl Rule for Life {
    type Cell = bool;

    fn dead(&self) -> bool {
        false
    }

    fn seed(&self) -> bool {
        true
    }

    fn is_alive(&self, cell: &bool) -> bool {
        *cell
    }

    fn transition(&self, cell: &bool, live_neighbors: usize) -> bool {
        match live_neighbors {
            0 | 1 => false,
            2 => *cell,
            3 => true,
            _ => false,
        }
    }
}
