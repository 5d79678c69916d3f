use crate::Direction;

/// A `Neighborhood` contains all of your neighbors, which are each in their own `Direction`.
pub trait Neighborhood<T>: std::iter::FromIterator<T> {
    type Direction: Direction;
    type Iter: Iterator<Item = T>;

    /// Evaluate `dir_map` for every direction in order.
    fn new<F: FnMut(Self::Direction) -> T>(dir_map: F) -> Self {
        <Self::Direction as Direction>::directions()
            .map(dir_map)
            .collect()
    }

    /// Iterate over all neighbor cells.
    fn iter(self) -> Self::Iter;
}

pub trait GetNeighbors<'a, Idx, Neighbors> {
    fn get_neighbors(&'a self, index: Idx) -> Neighbors;
}
