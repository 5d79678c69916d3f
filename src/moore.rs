use crate::{Direction, GetNeighbors, Neighborhood, ToroidalGrid};
use enum_iterator::IntoEnumIterator;
use MooreDirection::*;

/// The 8 directions of the Moore neighborhood in counter-clockwise order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum MooreDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }

    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            Right => (1, 0),
            UpRight => (1, -1),
            Up => (0, -1),
            UpLeft => (-1, -1),
            Left => (-1, 0),
            DownLeft => (-1, 1),
            Down => (0, 1),
            DownRight => (1, 1),
        }
    }
}

/// One value for each of the 8 cells surrounding a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighbors<T> {
    pub right: T,
    pub up_right: T,
    pub up: T,
    pub up_left: T,
    pub left: T,
    pub down_left: T,
    pub down: T,
    pub down_right: T,
}

impl<T> std::iter::FromIterator<T> for MooreNeighbors<T> {
    /// Takes the neighbors in `MooreDirection` order. Panics if there are fewer than 8.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut next = || {
            iter.next()
                .expect("MooreNeighbors::from_iter: fewer than 8 items")
        };
        MooreNeighbors {
            right: next(),
            up_right: next(),
            up: next(),
            up_left: next(),
            left: next(),
            down_left: next(),
            down: next(),
            down_right: next(),
        }
    }
}

impl<T> Neighborhood<T> for MooreNeighbors<T> {
    type Direction = MooreDirection;
    type Iter = std::array::IntoIter<T, 8>;

    #[inline]
    fn iter(self) -> Self::Iter {
        [
            self.right,
            self.up_right,
            self.up,
            self.up_left,
            self.left,
            self.down_left,
            self.down,
            self.down_right,
        ]
        .into_iter()
    }
}

impl<'a, C> GetNeighbors<'a, usize, MooreNeighbors<&'a C>> for ToroidalGrid<C> {
    #[inline]
    fn get_neighbors(&'a self, ix: usize) -> MooreNeighbors<&'a C> {
        MooreNeighbors::new(|dir: MooreDirection| self.get_cell(self.delta_index(ix, dir.delta())))
    }
}

impl<'a, C> GetNeighbors<'a, (isize, isize), MooreNeighbors<&'a C>> for ToroidalGrid<C> {
    #[inline]
    fn get_neighbors(&'a self, (x, y): (isize, isize)) -> MooreNeighbors<&'a C> {
        self.get_neighbors(self.index(x, y))
    }
}
