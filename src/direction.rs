/// One of the directions from a cell towards a neighbor.
pub trait Direction: Copy {
    type Directions: Iterator<Item = Self>;

    /// An iterator over all directions in a fixed order.
    fn directions() -> Self::Directions;

    /// The `(dx, dy)` offset of a step in this direction, with y growing downward.
    fn delta(self) -> (isize, isize);
}
