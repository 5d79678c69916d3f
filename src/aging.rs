use crate::{Glyph, Rule};
use boolinator::Boolinator;

/// Live cells cycle through ages `1..AGE_PERIOD`.
pub const AGE_PERIOD: i8 = 12;

/// A cell that remembers how many generations it has been alive.
///
/// An age of `-1` means the cell was never seeded, `0` means it died, and `1..=11` means it is
/// alive. Only the age decides how the cell is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AgingCell {
    age: i8,
}

impl AgingCell {
    pub const UNSEEDED: AgingCell = AgingCell { age: -1 };
    pub const DEAD: AgingCell = AgingCell { age: 0 };
    pub const NEWBORN: AgingCell = AgingCell { age: 1 };

    /// Returns `None` unless `age` is in `-1..AGE_PERIOD`.
    pub fn with_age(age: i8) -> Option<Self> {
        (-1..AGE_PERIOD).contains(&age).as_some(AgingCell { age })
    }

    #[inline]
    pub fn age(self) -> i8 {
        self.age
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self.age > 0
    }

    #[inline]
    pub fn is_unseeded(self) -> bool {
        self.age < 0
    }

    /// One generation older. Only live cells age, and they skip 0 when wrapping.
    #[inline]
    pub fn older(self) -> Self {
        if !self.is_alive() {
            return self;
        }
        match (self.age + 1) % AGE_PERIOD {
            0 => AgingCell::NEWBORN,
            age => AgingCell { age },
        }
    }

    /// Live cells die, everything else is left alone.
    #[inline]
    pub fn killed(self) -> Self {
        if self.is_alive() {
            AgingCell::DEAD
        } else {
            self
        }
    }
}

impl Default for AgingCell {
    fn default() -> Self {
        AgingCell::UNSEEDED
    }
}

impl Glyph for AgingCell {
    #[inline]
    fn glyph(&self) -> char {
        self.is_alive().glyph()
    }
}

/// Life without births: seeded cells age while they have 2 or 3 live neighbors and die otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AgingLife;

impl Rule for AgingLife {
    type Cell = AgingCell;

    fn dead(&self) -> AgingCell {
        AgingCell::UNSEEDED
    }

    fn seed(&self) -> AgingCell {
        AgingCell::NEWBORN
    }

    fn is_alive(&self, cell: &AgingCell) -> bool {
        cell.is_alive()
    }

    fn transition(&self, cell: &AgingCell, live_neighbors: usize) -> AgingCell {
        let aged = cell.older();
        match live_neighbors {
            2 | 3 => aged,
            _ => aged.killed(),
        }
    }
}
