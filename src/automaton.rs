use crate::{
    AgingLife, GetNeighbors, Glyph, GridResult, Life, MooreNeighbors, Neighborhood, Rule,
    ToroidalGrid,
};
use log::trace;
use std::fmt;
use std::io::{self, Write};

/// Runs a [`Rule`] on a [`ToroidalGrid`] one generation at a time.
///
/// Every generation is computed from an immutable view of the previous one into a separate
/// buffer, which then replaces the current cells. A reader can never observe a partially
/// computed generation.
#[derive(Clone, Debug)]
pub struct Automaton<R: Rule> {
    rule: R,
    grid: ToroidalGrid<R::Cell>,
    generation: u64,
}

impl Automaton<Life> {
    /// A binary Game of Life with every cell dead.
    pub fn life(width: usize, height: usize) -> GridResult<Self> {
        Self::new(Life, width, height)
    }
}

impl Automaton<AgingLife> {
    /// An aging Game of Life with every cell unseeded.
    pub fn aging(width: usize, height: usize) -> GridResult<Self> {
        Self::new(AgingLife, width, height)
    }
}

impl<R: Rule> Automaton<R> {
    /// Make a new automaton with every cell set to the rule's dead value.
    pub fn new(rule: R, width: usize, height: usize) -> GridResult<Self> {
        let grid = ToroidalGrid::new_default(width, height, rule.dead())?;
        Ok(Self::from_grid(rule, grid))
    }

    /// Start from an existing grid at generation 0.
    pub fn from_grid(rule: R, grid: ToroidalGrid<R::Cell>) -> Self {
        Automaton {
            rule,
            grid,
            generation: 0,
        }
    }

    /// Seed the wrapped coordinate with a live cell.
    pub fn set(&mut self, x: isize, y: isize) {
        let cell = self.rule.seed();
        self.grid.set(x, y, cell);
    }

    /// Seed every coordinate in `coords`.
    pub fn seed<I>(&mut self, coords: I)
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        for (x, y) in coords {
            self.set(x, y);
        }
    }

    /// Overwrite the wrapped coordinate with an arbitrary cell.
    pub fn set_cell(&mut self, x: isize, y: isize, cell: R::Cell) {
        self.grid.set(x, y, cell);
    }

    /// Run the automaton for one generation.
    pub fn advance(&mut self) {
        let next = (0..self.grid.size())
            .map(|ix| self.next_cell(ix))
            .collect();
        self.commit(next);
    }

    /// Run the automaton for `generations` generations.
    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    fn next_cell(&self, ix: usize) -> R::Cell {
        let neighbors: MooreNeighbors<&R::Cell> = self.grid.get_neighbors(ix);
        let live = neighbors
            .iter()
            .filter(|&cell| self.rule.is_alive(cell))
            .count();
        self.rule.transition(self.grid.get_cell(ix), live)
    }

    fn commit(&mut self, next: Vec<R::Cell>) {
        self.grid.replace_cells(next);
        self.generation += 1;
        trace!(
            "generation {} has {} live cells",
            self.generation,
            self.population()
        );
    }

    #[inline]
    pub fn get(&self, x: isize, y: isize) -> &R::Cell {
        self.grid.get(x, y)
    }

    #[inline]
    pub fn grid(&self) -> &ToroidalGrid<R::Cell> {
        &self.grid
    }

    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// The number of completed calls to `advance`.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .filter(|&cell| self.rule.is_alive(cell))
            .count()
    }
}

#[cfg(feature = "parallel")]
impl<R> Automaton<R>
where
    R: Rule + Sync,
    R::Cell: Send + Sync,
{
    /// Run the automaton for one generation and parallelize the simulation.
    ///
    /// Produces the same generation as [`Automaton::advance`].
    pub fn advance_parallel(&mut self) {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};

        let this = &*self;
        let next = (0..this.grid.size())
            .into_par_iter()
            .map(|ix| this.next_cell(ix))
            .collect();
        self.commit(next);
    }
}

impl<R> Automaton<R>
where
    R: Rule,
    R::Cell: Glyph,
{
    /// The glyph of the cell at the wrapped coordinate.
    #[inline]
    pub fn glyph(&self, x: isize, y: isize) -> char {
        self.get(x, y).glyph()
    }

    /// Write the current generation, one row per line.
    pub fn render<W: Write>(&self, out: W) -> io::Result<()> {
        self.grid.render(out)
    }
}

impl<R> fmt::Display for Automaton<R>
where
    R: Rule,
    R::Cell: Glyph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
