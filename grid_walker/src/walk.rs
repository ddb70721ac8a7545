// walk.rs - Random self-avoiding walk over a grid

use tracing::{debug, info};

use crate::grid::{BoundaryRule, Grid, GridSize};
use crate::picker::Picker;

/// Where the walk is in its lifecycle. `Stuck` and `Complete` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Running,
    /// The current cell has no inactive neighbour.
    Stuck,
    /// Every cell has been activated.
    Complete,
}

impl WalkStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, WalkStatus::Running)
    }
}

/// Cursor and countdown of a walk.
///
/// `remaining + steps == cells - 1` holds at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkState {
    /// Index of the last activated cell; [`Grid::cell`] resolves it.
    pub current: usize,
    pub remaining: usize,
    pub steps: usize,
    pub status: WalkStatus,
}

/// A grid together with the walk lighting it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWalker {
    grid: Grid,
    state: WalkState,
}

impl GridWalker {
    /// Builds an inactive grid and lights one uniformly chosen start cell.
    pub fn initialize(size: GridSize, boundary: BoundaryRule, picker: &mut impl Picker) -> Self {
        let mut grid = Grid::new(size, boundary);
        let cells = size.cell_count();
        let start = picker.pick(cells);
        grid.activate(start);

        let remaining = cells - 1;
        let status = if remaining == 0 {
            WalkStatus::Complete
        } else {
            WalkStatus::Running
        };
        info!(size = size.get(), start, ?boundary, "walk initialized");

        Self {
            grid,
            state: WalkState {
                current: start,
                remaining,
                steps: 0,
                status,
            },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn status(&self) -> WalkStatus {
        self.state.status
    }

    /// Advances the walk by one cell. Does nothing once the walk is terminal.
    pub fn step(&mut self, picker: &mut impl Picker) -> WalkStatus {
        if self.state.status.is_terminal() {
            return self.state.status;
        }

        let candidates: Vec<usize> = self
            .grid
            .neighbors(self.state.current)
            .into_iter()
            .filter(|cell| !cell.is_active())
            .map(|cell| cell.index())
            .collect();

        if candidates.is_empty() {
            self.state.status = WalkStatus::Stuck;
            info!(
                current = self.state.current,
                remaining = self.state.remaining,
                steps = self.state.steps,
                "walk stuck"
            );
            return self.state.status;
        }

        let next = candidates[picker.pick(candidates.len()) % candidates.len()];
        self.grid.activate(next);
        debug!(
            from = self.state.current,
            to = next,
            remaining = self.state.remaining - 1,
            "walk step"
        );

        self.state.current = next;
        self.state.remaining -= 1;
        self.state.steps += 1;

        if self.state.remaining == 0 {
            self.state.status = WalkStatus::Complete;
            info!(steps = self.state.steps, "walk complete");
        }
        self.state.status
    }

    /// Steps until the walk is terminal, returning the final status.
    pub fn run_to_end(&mut self, picker: &mut impl Picker) -> WalkStatus {
        while !self.step(picker).is_terminal() {}
        self.state.status
    }
}
