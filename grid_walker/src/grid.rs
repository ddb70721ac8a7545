// grid.rs - Square grid of cells and its adjacency

use crate::direction::Direction;
use crate::error::WalkError;

/// Column width the boundary test used before it followed the grid size.
pub const LEGACY_COLUMN_WIDTH: usize = 5;

/// Largest number of cells a grid may hold (a 1024 x 1024 grid).
pub const MAX_CELLS: usize = 1 << 20;

/// Validated grid edge length: at least 1, and at most [`MAX_CELLS`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(size: usize) -> Result<Self, WalkError> {
        if size == 0 {
            return Err(WalkError::InvalidSize(size));
        }
        let cells = size.checked_mul(size).ok_or(WalkError::SizeOverflow(size))?;
        if cells > MAX_CELLS {
            return Err(WalkError::TooManyCells { size, max: MAX_CELLS });
        }
        Ok(Self(size))
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

/// How the left/right boundary of a row is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// Column is `index % size`.
    #[default]
    GridSize,
    /// Column is `index % width` regardless of the grid size. With a width
    /// other than the grid size, rows wrap into each other.
    FixedColumns(usize),
}

impl BoundaryRule {
    pub const LEGACY: BoundaryRule = BoundaryRule::FixedColumns(LEGACY_COLUMN_WIDTH);

    pub fn validate(self) -> Result<Self, WalkError> {
        match self {
            BoundaryRule::FixedColumns(0) => Err(WalkError::InvalidColumnWidth(0)),
            rule => Ok(rule),
        }
    }

    fn column_width(self, size: GridSize) -> usize {
        match self {
            BoundaryRule::GridSize => size.get(),
            BoundaryRule::FixedColumns(width) => width.max(1),
        }
    }
}

/// One grid position. The index is fixed at creation; only the grid flips
/// `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    active: bool,
}

impl Cell {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Index of the cell one step from `index` in `dir`, if it lies on the grid.
pub fn neighbor_of(
    index: usize,
    dir: Direction,
    size: GridSize,
    rule: BoundaryRule,
) -> Option<usize> {
    let n = size.get();
    let total = size.cell_count();
    if index >= total {
        return None;
    }
    let width = rule.column_width(size);

    let candidate = match dir {
        Direction::Up => (index >= n).then(|| index - n),
        Direction::Right => ((index + 1) % width != 0).then(|| index + 1),
        Direction::Down => (index < n * (n - 1)).then(|| index + n),
        Direction::Left => (index % width != 0).then(|| index - 1),
    };

    // A fixed width can point one past the last cell.
    candidate.filter(|&i| i < total)
}

/// Grid-adjacent indices of `index`, ordered up, right, down, left.
pub fn neighbors(index: usize, size: GridSize, rule: BoundaryRule) -> Vec<usize> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| neighbor_of(index, dir, size, rule))
        .collect()
}

/// Fixed-size square of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    boundary: BoundaryRule,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates `size * size` inactive cells.
    pub fn new(size: GridSize, boundary: BoundaryRule) -> Self {
        let cells = (0..size.cell_count())
            .map(|index| Cell { index, active: false })
            .collect();
        Self { size, boundary, cells }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn boundary(&self) -> BoundaryRule {
        self.boundary
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_active)
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.get())
    }

    pub fn active_mask(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_active).collect()
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.active).count()
    }

    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        neighbor_of(index, dir, self.size, self.boundary)
    }

    pub fn neighbors(&self, index: usize) -> Vec<Cell> {
        neighbors(index, self.size, self.boundary)
            .into_iter()
            .filter_map(|i| self.cells.get(i).copied())
            .collect()
    }

    /// Marks a cell active. Returns false if it was already active or off the grid.
    pub(crate) fn activate(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if !cell.active => {
                cell.active = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn grid_size_rejects_zero_and_overflow() {
        assert_eq!(GridSize::new(0), Err(WalkError::InvalidSize(0)));
        assert_eq!(GridSize::new(usize::MAX), Err(WalkError::SizeOverflow(usize::MAX)));
        assert_eq!(size(7).cell_count(), 49);
    }

    #[test]
    fn grid_size_is_capped_before_allocation() {
        assert_eq!(size(1024).cell_count(), MAX_CELLS);
        assert_eq!(
            GridSize::new(1025),
            Err(WalkError::TooManyCells { size: 1025, max: MAX_CELLS })
        );
        assert_eq!(
            GridSize::new(100_000),
            Err(WalkError::TooManyCells { size: 100_000, max: MAX_CELLS })
        );
    }

    #[test]
    fn fixed_columns_of_zero_is_rejected() {
        assert_eq!(
            BoundaryRule::FixedColumns(0).validate(),
            Err(WalkError::InvalidColumnWidth(0))
        );
        assert_eq!(BoundaryRule::LEGACY.validate(), Ok(BoundaryRule::FixedColumns(5)));
    }

    #[test]
    fn new_grid_is_all_inactive_and_row_major() {
        let grid = Grid::new(size(4), BoundaryRule::GridSize);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.active_count(), 0);
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2][1].index(), 9);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        // 3x3, centre cell
        assert_eq!(neighbors(4, size(3), BoundaryRule::GridSize), vec![1, 5, 7, 3]);
        // top-left corner
        assert_eq!(neighbors(0, size(3), BoundaryRule::GridSize), vec![1, 3]);
        // bottom-right corner
        assert_eq!(neighbors(8, size(3), BoundaryRule::GridSize), vec![5, 7]);
    }

    #[test]
    fn neighbor_counts_by_position() {
        for n in 2..=9 {
            let s = size(n);
            for index in 0..s.cell_count() {
                let row = index / n;
                let col = index % n;
                let on_row_edge = row == 0 || row == n - 1;
                let on_col_edge = col == 0 || col == n - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 2,
                    (true, false) | (false, true) => 3,
                    (false, false) => 4,
                };
                assert_eq!(
                    neighbors(index, s, BoundaryRule::GridSize).len(),
                    expected,
                    "n={n} index={index}"
                );
            }
        }
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(neighbors(0, size(1), BoundaryRule::GridSize).is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = Grid::new(size(6), BoundaryRule::GridSize);
        for index in 0..36 {
            for dir in Direction::ALL {
                if let Some(other) = grid.neighbor(index, dir) {
                    assert_eq!(grid.neighbor(other, dir.opposite()), Some(index));
                }
            }
        }
    }

    #[test]
    fn legacy_rule_wraps_rows_when_size_is_not_five() {
        let s = size(3);
        // Rightmost column of row 0 sees the first cell of row 1.
        assert_eq!(neighbors(2, s, BoundaryRule::LEGACY), vec![3, 5, 1]);
        assert_eq!(neighbors(2, s, BoundaryRule::GridSize), vec![5, 1]);
        // Leftmost column of row 1 sees the last cell of row 0.
        assert_eq!(neighbors(3, s, BoundaryRule::LEGACY), vec![0, 4, 6, 2]);
        // Last cell: the wrapped right neighbour would be off the grid.
        assert_eq!(neighbors(8, s, BoundaryRule::LEGACY), vec![5, 7]);
    }

    #[test]
    fn legacy_rule_matches_grid_size_rule_at_five() {
        let s = size(5);
        for index in 0..25 {
            assert_eq!(
                neighbors(index, s, BoundaryRule::LEGACY),
                neighbors(index, s, BoundaryRule::GridSize)
            );
        }
    }

    #[test]
    fn activate_flips_once() {
        let mut grid = Grid::new(size(2), BoundaryRule::GridSize);
        assert!(grid.activate(3));
        assert!(!grid.activate(3));
        assert!(!grid.activate(4));
        assert!(grid.is_active(3));
        assert_eq!(grid.active_mask(), vec![false, false, false, true]);
        assert_eq!(
            grid.neighbors(1).iter().map(Cell::index).collect::<Vec<_>>(),
            vec![3, 0]
        );
    }
}
