//! Generate a maze on a fixed grid and find the shortest way through it
//!
//! The maze is carved into a [Grid] from a caller-owned random source,
//! searched breadth-first from the start cell on the left edge, and the
//! shortest path is read back from the recorded predecessors.
//!
//! # Examples
//! ## Solve a generated maze
//! ```
//! use bfs_maze::{search, GeneratorConfig, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = Grid::new(21, 21);
//! let mut rng = StdRng::seed_from_u64(7);
//! let solution = search::solve(&mut grid, &mut rng, &GeneratorConfig::default(), None, |_| ())
//!     .unwrap();
//! search::mark_path(&mut grid, &solution.path);
//! print!("{}", grid);
//! solution.print_report();
//! ```
//!
//! ## Step by step
//! ```
//! use bfs_maze::{search, CellType, GeneratorConfig, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = Grid::new(9, 9);
//! let mut rng = StdRng::seed_from_u64(1);
//! grid.generate_with(&mut rng, &GeneratorConfig::open());
//!
//! let start = grid.start_cell().position();
//! let goal = search::breadth_first_search(&mut grid, start).unwrap().unwrap();
//! assert_eq!(grid.cell_at(goal.x, goal.y).cell_type(), CellType::Goal);
//!
//! let path = search::reconstruct_path(&grid, goal).unwrap();
//! assert_eq!(path[0], goal);
//! ```

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

pub mod error;
pub mod maze_generator;
pub mod search;

pub use error::{MazeError, Result};
pub use maze_generator::GeneratorConfig;

/// Location in the grid
///
/// `x` is the column and `y` the row. Points may lie outside the grid;
/// lookups with such points resolve to the out-of-bounds cell.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `other` is one cardinal step away
    pub fn is_adjacent(&self, other: &Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// What occupies a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CellType {
    Wall,
    /// Cell on the solution path
    SearchMarked,
    Start,
    Goal,
    Empty,
}

impl CellType {
    /// Character used when rendering the grid
    pub fn glyph(&self) -> char {
        match self {
            CellType::Wall => '#',
            CellType::SearchMarked => 'O',
            CellType::Start => 'S',
            CellType::Goal => 'X',
            CellType::Empty => ' ',
        }
    }
}

/// Single grid position
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Cell {
    x: i32,
    y: i32,
    cell_type: CellType,
    visited: bool,
}

/// Shared answer to every out-of-bounds lookup
static OUT_OF_BOUNDS: Cell = Cell::out_of_bounds();

impl Cell {
    const fn new(x: i32, y: i32, cell_type: CellType) -> Self {
        Self {
            x,
            y,
            cell_type,
            visited: false,
        }
    }

    /// The sentinel cell: type [CellType::Empty] at `(-1, -1)`
    pub const fn out_of_bounds() -> Self {
        Self::new(-1, -1, CellType::Empty)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.x < 0 || self.y < 0
    }
}

/// Rectangular maze grid
///
/// Cells are stored row-major, so the cell at `(x, y)` lives at index
/// `y * width + x`. That index is also the key of the predecessor map.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Breadth-first search tree: child index -> parent index
    predecessors: HashMap<usize, usize>,
}

impl Grid {
    pub const MIN_SIZE: usize = 9;
    pub const MAX_SIZE: usize = 100;

    /// Neighbor offsets, in the order the search expands them
    const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    /// Create an empty grid
    ///
    /// Both dimensions are clamped to `MIN_SIZE..=MAX_SIZE`.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.clamp(Self::MIN_SIZE, Self::MAX_SIZE);
        let height = height.clamp(Self::MIN_SIZE, Self::MAX_SIZE);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x as i32, y as i32, CellType::Empty)))
            .collect();
        Grid {
            width,
            height,
            cells,
            predecessors: HashMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width + x as usize)
    }

    /// Cell at `(x, y)`, or the out-of-bounds cell
    pub fn cell_at(&self, x: i32, y: i32) -> &Cell {
        match self.index_of(x, y) {
            Some(idx) => &self.cells[idx],
            None => &OUT_OF_BOUNDS,
        }
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// First [CellType::Start] cell in the left column
    ///
    /// Returns the out-of-bounds cell if the grid has not been generated.
    pub fn start_cell(&self) -> &Cell {
        self.cells
            .iter()
            .step_by(self.width)
            .find(|cell| cell.cell_type == CellType::Start)
            .unwrap_or(&OUT_OF_BOUNDS)
    }

    /// Passable cardinal neighbors of `cell`
    ///
    /// Order is +x, -x, +y, -y. Walls and out-of-bounds positions are
    /// skipped.
    pub fn neighbors_of(&self, cell: &Cell) -> Vec<&Cell> {
        Self::NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| self.index_of(cell.x + dx, cell.y + dy))
            .map(|idx| &self.cells[idx])
            .filter(|neighbor| neighbor.cell_type != CellType::Wall)
            .collect()
    }

    /// Overwrite the type of the cell at `(x, y)`; no-op out of bounds
    pub fn set_type(&mut self, x: i32, y: i32, cell_type: CellType) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx].cell_type = cell_type;
        }
    }

    /// Mark the cell at `point` as visited
    ///
    /// Returns `true` if the cell was not visited before. Out-of-bounds
    /// points are never marked.
    pub fn mark_visited(&mut self, point: Point) -> bool {
        match self.index_of(point.x, point.y) {
            Some(idx) if !self.cells[idx].visited => {
                self.cells[idx].visited = true;
                true
            }
            _ => false,
        }
    }

    /// Record `parent` as the cell from which `child` was discovered
    ///
    /// A later record for the same child replaces the earlier one.
    pub fn record_predecessor(&mut self, child: Point, parent: Point) {
        if let (Some(child), Some(parent)) = (
            self.index_of(child.x, child.y),
            self.index_of(parent.x, parent.y),
        ) {
            self.predecessors.insert(child, parent);
        }
    }

    /// Recorded predecessor of the cell at `point`, if any
    pub fn predecessor_of(&self, point: Point) -> Option<&Cell> {
        let idx = self.index_of(point.x, point.y)?;
        self.predecessors.get(&idx).map(|&parent| &self.cells[parent])
    }

    /// Number of cells that have a recorded predecessor
    pub fn predecessor_count(&self) -> usize {
        self.predecessors.len()
    }

    /// Reset every cell to an unvisited [CellType::Empty] and forget
    /// the search tree
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.cell_type = CellType::Empty;
            cell.visited = false;
        }
        self.predecessors.clear();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|cell| format!("{} ", cell.cell_type.glyph()))
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, CellType, Grid, Point};

    #[test]
    fn dimensions_are_clamped() {
        let grid = Grid::new(3, 500);
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 100);
        assert_eq!(grid.cells().count(), 900);

        let grid = Grid::new(51, 20);
        assert_eq!((grid.width(), grid.height()), (51, 20));
    }

    #[test]
    fn out_of_bounds_returns_sentinel() {
        let grid = Grid::new(9, 9);
        for (x, y) in [(-1, -1), (9, 9), (0, 9), (9, 0), (-1, 4)] {
            let cell = grid.cell_at(x, y);
            assert_eq!(*cell, Cell::out_of_bounds());
            assert_eq!(cell.cell_type(), CellType::Empty);
            assert_eq!(cell.position(), Point::new(-1, -1));
            assert!(cell.is_out_of_bounds());
        }
    }

    #[test]
    fn cells_keep_their_coordinates() {
        let mut grid = Grid::new(10, 12);
        grid.set_type(3, 7, CellType::Wall);
        let cell = grid.cell_at(3, 7);
        assert_eq!(cell.position(), Point::new(3, 7));
        assert_eq!(cell.cell_type(), CellType::Wall);
        assert!(grid.cells().all(|c| !c.is_out_of_bounds()));
    }

    #[test]
    fn set_type_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(9, 9);
        grid.set_type(-1, -1, CellType::Wall);
        grid.set_type(9, 0, CellType::Wall);
        assert!(grid.cells().all(|c| c.cell_type() == CellType::Empty));
        assert_eq!(grid.cell_at(-1, -1).cell_type(), CellType::Empty);
    }

    #[test]
    fn start_cell_missing_before_generation() {
        let mut grid = Grid::new(9, 9);
        assert!(grid.start_cell().is_out_of_bounds());

        // Only the left column is searched
        grid.set_type(4, 0, CellType::Start);
        assert!(grid.start_cell().is_out_of_bounds());

        grid.set_type(0, 4, CellType::Start);
        assert_eq!(grid.start_cell().position(), Point::new(0, 4));
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let grid = Grid::new(9, 9);
        let neighbors: Vec<Point> = grid
            .neighbors_of(grid.cell_at(4, 4))
            .iter()
            .map(|c| c.position())
            .collect();
        assert_eq!(
            neighbors,
            vec![
                Point::new(5, 4),
                Point::new(3, 4),
                Point::new(4, 5),
                Point::new(4, 3)
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let mut grid = Grid::new(9, 9);
        grid.set_type(1, 0, CellType::Wall);
        let neighbors: Vec<Point> = grid
            .neighbors_of(grid.cell_at(0, 0))
            .iter()
            .map(|c| c.position())
            .collect();
        assert_eq!(neighbors, vec![Point::new(0, 1)]);

        assert!(grid.neighbors_of(&Cell::out_of_bounds()).is_empty());
    }

    #[test]
    fn visited_only_once() {
        let mut grid = Grid::new(9, 9);
        assert!(grid.mark_visited(Point::new(2, 2)));
        assert!(!grid.mark_visited(Point::new(2, 2)));
        assert!(grid.cell_at(2, 2).is_visited());
        assert!(!grid.mark_visited(Point::new(-1, -1)));
    }

    #[test]
    fn predecessor_is_overwritten() {
        let mut grid = Grid::new(9, 9);
        let child = Point::new(2, 2);
        assert!(grid.predecessor_of(child).is_none());

        grid.record_predecessor(child, Point::new(1, 2));
        grid.record_predecessor(child, Point::new(2, 1));
        assert_eq!(grid.predecessor_count(), 1);
        assert_eq!(
            grid.predecessor_of(child).map(|c| c.position()),
            Some(Point::new(2, 1))
        );

        grid.record_predecessor(Point::new(-1, -1), child);
        assert_eq!(grid.predecessor_count(), 1);
    }

    #[test]
    fn clear_resets_cells_and_predecessors() {
        let mut grid = Grid::new(12, 15);
        grid.set_type(3, 3, CellType::Wall);
        grid.set_type(4, 0, CellType::Start);
        grid.mark_visited(Point::new(3, 4));
        grid.record_predecessor(Point::new(3, 4), Point::new(3, 5));

        grid.clear();

        assert_eq!((grid.width(), grid.height()), (12, 15));
        assert!(grid
            .cells()
            .all(|c| c.cell_type() == CellType::Empty && !c.is_visited()));
        assert_eq!(grid.predecessor_count(), 0);
    }

    #[test]
    fn render_uses_glyphs() {
        let mut grid = Grid::new(9, 9);
        grid.set_type(0, 0, CellType::Wall);
        grid.set_type(1, 0, CellType::Start);
        grid.set_type(2, 0, CellType::Goal);
        grid.set_type(3, 0, CellType::SearchMarked);

        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Grid:");
        assert_eq!(lines[1], format!("# S X O {}", " ".repeat(10)));
        assert_eq!(lines[2], " ".repeat(18));
    }
}
