//! Map generation

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{CellType, Grid};

/// Settings for carving a maze
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// A corridor candidate becomes a wall when its uniform draw from
    /// `[0, 1)` is greater than this value.
    pub wall_threshold: f64,
}

impl GeneratorConfig {
    pub const DEFAULT_WALL_THRESHOLD: f64 = 0.6;

    /// No random walls: every corridor candidate stays open
    pub fn open() -> Self {
        Self {
            wall_threshold: 1.0,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            wall_threshold: Self::DEFAULT_WALL_THRESHOLD,
        }
    }
}

/// Random source for generation: seeded if `seed` is given, from OS
/// entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    if let Some(state) = seed {
        StdRng::seed_from_u64(state)
    } else {
        StdRng::from_entropy()
    }
}

impl Grid {
    /// Generate a maze with default settings
    ///
    /// See [Self::generate_with].
    pub fn generate<R: Rng>(&mut self, rng: &mut R) {
        self.generate_with(rng, &GeneratorConfig::default())
    }

    /// Generate a maze with loops on a lattice of pillars
    ///
    /// The top and bottom rows and the left column are walls, the right
    /// column is goal. Inside, cells with two even coordinates are
    /// pillars, cells with two odd coordinates are open, and the rest
    /// are walled at random. A start cell is then placed on the left
    /// column, opposite the goal column.
    ///
    /// The same random stream always yields the same maze. Any previous
    /// search state is discarded.
    ///
    /// ## Arguments
    /// - `rng`: Random source, advanced by the generation.
    /// - `config`: Wall density settings.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R, config: &GeneratorConfig) {
        let width = self.width as i32;
        let height = self.height as i32;

        for cell in self.cells.iter_mut() {
            let (x, y) = (cell.x, cell.y);
            cell.cell_type = if y == 0 || y == height - 1 || x == 0 {
                CellType::Wall
            } else if x == width - 1 {
                CellType::Goal
            } else if x % 2 == 0 && y % 2 == 0 {
                CellType::Wall
            } else if (x % 2 == 0) != (y % 2 == 0) {
                if rng.gen::<f64>() > config.wall_threshold {
                    CellType::Wall
                } else {
                    CellType::Empty
                }
            } else {
                CellType::Empty
            };
            cell.visited = false;
        }
        self.predecessors.clear();

        // Entrance and exit
        let start_y = rng.gen_range(1..=height - 2);
        self.set_type(0, start_y, CellType::Start);
        self.set_type(width - 1, height - 2, CellType::Goal);

        debug!(
            "Generated {}x{} maze, start at (0, {}), {} walls",
            width,
            height,
            start_y,
            self.cells
                .iter()
                .filter(|c| c.cell_type == CellType::Wall)
                .count()
        );
    }
}
