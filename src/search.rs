//! Breadth-first search and path reconstruction

use std::collections::VecDeque;

use log::{debug, info, trace};
use rand::Rng;

use crate::{CellType, GeneratorConfig, Grid, MazeError, Point, Result};

/// Solution to the maze
#[derive(Debug)]
pub struct Solution {
    /// Goal cell reached by the search
    pub goal: Point,
    /// Cells from the goal back to, but not including, the start
    pub path: Vec<Point>,
    /// Number of mazes generated until one was solvable
    pub attempts: usize,
}

impl Solution {
    /// Length of the shortest path in steps
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Print report
    pub fn print_report(&self) {
        println!(
            "The shortest path is {} steps, found after {} generated maze(s).",
            self.steps(),
            self.attempts
        )
    }
}

/// Search outward from `start` until a goal cell is discovered
///
/// Cells are expanded first-in first-out, neighbors in the order of
/// [Grid::neighbors_of]. Every newly discovered cell is marked visited and
/// gets its discoverer recorded as predecessor. The first goal cell
/// discovered is returned; it lies at the smallest possible step count
/// from the start.
///
/// Returns `Ok(None)` when the reachable area holds no goal, and an error
/// if `start` is not a grid position.
pub fn breadth_first_search(grid: &mut Grid, start: Point) -> Result<Option<Point>> {
    if !grid.in_bounds(start.x, start.y) {
        return Err(MazeError::StartOutOfBounds {
            x: start.x,
            y: start.y,
        });
    }

    let mut frontier = VecDeque::new();
    grid.mark_visited(start);
    frontier.push_back(start);

    let mut expanded = 0;
    while let Some(current) = frontier.pop_front() {
        expanded += 1;
        let neighbors: Vec<Point> = grid
            .neighbors_of(grid.cell_at(current.x, current.y))
            .iter()
            .map(|cell| cell.position())
            .collect();
        trace!(
            "Expanding ({}, {}): {} neighbors",
            current.x,
            current.y,
            neighbors.len()
        );

        for neighbor in neighbors {
            if !grid.mark_visited(neighbor) {
                continue;
            }
            frontier.push_back(neighbor);
            grid.record_predecessor(neighbor, current);

            if grid.cell_at(neighbor.x, neighbor.y).cell_type() == CellType::Goal {
                debug!(
                    "Goal ({}, {}) found after expanding {} cells",
                    neighbor.x, neighbor.y, expanded
                );
                return Ok(Some(neighbor));
            }
        }
    }

    debug!("No goal reachable, expanded {} cells", expanded);
    Ok(None)
}

/// Walk predecessors back from `goal` to the start cell
///
/// The returned path begins with `goal` and ends with the cell next to
/// the start; the start itself is not included. Reverse it for
/// start-to-goal order.
///
/// Fails if the chain ends before a start cell, or runs longer than the
/// grid has cells.
pub fn reconstruct_path(grid: &Grid, goal: Point) -> Result<Vec<Point>> {
    let max_len = grid.width() * grid.height();
    let mut path = Vec::new();
    let mut current = *grid.cell_at(goal.x, goal.y);

    while current.cell_type() != CellType::Start {
        let broken = MazeError::BrokenPredecessorChain {
            x: current.x(),
            y: current.y(),
        };
        if current.is_out_of_bounds() || path.len() >= max_len {
            return Err(broken);
        }
        path.push(current.position());
        current = *grid.predecessor_of(current.position()).ok_or(broken)?;
    }
    Ok(path)
}

/// Mark every cell of `path` as [CellType::SearchMarked]
pub fn mark_path(grid: &mut Grid, path: &[Point]) {
    for point in path {
        grid.set_type(point.x, point.y, CellType::SearchMarked);
    }
}

/// Generate mazes until one is solvable, and solve it
///
/// Each attempt clears the grid, generates a new maze from `rng` and
/// searches it from its start cell. `on_unsolvable` is called with the
/// attempt number after every failed attempt.
///
/// With `max_attempts` of `None` the loop only ends once a maze is
/// solved. The default generation settings make that happen within a few
/// attempts, but settings that never produce a reachable goal will loop
/// forever.
///
/// ## Arguments
/// - `grid`: Grid to generate into. Holds the solved maze on return.
/// - `rng`: Random source, advanced by every attempt.
/// - `config`: Generation settings.
/// - `max_attempts`: Optional cap on generated mazes.
/// - `on_unsolvable`: Notification for each unsolvable maze.
pub fn solve<R, F>(
    grid: &mut Grid,
    rng: &mut R,
    config: &GeneratorConfig,
    max_attempts: Option<usize>,
    mut on_unsolvable: F,
) -> Result<Solution>
where
    R: Rng,
    F: FnMut(usize),
{
    let mut attempts = 0;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(MazeError::AttemptsExhausted(attempts));
        }
        attempts += 1;

        grid.clear();
        grid.generate_with(rng, config);
        let start = grid.start_cell().position();

        if let Some(goal) = breadth_first_search(grid, start)? {
            let path = reconstruct_path(grid, goal)?;
            info!(
                "Solved maze on attempt {}: {} steps to ({}, {})",
                attempts,
                path.len(),
                goal.x,
                goal.y
            );
            return Ok(Solution {
                goal,
                path,
                attempts,
            });
        }

        info!("Attempt {}: generated maze has no path", attempts);
        on_unsolvable(attempts);
    }
}
