use crate::core::{Board, GridCell, GridCoordinateMapper, PixelPos};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GhostState {
    pub position: PixelPos,
    pub dead: bool,
}

/// Cells occupied by live ghosts at planning time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardSet {
    cells: BTreeSet<GridCell>,
}

impl HazardSet {
    pub fn empty() -> Self {
        HazardSet::default()
    }

    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = GridCell>,
    {
        HazardSet {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// True when some hazard is within `radius` steps (plain Manhattan) of `cell`.
    pub fn threatens(&self, cell: &GridCell, radius: u32) -> bool {
        self.cells.iter().any(|h| h.manhattan_distance(cell) <= radius)
    }

    /// Every board cell the planner will refuse to step into.
    pub fn danger_zone(&self, board: &Board, radius: u32) -> BTreeSet<GridCell> {
        let mut zone = BTreeSet::new();
        for row in 0..board.height() {
            for col in 0..board.width() {
                let cell = GridCell::new(row, col);
                if self.threatens(&cell, radius) {
                    zone.insert(cell);
                }
            }
        }
        zone
    }
}

/// Live ghost cells, or nothing at all while power mode is on.
pub fn compute_hazards(ghosts: &[GhostState], power_mode: bool, mapper: &GridCoordinateMapper) -> HazardSet {
    if power_mode {
        return HazardSet::empty();
    }
    HazardSet::from_cells(
        ghosts
            .iter()
            .filter(|ghost| !ghost.dead)
            .map(|ghost| mapper.to_grid(ghost.position)),
    )
}
