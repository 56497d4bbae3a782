mod consts;
mod grid_mapping;
mod hazards;
mod model_helpers;
mod models;
mod problem;
mod update;

pub use consts::*;
pub use grid_mapping::{GridCoordinateMapper, PixelPos};
pub use hazards::{compute_hazards, GhostState, HazardSet};
pub use models::{Board, CellContent, Direction, GhostMarker, GridCell, Level, StepChangeType, StepUpdate, TurnsAllowed};
pub use problem::GridPathProblem;
pub use update::{step, turns_allowed};
