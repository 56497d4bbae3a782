use crate::core::*;

/// Read-only view of the game handed to the planner once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub player: PixelPos,
    pub board: Board,
    pub ghosts: Vec<GhostState>,
    pub power_mode: bool,
    /// Only consulted by the failsafe.
    pub turns_allowed: TurnsAllowed,
    /// Returned unchanged when nothing else is possible.
    pub direction: Direction,
}

impl WorldSnapshot {
    /// Places every actor of a grid-level `level` at the centre of its cell.
    pub fn from_level(level: &Level, mapper: &GridCoordinateMapper, direction: Direction) -> Self {
        WorldSnapshot {
            player: mapper.to_world(level.player),
            board: level.board.clone(),
            ghosts: level
                .ghosts
                .iter()
                .map(|ghost| GhostState {
                    position: mapper.to_world(ghost.cell),
                    dead: ghost.dead,
                })
                .collect(),
            power_mode: level.power_mode,
            turns_allowed: turns_allowed(&level.board, level.player),
            direction,
        }
    }
}
