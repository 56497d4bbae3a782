use serde::{Deserialize, Serialize};

/// Static content of one board cell. Tags 3 and above block the player.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Food,
    Capsule,
    WallVertical,
    WallHorizontal,
    WallArcNE,
    WallArcNW,
    WallArcSW,
    WallArcSE,
    GhostDoor,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid: Vec<Vec<CellContent>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GhostMarker {
    pub cell: GridCell,
    pub dead: bool,
}

/// Grid-level view of a game: the board plus where everything stands on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub board: Board,
    pub player: GridCell,
    pub ghosts: Vec<GhostMarker>,
    pub power_mode: bool,
}

/// Per-direction "currently unobstructed" flags reported by the movement system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TurnsAllowed(pub(crate) [bool; 4]);

pub enum StepUpdate {
    NextState(Level, StepChangeType),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepChangeType {
    PlayerMove,
    AteFood,
    AteCapsule,
}
