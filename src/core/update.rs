use crate::core::{Board, CellContent, Direction, GridCell, Level, StepChangeType, StepUpdate, TurnsAllowed};

/// Grid-level stand-in for the movement system's open-direction check: a direction
/// is open when the neighbouring cell (wrapping horizontally) is not a wall.
pub fn turns_allowed(board: &Board, cell: GridCell) -> TurnsAllowed {
    TurnsAllowed::from_fn(|dir| board.is_walkable(&cell.neighbor(dir, board.width())))
}

/// Moves the player one cell and eats whatever is there. Ghosts stay where they are.
pub fn step(level: &Level, direction: Direction) -> StepUpdate {
    if !turns_allowed(&level.board, level.player)[direction] {
        return StepUpdate::Error("Cannot walk into a wall".to_string());
    }

    let player = level.player.neighbor(direction, level.board.width());
    let mut next = level.clone();
    next.player = player;

    let change = match level.board[player] {
        CellContent::Food => {
            next.board.set(&player, CellContent::Empty);
            StepChangeType::AteFood
        }
        CellContent::Capsule => {
            next.board.set(&player, CellContent::Empty);
            next.power_mode = true;
            StepChangeType::AteCapsule
        }
        _ => StepChangeType::PlayerMove,
    };

    StepUpdate::NextState(next, change)
}
