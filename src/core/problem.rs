use crate::core::{Board, Direction, GridCell, HazardSet};
use crate::search::SearchProblem;

/// One tick's path-finding problem: reach `goal` from `start` without entering a
/// wall or any cell within `danger_radius` of a hazard. Built fresh every tick and
/// never mutated.
#[derive(Clone, Copy, Debug)]
pub struct GridPathProblem<'a> {
    pub start: GridCell,
    pub goal: GridCell,
    pub board: &'a Board,
    pub hazards: &'a HazardSet,
    pub danger_radius: u32,
}

impl<'a> GridPathProblem<'a> {
    pub fn new(start: GridCell, goal: GridCell, board: &'a Board, hazards: &'a HazardSet, danger_radius: u32) -> Self {
        GridPathProblem {
            start,
            goal,
            board,
            hazards,
            danger_radius,
        }
    }

    pub fn is_safe_and_walkable(&self, cell: &GridCell) -> bool {
        self.board.is_walkable(cell) && !self.hazards.threatens(cell, self.danger_radius)
    }

    /// Manhattan distance with the columns wrapping around the board's width.
    pub fn wrapped_distance(&self, from: &GridCell, to: &GridCell) -> u32 {
        let cols = self.board.width().unsigned_abs();
        let dc = from.col.abs_diff(to.col);
        from.row.abs_diff(to.row) + dc.min(cols.saturating_sub(dc))
    }
}

impl SearchProblem for GridPathProblem<'_> {
    type State = GridCell;
    type Action = Direction;

    fn initial_state(&self) -> GridCell {
        self.start
    }

    fn is_goal(&self, state: &GridCell) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &GridCell) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_safe_and_walkable(&self.result(state, dir)))
            .collect()
    }

    fn result(&self, state: &GridCell, action: Direction) -> GridCell {
        state.neighbor(action, self.board.width())
    }

    fn path_cost(&self, cost_so_far: u32, _from: &GridCell, _action: Direction, _to: &GridCell) -> u32 {
        cost_so_far + 1
    }

    fn heuristic(&self, state: &GridCell) -> u32 {
        self.wrapped_distance(state, &self.goal)
    }
}
