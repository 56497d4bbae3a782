use crate::core::{Board, CellContent, Direction, GridCell, TurnsAllowed};
use crate::error::{PlannerError, Result};
use std::ops::Index;

impl CellContent {
    pub fn tag(&self) -> u8 {
        match self {
            CellContent::Empty => 0,
            CellContent::Food => 1,
            CellContent::Capsule => 2,
            CellContent::WallVertical => 3,
            CellContent::WallHorizontal => 4,
            CellContent::WallArcNE => 5,
            CellContent::WallArcNW => 6,
            CellContent::WallArcSW => 7,
            CellContent::WallArcSE => 8,
            CellContent::GhostDoor => 9,
        }
    }

    pub fn from_tag(tag: u8) -> Option<CellContent> {
        Some(match tag {
            0 => CellContent::Empty,
            1 => CellContent::Food,
            2 => CellContent::Capsule,
            3 => CellContent::WallVertical,
            4 => CellContent::WallHorizontal,
            5 => CellContent::WallArcNE,
            6 => CellContent::WallArcNW,
            7 => CellContent::WallArcSW,
            8 => CellContent::WallArcSE,
            9 => CellContent::GhostDoor,
            _ => return None,
        })
    }

    /// The ghost door counts as a wall here; only ghosts get through it.
    pub fn is_walkable(&self) -> bool {
        self.tag() < 3
    }

    pub fn is_pellet(&self) -> bool {
        matches!(self, CellContent::Food | CellContent::Capsule)
    }
}

impl GridCell {
    pub const fn new(row: i32, col: i32) -> Self {
        GridCell { row, col }
    }

    /// Plain Manhattan distance, no wraparound.
    pub fn manhattan_distance(&self, other: &GridCell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell one step away in `direction`. Horizontal moves off either edge of a
    /// `cols`-wide board come back in on the other side.
    pub fn neighbor(&self, direction: Direction, cols: i32) -> GridCell {
        let last_col = cols - 1;
        match direction {
            Direction::Up => GridCell::new(self.row - 1, self.col),
            Direction::Down => GridCell::new(self.row + 1, self.col),
            Direction::Left if self.col == 0 => GridCell::new(self.row, last_col),
            Direction::Left => GridCell::new(self.row, self.col - 1),
            Direction::Right if self.col == last_col => GridCell::new(self.row, 0),
            Direction::Right => GridCell::new(self.row, self.col + 1),
        }
    }

    /// Pulls a column that overshot the board while crossing the tunnel back into range.
    pub fn wrap_column(&self, cols: i32) -> GridCell {
        GridCell::new(self.row, self.col.rem_euclid(cols))
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    fn index(&self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl Board {
    pub fn new(grid: Vec<Vec<CellContent>>) -> Result<Self> {
        let Some(first) = grid.first() else {
            return Err(PlannerError::InvalidBoard { reason: "board has no rows".to_string() });
        };
        let width = first.len();
        if width == 0 {
            return Err(PlannerError::InvalidBoard { reason: "board has no columns".to_string() });
        }
        if let Some(i) = grid.iter().position(|row| row.len() != width) {
            return Err(PlannerError::InvalidBoard {
                reason: format!("row {} has {} cells, expected {}", i, grid[i].len(), width),
            });
        }
        Ok(Board { grid })
    }

    pub fn from_tags(rows: &[Vec<u8>]) -> Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (j, &tag) in row.iter().enumerate() {
                let Some(cell) = CellContent::from_tag(tag) else {
                    return Err(PlannerError::UnknownSymbol {
                        symbol: tag.to_string(),
                        row: i,
                        col: j,
                    });
                };
                cells.push(cell);
            }
            grid.push(cells);
        }
        Board::new(grid)
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        cell.row >= 0 && cell.row < self.height() && cell.col >= 0 && cell.col < self.width()
    }

    pub fn get(&self, cell: &GridCell) -> Option<CellContent> {
        if !self.contains(cell) {
            return None;
        }
        Some(self[*cell])
    }

    pub fn set(&mut self, cell: &GridCell, content: CellContent) {
        if self.contains(cell) {
            self.grid[cell.row as usize][cell.col as usize] = content;
        }
    }

    /// In bounds and not a wall. Says nothing about ghosts.
    pub fn is_walkable(&self, cell: &GridCell) -> bool {
        self.get(cell).is_some_and(|c| c.is_walkable())
    }

    /// Every food and capsule cell, in row-major order.
    pub fn food_cells(&self) -> Vec<GridCell> {
        let mut cells = Vec::new();
        for (i, row) in self.grid.iter().enumerate() {
            for (j, c) in row.iter().enumerate() {
                if c.is_pellet() {
                    cells.push(GridCell::new(i as i32, j as i32));
                }
            }
        }
        cells
    }

    pub fn has_food(&self) -> bool {
        self.grid.iter().flatten().any(|c| c.is_pellet())
    }
}

impl Index<GridCell> for Board {
    type Output = CellContent;

    fn index(&self, cell: GridCell) -> &Self::Output {
        &self.grid[cell.row as usize][cell.col as usize]
    }
}

impl TurnsAllowed {
    pub fn none() -> Self {
        TurnsAllowed([false; 4])
    }

    pub fn from_fn<F>(mut is_open: F) -> Self
    where
        F: FnMut(Direction) -> bool,
    {
        let mut turns = TurnsAllowed::none();
        for dir in Direction::ALL {
            turns.set(dir, is_open(dir));
        }
        turns
    }

    pub fn set(&mut self, direction: Direction, open: bool) {
        self.0[direction.index()] = open;
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    pub fn first_open(&self, order: &[Direction]) -> Option<Direction> {
        order.iter().copied().find(|&d| self.is_open(d))
    }
}

impl Index<Direction> for TurnsAllowed {
    type Output = bool;

    fn index(&self, direction: Direction) -> &Self::Output {
        &self.0[direction.index()]
    }
}
