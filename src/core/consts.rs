use crate::core::Direction;

pub const SCREEN_WIDTH: u32 = 900;
pub const SCREEN_HEIGHT: u32 = 950;
pub const HUD_HEIGHT: u32 = 50;
pub const ROW_DIVISIONS: u32 = 32;
pub const GRID_ROWS: i32 = 33;
pub const GRID_COLS: i32 = 30;

// sprite top-left to sprite centre
pub const SPRITE_X_OFFSET: i32 = 23;
pub const SPRITE_Y_OFFSET: i32 = 24;

pub const DANGER_RADIUS: u32 = 2;
pub const FAILSAFE_ORDER: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Up, Direction::Down];
pub const DEFAULT_SEARCH_ENGINE: &str = "astar";
