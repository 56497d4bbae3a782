use crate::core::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Screen and grid geometry used to map sprite pixels onto board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridGeometry {
    pub screen_width: u32,
    pub screen_height: u32,
    pub hud_height: u32,
    /// Vertical divisions of the playfield used for the cell height. The board itself has one more row.
    pub row_divisions: u32,
    pub rows: i32,
    pub cols: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        GridGeometry {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            hud_height: HUD_HEIGHT,
            row_divisions: ROW_DIVISIONS,
            rows: GRID_ROWS,
            cols: GRID_COLS,
            x_offset: SPRITE_X_OFFSET,
            y_offset: SPRITE_Y_OFFSET,
        }
    }
}

impl GridGeometry {
    pub fn cell_width(&self) -> u32 {
        self.screen_width / self.cols.max(1) as u32
    }

    pub fn cell_height(&self) -> u32 {
        self.screen_height.saturating_sub(self.hud_height) / self.row_divisions.max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub geometry: GridGeometry,
    pub danger_radius: u32,
    pub failsafe_order: [Direction; 4],
    pub search_engine: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            geometry: GridGeometry::default(),
            danger_radius: DANGER_RADIUS,
            failsafe_order: FAILSAFE_ORDER,
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = PlannerConfig::from_json(&text)?;
        log::debug!("loaded planner config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => PlannerConfig::load(path),
            None => Ok(PlannerConfig::default()),
        }
    }
}
