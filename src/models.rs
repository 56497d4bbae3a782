use crate::agent::PlanOutcome;
use crate::core::{GridCell, Level, StepChangeType};
use std::collections::BTreeSet;

pub struct PlanRenderState {
    pub level: Level,
    pub outcome: PlanOutcome,
    pub danger_zone: BTreeSet<GridCell>,
    pub won: bool,
    pub error: Option<String>,
    pub last_change: Option<StepChangeType>,
}

impl PlanRenderState {
    pub fn path(&self) -> &[GridCell] {
        match &self.outcome {
            PlanOutcome::Planned { path, .. } => path,
            _ => &[],
        }
    }

    pub fn status_line(&self) -> String {
        let outcome = match &self.outcome {
            PlanOutcome::Planned { direction, goal, path } => {
                format!("next {:?} toward ({}, {}), {} steps", direction, goal.row, goal.col, path.len().saturating_sub(1))
            }
            PlanOutcome::Failsafe(direction) => format!("no safe path, failsafe {:?}", direction),
            PlanOutcome::Stalled(direction) => format!("boxed in, holding {:?}", direction),
            PlanOutcome::LevelComplete => "level complete".to_string(),
        };
        let power = if self.level.power_mode { "power ON" } else { "power off" };
        match &self.last_change {
            Some(change) => format!("{} | {} | last: {:?}", outcome, power, change),
            None => format!("{} | {}", outcome, power),
        }
    }
}
