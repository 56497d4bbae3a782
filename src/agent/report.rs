use crate::agent::{Perception, PlanOutcome};
use crate::core::{Direction, GridCell};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Planned,
    Failsafe,
    Stalled,
    LevelComplete,
}

/// Flat, serialisable summary of one planning tick.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub outcome: OutcomeKind,
    pub direction: Option<Direction>,
    pub player: GridCell,
    pub goal: Option<GridCell>,
    pub path: Vec<GridCell>,
    pub hazards: Vec<GridCell>,
}

impl PlanReport {
    pub fn new(perception: &Perception, outcome: &PlanOutcome) -> Self {
        let (kind, path) = match outcome {
            PlanOutcome::Planned { path, .. } => (OutcomeKind::Planned, path.clone()),
            PlanOutcome::Failsafe(_) => (OutcomeKind::Failsafe, vec![]),
            PlanOutcome::Stalled(_) => (OutcomeKind::Stalled, vec![]),
            PlanOutcome::LevelComplete => (OutcomeKind::LevelComplete, vec![]),
        };
        PlanReport {
            outcome: kind,
            direction: outcome.direction(),
            player: perception.player,
            goal: perception.goal,
            path,
            hazards: perception.hazards.iter().copied().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
