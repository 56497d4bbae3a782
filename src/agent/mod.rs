//! Receding-horizon planning: one fresh A* search per tick, only the first move is kept.

mod report;
mod world;

pub use report::PlanReport;
pub use world::WorldSnapshot;

use crate::config::PlannerConfig;
use crate::core::*;
use crate::error::Result;
use crate::search::{SearchEngine, SearchEngineKind, SearchProblem};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A safe path to `goal` exists; `path` starts on the player's cell.
    Planned {
        direction: Direction,
        goal: GridCell,
        path: Vec<GridCell>,
    },
    /// No safe path. First open direction in failsafe order, hazards ignored.
    Failsafe(Direction),
    /// No safe path and no open direction; the current direction, which will not move.
    Stalled(Direction),
    /// Nothing left to eat.
    LevelComplete,
}

impl PlanOutcome {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            PlanOutcome::Planned { direction, .. } => Some(*direction),
            PlanOutcome::Failsafe(direction) | PlanOutcome::Stalled(direction) => Some(*direction),
            PlanOutcome::LevelComplete => None,
        }
    }
}

/// What the agent reads off a world snapshot before planning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perception {
    pub player: GridCell,
    pub hazards: HazardSet,
    /// Nearest food or capsule by plain Manhattan distance; `None` once the board is clear.
    pub goal: Option<GridCell>,
}

pub struct OnlinePlanningAgent<E = SearchEngineKind> {
    engine: E,
    mapper: GridCoordinateMapper,
    danger_radius: u32,
    failsafe_order: [Direction; 4],
}

impl OnlinePlanningAgent<SearchEngineKind> {
    /// Fails when the configured search engine is not available.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let engine = SearchEngineKind::resolve(&config.search_engine)?;
        Ok(OnlinePlanningAgent::with_engine(engine, config))
    }
}

impl<E: SearchEngine> OnlinePlanningAgent<E> {
    pub fn with_engine(engine: E, config: &PlannerConfig) -> Self {
        OnlinePlanningAgent {
            engine,
            mapper: GridCoordinateMapper::new(&config.geometry),
            danger_radius: config.danger_radius,
            failsafe_order: config.failsafe_order,
        }
    }

    pub fn mapper(&self) -> &GridCoordinateMapper {
        &self.mapper
    }

    pub fn danger_radius(&self) -> u32 {
        self.danger_radius
    }

    pub fn perceive(&self, world: &WorldSnapshot) -> Perception {
        let player = self.mapper.to_grid(world.player).wrap_column(world.board.width());
        let hazards = compute_hazards(&world.ghosts, world.power_mode, &self.mapper);
        let goal = nearest_food(&world.board, player);
        Perception { player, hazards, goal }
    }

    /// The move for this tick, or `None` when the level is complete.
    pub fn select_action(&self, world: &WorldSnapshot) -> Option<Direction> {
        self.plan(world).direction()
    }

    pub fn plan(&self, world: &WorldSnapshot) -> PlanOutcome {
        let perception = self.perceive(world);
        self.decide(world, &perception)
    }

    pub fn decide(&self, world: &WorldSnapshot, perception: &Perception) -> PlanOutcome {
        let Some(goal) = perception.goal else {
            log::info!("no food left on the board, level complete");
            return PlanOutcome::LevelComplete;
        };

        let problem = GridPathProblem::new(
            perception.player,
            goal,
            &world.board,
            &perception.hazards,
            self.danger_radius,
        );
        let solution = self.engine.search(&problem, |state| problem.heuristic(state));

        if let Some(solution) = solution {
            if let Some(direction) = solution.first_action() {
                log::debug!(
                    "{:?} -> {:?}: {} steps, first {:?}, {} hazards",
                    perception.player,
                    goal,
                    solution.len(),
                    direction,
                    perception.hazards.len()
                );
                return PlanOutcome::Planned {
                    direction,
                    goal,
                    path: solution.states,
                };
            }
        }

        match world.turns_allowed.first_open(&self.failsafe_order) {
            Some(direction) => {
                log::warn!(
                    "no safe path from {:?} to {:?} ({} hazards), failsafe {:?}",
                    perception.player,
                    goal,
                    perception.hazards.len(),
                    direction
                );
                PlanOutcome::Failsafe(direction)
            }
            None => {
                log::warn!("no safe path and no open direction at {:?}, keeping {:?}", perception.player, world.direction);
                PlanOutcome::Stalled(world.direction)
            }
        }
    }
}

/// Ties go to the first cell in row-major order. Walls and the tunnel are ignored,
/// so this can pick a pellet that is further away on foot than another candidate.
pub fn nearest_food(board: &Board, player: GridCell) -> Option<GridCell> {
    board
        .food_cells()
        .into_iter()
        .min_by_key(|food| player.manhattan_distance(food))
}
