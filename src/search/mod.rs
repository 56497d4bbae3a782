//! The seam between a search problem and whatever best-first engine solves it.
//!
//! A problem only describes its state space; engines are picked by name once at
//! startup through [`SearchEngineKind::resolve`].

mod astar;
mod state_graph;

pub use astar::PetgraphAStar;
pub use state_graph::{PopulateResult, StateGraph};

use crate::error::{PlannerError, Result};
use std::fmt::Debug;
use std::hash::Hash;

pub trait SearchProblem {
    type State: Copy + Ord + Hash + Debug;
    type Action: Copy + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Actions legal from `state`. Every one of them must be accepted by [`SearchProblem::result`].
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn path_cost(&self, cost_so_far: u32, from: &Self::State, action: Self::Action, to: &Self::State) -> u32;

    fn heuristic(&self, state: &Self::State) -> u32;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<S, A> {
    pub actions: Vec<A>,
    /// Visited states, starting with the initial state and ending on the goal.
    pub states: Vec<S>,
    pub cost: u32,
}

impl<S, A: Copy> Solution<S, A> {
    pub fn first_action(&self) -> Option<A> {
        self.actions.first().copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

pub trait SearchEngine {
    fn name(&self) -> &'static str;

    /// Runs to completion. `None` means the goal is unreachable from the initial state.
    fn search<P, H>(&self, problem: &P, heuristic: H) -> Option<Solution<P::State, P::Action>>
    where
        P: SearchProblem,
        H: Fn(&P::State) -> u32;
}

/// Engines known to the planner, resolved by name from config.
#[derive(Clone, Copy, Debug)]
pub enum SearchEngineKind {
    AStar(PetgraphAStar),
}

impl SearchEngineKind {
    pub const AVAILABLE: [&'static str; 1] = [PetgraphAStar::NAME];

    pub fn resolve(name: &str) -> Result<Self> {
        match name {
            PetgraphAStar::NAME => Ok(SearchEngineKind::AStar(PetgraphAStar)),
            _ => Err(PlannerError::SearchEngineUnavailable { name: name.to_string() }),
        }
    }
}

impl SearchEngine for SearchEngineKind {
    fn name(&self) -> &'static str {
        match self {
            SearchEngineKind::AStar(engine) => engine.name(),
        }
    }

    fn search<P, H>(&self, problem: &P, heuristic: H) -> Option<Solution<P::State, P::Action>>
    where
        P: SearchProblem,
        H: Fn(&P::State) -> u32,
    {
        match self {
            SearchEngineKind::AStar(engine) => engine.search(problem, heuristic),
        }
    }
}
