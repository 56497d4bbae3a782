use crate::search::{SearchEngine, SearchProblem, Solution, StateGraph};
use petgraph::algo::astar;
use petgraph::visit::EdgeRef;

/// A* over the populated state graph, using `petgraph::algo::astar`.
/// The graph is filled before the search starts, so every reachable cell is visited each tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct PetgraphAStar;

impl PetgraphAStar {
    pub const NAME: &'static str = "astar";
}

impl SearchEngine for PetgraphAStar {
    fn name(&self) -> &'static str {
        PetgraphAStar::NAME
    }

    fn search<P, H>(&self, problem: &P, heuristic: H) -> Option<Solution<P::State, P::Action>>
    where
        P: SearchProblem,
        H: Fn(&P::State) -> u32,
    {
        let start = problem.initial_state();
        let mut state_graph = StateGraph::new(start);
        state_graph.populate_all(problem);
        log::trace!(
            "populated state graph: {} nodes, {} edges",
            state_graph.node_count(),
            state_graph.edge_count()
        );

        let graph = &state_graph.graph;
        let (cost, states) = astar(
            graph,
            start,
            |state| problem.is_goal(&state),
            |edge| problem.path_cost(0, &edge.source(), *edge.weight(), &edge.target()),
            |state| heuristic(&state),
        )?;

        let actions = states
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]).copied())
            .collect::<Option<Vec<_>>>()?;

        Some(Solution { actions, states, cost })
    }
}
