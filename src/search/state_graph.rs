use crate::search::SearchProblem;
use petgraph::graphmap::DiGraphMap;
use std::collections::VecDeque;

/// The explicit graph of every state reachable from a problem's initial state.
/// Nodes are states, edge weights are the actions that connect them.
pub struct StateGraph<S, A> {
    pub graph: DiGraphMap<S, A>,
    pub unvisited: VecDeque<S>,
}

pub enum PopulateResult {
    AllVisited,
    Populated,
}

impl<S, A> StateGraph<S, A>
where
    S: Copy + Ord + std::hash::Hash,
    A: Copy,
{
    pub fn new(initial: S) -> Self {
        let mut graph = DiGraphMap::new();
        graph.add_node(initial);
        StateGraph {
            graph,
            unvisited: VecDeque::from([initial]),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn populate_node<P>(&mut self, problem: &P, from: S)
    where
        P: SearchProblem<State = S, Action = A>,
    {
        for action in problem.actions(&from) {
            let to = problem.result(&from, action);
            if !self.graph.contains_node(to) {
                self.graph.add_node(to);
                self.unvisited.push_back(to);
            }
            self.graph.add_edge(from, to, action);
        }
    }

    pub fn populate_step<P>(&mut self, problem: &P) -> PopulateResult
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let Some(node) = self.unvisited.pop_front() else {
            return PopulateResult::AllVisited;
        };
        self.populate_node(problem, node);
        PopulateResult::Populated
    }

    /// Expands until nothing new is reachable. Finite state spaces always finish.
    pub fn populate_all<P>(&mut self, problem: &P)
    where
        P: SearchProblem<State = S, Action = A>,
    {
        while let PopulateResult::Populated = self.populate_step(problem) {}
    }
}
