//! Breadth-first shortest path over the co-star graph.
//!
//! Paths alternate person and movie: each [`PathStep`] names the movie that
//! links the previous person to `person_id`. When several shortest paths
//! exist, the one returned depends on the order the neighbor function yields
//! pairs in. Every returned path is minimum length; which of the tied paths
//! comes back is not a bug.

use std::collections::HashSet;

use tracing::debug;

use crate::error::SearchError;
use crate::frontier::QueueFrontier;
use crate::node::{NodeArena, SearchNode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub movie_id: String,
    pub person_id: String,
}

impl PathStep {
    pub fn new(movie_id: &str, person_id: &str) -> Self {
        Self {
            movie_id: movie_id.to_string(),
            person_id: person_id.to_string(),
        }
    }
}

/// BFS engine over an injected neighbor lookup.
///
/// `neighbors(person_id)` yields `(movie_id, co_star_id)` pairs. Pairs where
/// the co-star is the person itself are harmless.
pub struct PathFinder<F> {
    neighbors: F,
}

impl<F, I> PathFinder<F>
where
    F: Fn(&str) -> I,
    I: IntoIterator<Item = (String, String)>,
{
    pub fn new(neighbors: F) -> Self {
        Self { neighbors }
    }

    /// Shortest chain of co-stars from `source` to `target`.
    ///
    /// Returns `Ok(Some(vec![]))` when `source == target` and `Ok(None)` when
    /// the two are not connected.
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Vec<PathStep>>, SearchError> {
        if source == target {
            return Ok(Some(Vec::new()));
        }

        let mut frontier = QueueFrontier::new();
        frontier.add(SearchNode::root(source));
        let mut explored: HashSet<String> = HashSet::new();
        let mut arena = NodeArena::new();
        debug!(source, target, "search started");

        while !frontier.empty() {
            let current = frontier.remove()?;
            explored.insert(current.state.clone());
            let neighbors = (self.neighbors)(&current.state);
            let current_id = arena.insert(current);

            for (movie_id, person_id) in neighbors {
                if person_id == target {
                    let goal = SearchNode::child(&person_id, current_id, &movie_id);
                    let path = arena.path_to(&goal);
                    debug!(explored = explored.len(), degrees = path.len(), "path found");
                    return Ok(Some(path));
                }
                if !explored.contains(&person_id) && !frontier.contains_state(&person_id) {
                    frontier.add(SearchNode::child(&person_id, current_id, &movie_id));
                }
            }
        }

        debug!(explored = explored.len(), "frontier exhausted, not connected");
        Ok(None)
    }
}
