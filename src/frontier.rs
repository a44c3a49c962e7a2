//! FIFO frontier for breadth-first search.

use std::collections::{HashMap, VecDeque};

use crate::error::SearchError;
use crate::node::SearchNode;

/// Queue of discovered but unexplored nodes.
///
/// Keeps a count of queued nodes per state next to the queue so
/// `contains_state` does not scan.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<SearchNode>,
    queued: HashMap<String, usize>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SearchNode) {
        *self.queued.entry(node.state.clone()).or_insert(0) += 1;
        self.queue.push_back(node);
    }

    pub fn empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.queued.contains_key(state)
    }

    /// Removes the earliest added node.
    pub fn remove(&mut self) -> Result<SearchNode, SearchError> {
        let node = self.queue.pop_front().ok_or(SearchError::EmptyFrontier)?;
        if let Some(count) = self.queued.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(&node.state);
            }
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_is_fifo() {
        let mut frontier = QueueFrontier::new();
        frontier.add(SearchNode::root("a"));
        frontier.add(SearchNode::child("b", 0, "m1"));

        assert_eq!(frontier.remove().unwrap().state, "a");
        assert_eq!(frontier.remove().unwrap().state, "b");
        assert!(frontier.empty());
    }

    #[test]
    fn test_remove_on_empty_frontier_fails() {
        let mut frontier = QueueFrontier::new();
        assert!(frontier.empty());
        assert_eq!(frontier.remove(), Err(SearchError::EmptyFrontier));

        frontier.add(SearchNode::root("a"));
        frontier.remove().unwrap();
        assert_eq!(frontier.remove(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_contains_state_tracks_queued_nodes_only() {
        let mut frontier = QueueFrontier::new();
        assert!(!frontier.contains_state("a"));

        frontier.add(SearchNode::root("a"));
        frontier.add(SearchNode::child("b", 0, "m1"));
        assert!(frontier.contains_state("a"));
        assert!(frontier.contains_state("b"));
        assert!(!frontier.contains_state("c"));

        frontier.remove().unwrap();
        assert!(!frontier.contains_state("a")); // removed
        assert!(frontier.contains_state("b"));
    }

    #[test]
    fn test_contains_state_with_duplicate_states() {
        let mut frontier = QueueFrontier::new();
        frontier.add(SearchNode::child("a", 0, "m1"));
        frontier.add(SearchNode::child("a", 0, "m2"));

        frontier.remove().unwrap();
        assert!(frontier.contains_state("a")); // second copy still queued
        frontier.remove().unwrap();
        assert!(!frontier.contains_state("a"));
    }
}
