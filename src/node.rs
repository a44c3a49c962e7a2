//! Search tree nodes and the arena that owns explored ones.

use crate::search::PathStep;

/// Index of a node inside a [`NodeArena`].
pub type NodeId = usize;

/// A person reached during the search.
///
/// `parent` and `action` are both `None` for the root and both `Some` for
/// every other node: `action` is the movie that links `state` to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: String,
    pub parent: Option<NodeId>,
    pub action: Option<String>,
}

impl SearchNode {
    pub fn root(state: &str) -> Self {
        Self {
            state: state.to_string(),
            parent: None,
            action: None,
        }
    }

    pub fn child(state: &str, parent: NodeId, action: &str) -> Self {
        Self {
            state: state.to_string(),
            parent: Some(parent),
            action: Some(action.to_string()),
        }
    }
}

/// Explored nodes, stored by index so parent links never form pointer cycles.
///
/// A parent is always inserted before any of its children.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Steps from the root to `leaf`, root side first. The root itself
    /// contributes no step.
    pub fn path_to(&self, leaf: &SearchNode) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut node = leaf;
        while let (Some(action), Some(parent)) = (&node.action, node.parent) {
            steps.push(PathStep::new(action, &node.state));
            match self.nodes.get(parent) {
                Some(parent_node) => node = parent_node,
                None => break,
            }
        }
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_walks_parents_back_to_root() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root("a"));
        let b = arena.insert(SearchNode::child("b", root, "m1"));
        let c = SearchNode::child("c", b, "m2");

        let path = arena.path_to(&c);
        assert_eq!(path, vec![PathStep::new("m1", "b"), PathStep::new("m2", "c")]);
        assert_eq!(arena.len(), 2); // leaf was never inserted
    }

    #[test]
    fn test_path_to_root_is_empty() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root("a"));
        let root_node = arena.get(root).unwrap().clone();
        assert!(arena.path_to(&root_node).is_empty());
    }
}
