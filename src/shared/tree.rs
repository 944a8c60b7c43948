//! Calculation tree reconstruction
//!
//! The API returns a thread's operation nodes as a flat list ordered by
//! creation time. [`OperationIndex`] groups that list by parent id once per
//! fetch so a renderer can walk the tree without repeated scans.
//!
//! Every parent id references a node created earlier in the same thread, so
//! the relation is acyclic and a plain depth-first walk terminates.

use std::collections::HashMap;

use uuid::Uuid;

use crate::shared::thread::OperationNode;

/// Parent id -> children index over one thread's operation nodes
///
/// `None` keys the children applied directly to the thread's seed value.
/// Children keep the order of the input list (creation order).
#[derive(Debug, Clone, Default)]
pub struct OperationIndex {
    children: HashMap<Option<Uuid>, Vec<OperationNode>>,
    len: usize,
}

/// A node paired with its depth below the thread root (root children are 1)
#[derive(Debug, Clone, Copy)]
pub struct IndexedNode<'a> {
    pub depth: usize,
    pub node: &'a OperationNode,
}

impl OperationIndex {
    /// Build the index from a flat, creation-ordered node list
    pub fn new(operations: &[OperationNode]) -> Self {
        let mut children: HashMap<Option<Uuid>, Vec<OperationNode>> = HashMap::new();
        for node in operations {
            children.entry(node.parent_id).or_default().push(node.clone());
        }
        Self {
            children,
            len: operations.len(),
        }
    }

    /// Children of `parent` (`None` for the thread root)
    pub fn children(&self, parent: Option<Uuid>) -> &[OperationNode] {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pre-order walk of the whole tree
    ///
    /// Nodes whose parent is missing from the list are unreachable and are
    /// not visited.
    pub fn walk(&self) -> Vec<IndexedNode<'_>> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<IndexedNode<'_>> = self
            .children(None)
            .iter()
            .rev()
            .map(|node| IndexedNode { depth: 1, node })
            .collect();

        while let Some(entry) = stack.pop() {
            out.push(entry);
            stack.extend(
                self.children(Some(entry.node.id))
                    .iter()
                    .rev()
                    .map(|node| IndexedNode {
                        depth: entry.depth + 1,
                        node,
                    }),
            );
        }
        out
    }
}
