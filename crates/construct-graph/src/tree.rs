/*
 * tree.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The construct arena.

use crate::error::{ConstructError, Result};
use crate::node::{ConstructNode, NodeId};
use crate::options::ConstructOption;

/// Owns every construct node; parent and child links are [`NodeId`]s.
#[derive(Debug, Default)]
pub struct ConstructTree {
    nodes: Vec<ConstructNode>,
}

impl ConstructTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        ConstructTree { nodes: Vec::new() }
    }

    /// Create a construct and apply `options` in the order given.
    ///
    /// The node starts with no parent, no children, an empty type, and no
    /// props or outputs.
    ///
    /// # Errors
    ///
    /// Returns the first option failure. Every node added during the call,
    /// including children added by sub-builders, is removed again before the
    /// error is returned.
    pub fn create<'a, I>(&mut self, local_id: impl Into<String>, options: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = ConstructOption<'a>>,
    {
        let start = self.nodes.len();
        let node = NodeId(start);
        self.nodes.push(ConstructNode::new(local_id.into()));
        tracing::trace!(%node, local_id = %self.nodes[start].local_id, "Creating construct");

        for option in options {
            if let Err(err) = self.apply(node, option) {
                tracing::debug!(%node, error = %err, "Construct failed, rolling back");
                self.rollback(start);
                return Err(err);
            }
        }

        Ok(node)
    }

    fn apply(&mut self, node: NodeId, option: ConstructOption<'_>) -> Result<()> {
        match option {
            ConstructOption::Scope(parent) => self.attach(parent, node),
            ConstructOption::Type(tag) => {
                let current = &mut self.nodes[node.0].type_tag;
                if current.is_empty() {
                    *current = tag;
                } else {
                    current.push('/');
                    current.push_str(&tag);
                }
                Ok(())
            }
            ConstructOption::Props(props) => {
                self.nodes[node.0].props = Some(props);
                Ok(())
            }
            ConstructOption::Outputs(wire) => {
                let target = &mut self.nodes[node.0];
                let outputs = wire(&target.id, target.props.as_deref()).map_err(|source| {
                    ConstructError::Assignment {
                        node: target.id.clone(),
                        source,
                    }
                })?;
                target.outputs = Some(outputs);
                Ok(())
            }
            ConstructOption::SubBuilder(builder) => builder(self, node),
            ConstructOption::SubBuilderOutputs(builder) => {
                let outputs = builder(self, node)?;
                self.nodes[node.0].outputs = Some(outputs);
                Ok(())
            }
        }
    }

    /// Attach `child` as the last child of `parent` and derive its path.
    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child {
            return Err(ConstructError::InvalidScope {
                node: self.nodes[child.0].id.clone(),
                reason: "a construct cannot be scoped under itself".to_string(),
            });
        }
        if let Some(existing) = self.nodes[child.0].parent {
            return Err(ConstructError::InvalidScope {
                node: self.nodes[child.0].id.clone(),
                reason: format!("already scoped under '{}'", self.nodes[existing.0].id),
            });
        }
        if self.get(parent).is_none() {
            return Err(ConstructError::UnknownNode(parent));
        }
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(ConstructError::InvalidScope {
                    node: self.nodes[child.0].id.clone(),
                    reason: format!(
                        "'{}' is one of its descendants",
                        self.nodes[parent.0].id
                    ),
                });
            }
            ancestor = self.nodes[current.0].parent;
        }

        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.push(child);
        let parent_path = parent_node.id.clone();

        let child_node = &mut self.nodes[child.0];
        child_node.parent = Some(parent);
        child_node.id = join_path(&parent_path, &child_node.id);
        tracing::debug!(id = %child_node.id, parent = %parent_path, "Scoped construct");
        Ok(())
    }

    /// Drop every node at index `start` or later and unlink it from its parent.
    fn rollback(&mut self, start: usize) {
        self.nodes.truncate(start);
        for node in &mut self.nodes {
            node.children.retain(|child| child.0 < start);
        }
    }

    /// Node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree. Use [`get`](Self::get)
    /// for a checked lookup.
    pub fn node(&self, id: NodeId) -> &ConstructNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&ConstructNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    /// Typed outputs of `id`, as providers hand them back to their callers.
    pub fn outputs<T: 'static>(&self, id: NodeId) -> Result<&T> {
        let node = self.get(id).ok_or(ConstructError::UnknownNode(id))?;
        node.outputs_as::<T>()
            .ok_or_else(|| ConstructError::MissingOutputs {
                node: node.id.clone(),
                expected: std::any::type_name::<T>(),
            })
    }
}

/// Join a parent path and a child id.
///
/// The first `"//"` in the result, if any, collapses to `"/"`, so a child of
/// the root `"/"` becomes `"/child"`. Only that one occurrence is replaced.
pub fn join_path(parent: &str, child: &str) -> String {
    format!("{}/{}", parent, child).replacen("//", "/", 1)
}
