/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Construct nodes and their arena handles.

use crate::props::PropsValue;
use std::any::Any;
use std::fmt;

/// Handle to a node inside a [`ConstructTree`](crate::ConstructTree).
///
/// Handles are plain arena indices issued by the tree. They are only
/// meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena position of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

/// A named entity in the construct tree.
///
/// Parent and children are stored as [`NodeId`]s; the tree owns every node.
pub struct ConstructNode {
    pub(crate) id: String,
    pub(crate) local_id: String,
    pub(crate) type_tag: String,
    pub(crate) props: Option<Box<dyn PropsValue>>,
    pub(crate) outputs: Option<Box<dyn Any>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl ConstructNode {
    pub(crate) fn new(local_id: String) -> Self {
        ConstructNode {
            id: local_id.clone(),
            local_id,
            type_tag: String::new(),
            props: None,
            outputs: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Slash-delimited path identity, e.g. `/MyFileData`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The id this node was created with, before scoping rewrote it.
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Composed type tag, empty when no type was applied.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in attachment order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn props(&self) -> Option<&dyn PropsValue> {
        self.props.as_deref()
    }

    /// Props downcast to their concrete type.
    pub fn props_as<T: 'static>(&self) -> Option<&T> {
        self.props.as_ref()?.as_any().downcast_ref::<T>()
    }

    pub fn has_outputs(&self) -> bool {
        self.outputs.is_some()
    }

    /// Outputs downcast to their concrete type.
    pub fn outputs_as<T: 'static>(&self) -> Option<&T> {
        self.outputs.as_ref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for ConstructNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructNode")
            .field("id", &self.id)
            .field("type_tag", &self.type_tag)
            .field("props", &self.props.as_ref().map(|p| p.type_name()))
            .field("has_outputs", &self.outputs.is_some())
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
