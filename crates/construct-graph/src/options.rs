/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Construction options.
//!
//! [`ConstructTree::create`] takes a list of options and applies them left to
//! right. Each option mutates only the node being built, except [`scope`],
//! which also appends the node to its parent's children.

use crate::error::{AssignmentError, Result};
use crate::node::NodeId;
use crate::outputs::{OutputShape, wire_outputs};
use crate::props::PropsValue;
use crate::tree::ConstructTree;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// A single construction step.
pub enum ConstructOption<'a> {
    /// Attach to a parent and rewrite the id to the parent's path.
    Scope(NodeId),
    /// Compose a type tag onto the node's type.
    Type(String),
    /// Replace the node's props.
    Props(Box<dyn PropsValue>),
    /// Wire an outputs shape against the node's current id and props.
    Outputs(
        Box<
            dyn FnOnce(&str, Option<&dyn PropsValue>) -> std::result::Result<Box<dyn Any>, AssignmentError>
                + 'a,
        >,
    ),
    /// Build children under the node.
    SubBuilder(Box<dyn FnOnce(&mut ConstructTree, NodeId) -> Result<()> + 'a>),
    /// Build children under the node and use the result as its outputs.
    SubBuilderOutputs(Box<dyn FnOnce(&mut ConstructTree, NodeId) -> Result<Box<dyn Any>> + 'a>),
}

impl fmt::Debug for ConstructOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructOption::Scope(parent) => f.debug_tuple("Scope").field(parent).finish(),
            ConstructOption::Type(tag) => f.debug_tuple("Type").field(tag).finish(),
            ConstructOption::Props(props) => {
                f.debug_tuple("Props").field(&props.type_name()).finish()
            }
            ConstructOption::Outputs(_) => f.write_str("Outputs(..)"),
            ConstructOption::SubBuilder(_) => f.write_str("SubBuilder(..)"),
            ConstructOption::SubBuilderOutputs(_) => f.write_str("SubBuilderOutputs(..)"),
        }
    }
}

/// Attach the node as the last child of `parent`.
pub fn scope<'a>(parent: NodeId) -> ConstructOption<'a> {
    ConstructOption::Scope(parent)
}

/// Set the type, or append `"/" + tag` when a type is already present.
pub fn set_type<'a>(tag: impl Into<String>) -> ConstructOption<'a> {
    ConstructOption::Type(tag.into())
}

/// Assign the props value. The last assignment wins.
pub fn set_props<'a, P: Serialize + Any>(props: P) -> ConstructOption<'a> {
    ConstructOption::Props(Box::new(props))
}

/// Fill `shape` with reference strings and store it as the node's outputs.
///
/// Uses the id and props the node has when this option is applied, so it
/// belongs after [`scope`] and [`set_props`].
pub fn outputs<'a, O: OutputShape>(mut shape: O) -> ConstructOption<'a> {
    ConstructOption::Outputs(Box::new(
        move |node_id: &str, props: Option<&dyn PropsValue>| {
            wire_outputs(&mut shape, node_id, props)?;
            Ok(Box::new(shape) as Box<dyn Any>)
        },
    ))
}

/// Call `builder` with the node so it can create children under it.
pub fn with_sub_builder<'a, F>(builder: F) -> ConstructOption<'a>
where
    F: FnOnce(&mut ConstructTree, NodeId) -> Result<()> + 'a,
{
    ConstructOption::SubBuilder(Box::new(builder))
}

/// Like [`with_sub_builder`], but the builder's return value becomes the
/// node's outputs.
pub fn with_sub_builder_outputs<'a, O, F>(builder: F) -> ConstructOption<'a>
where
    O: Any,
    F: FnOnce(&mut ConstructTree, NodeId) -> Result<O> + 'a,
{
    ConstructOption::SubBuilderOutputs(Box::new(move |tree: &mut ConstructTree, node: NodeId| {
        let outputs = builder(tree, node)?;
        Ok(Box::new(outputs) as Box<dyn Any>)
    }))
}
