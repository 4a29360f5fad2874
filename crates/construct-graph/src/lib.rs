/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Construct trees for infrastructure descriptions.
//!
//! A construct is a named, resource-like node carrying an opaque props value
//! and a set of generated output references. Constructs are composed into a
//! tree by scoping, which derives each node's slash-delimited path identity
//! from its parent. The finished tree is synthesized into an ordered JSON
//! document for downstream generators.
//!
//! # Architecture
//!
//! - [`ConstructTree`]: arena owning every [`ConstructNode`]; links are [`NodeId`]s
//! - [`ConstructOption`]: construction steps applied left to right by
//!   [`ConstructTree::create`]
//! - [`OutputShape`]: capability interface that lets outputs structs receive
//!   reference strings (`"<nodeId>.<Field>"`) and a copy of the node's props
//! - [`SynthNode`]: the ordered `id, type, props, children` document
//!
//! # Example
//!
//! ```rust
//! use construct_graph::{ConstructTree, SynthOptions, scope, set_props, set_type, with_sub_builder};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct BucketProps {
//!     name: String,
//! }
//!
//! let mut tree = ConstructTree::new();
//! let root = tree
//!     .create(
//!         "/",
//!         [
//!             set_type("Root"),
//!             with_sub_builder(|tree, root| {
//!                 tree.create(
//!                     "Assets",
//!                     [
//!                         scope(root),
//!                         set_type("Bucket"),
//!                         set_props(BucketProps { name: "assets".into() }),
//!                     ],
//!                 )?;
//!                 Ok(())
//!             }),
//!         ],
//!     )
//!     .unwrap();
//!
//! let json = tree.to_json(root, &SynthOptions::compact()).unwrap();
//! assert!(json.contains(r#""id":"/Assets""#));
//! ```

pub mod error;
pub mod node;
pub mod options;
pub mod outputs;
pub mod props;
pub mod synth;
pub mod tree;

pub use error::{AssignmentError, ConstructError, Result, SynthError, SynthResult};
pub use node::{ConstructNode, NodeId};
pub use options::{
    ConstructOption, outputs, scope, set_props, set_type, with_sub_builder,
    with_sub_builder_outputs,
};
pub use outputs::{FieldKind, FieldValue, OutputField, OutputShape, reference, wire_outputs};
pub use props::PropsValue;
pub use synth::{SynthNode, SynthOptions, render};
pub use tree::{ConstructTree, join_path};
