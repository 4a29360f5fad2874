/*
 * synth.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Synthesis of a construct tree into an ordered document.
//!
//! Every node becomes a record with exactly the keys `id`, `type`, `props`
//! and `children`, in that order. Children keep their attachment order.

use crate::error::{SynthError, SynthResult};
use crate::node::NodeId;
use crate::tree::ConstructTree;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One synthesized node.
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthNode {
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub props: Value,
    pub children: Vec<SynthNode>,
}

/// Rendering options for [`ConstructTree::to_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthOptions {
    /// Spaces per indentation level; `None` renders compact JSON.
    pub indent: Option<usize>,
}

impl SynthOptions {
    pub fn compact() -> Self {
        SynthOptions { indent: None }
    }

    pub fn pretty(indent: usize) -> Self {
        SynthOptions {
            indent: Some(indent),
        }
    }
}

impl ConstructTree {
    /// Materialize the subtree rooted at `root`, depth first.
    ///
    /// # Errors
    ///
    /// Fails with [`SynthError::Serialization`] on the first props value that
    /// cannot be represented as JSON. No partial document is returned.
    pub fn synth(&self, root: NodeId) -> SynthResult<SynthNode> {
        let node = self.get(root).ok_or(SynthError::UnknownNode(root))?;
        let props = match node.props() {
            Some(props) => props.to_json().map_err(|source| SynthError::Serialization {
                node: node.id().to_string(),
                source,
            })?,
            None => Value::Null,
        };
        let children = node
            .children()
            .iter()
            .map(|&child| self.synth(child))
            .collect::<SynthResult<Vec<_>>>()?;
        tracing::trace!(id = node.id(), children = children.len(), "Synthesized construct");

        Ok(SynthNode {
            id: node.id().to_string(),
            type_tag: node.type_tag().to_string(),
            props,
            children,
        })
    }

    /// Synthesize `root` and render it as a JSON string.
    pub fn to_json(&self, root: NodeId, options: &SynthOptions) -> SynthResult<String> {
        let document = self.synth(root)?;
        let rendered = render(&document, options)?;
        tracing::debug!(
            root = %document.id,
            bytes = rendered.len(),
            indent = ?options.indent,
            "Rendered construct document"
        );
        Ok(rendered)
    }
}

/// Render a synthesized document as JSON.
pub fn render(document: &SynthNode, options: &SynthOptions) -> SynthResult<String> {
    match options.indent {
        None => serde_json::to_string(document).map_err(SynthError::Render),
        Some(width) => {
            let indent = " ".repeat(width);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut out = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            document
                .serialize(&mut serializer)
                .map_err(SynthError::Render)?;
            Ok(String::from_utf8(out)?)
        }
    }
}
