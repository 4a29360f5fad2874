/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for tree construction and synthesis.

use crate::node::NodeId;
use crate::outputs::FieldKind;
use thiserror::Error;

/// Failure to write one field of an outputs shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The shape listed a field it does not know how to set.
    #[error("Unknown output field: {field}")]
    UnknownField { field: String },

    /// The value offered does not match the kind the shape declared.
    #[error("Output field '{field}' cannot be assigned a {offered:?} value")]
    KindMismatch { field: String, offered: FieldKind },

    /// An embedded field expected props of another concrete type.
    #[error("Output field '{field}' expects props of type {expected}")]
    PropsTypeMismatch {
        field: String,
        expected: &'static str,
    },
}

/// Errors raised while building a construct tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// Output reference generation could not write a field. Fatal for the
    /// whole build.
    #[error("Failed to wire outputs of '{node}': {source}")]
    Assignment {
        node: String,
        #[source]
        source: AssignmentError,
    },

    /// A scope option that would break the single-parent tree shape.
    #[error("Cannot scope '{node}': {reason}")]
    InvalidScope { node: String, reason: String },

    /// A node id that does not belong to this tree.
    #[error("No construct with {0} in this tree")]
    UnknownNode(NodeId),

    /// Outputs were missing or of a different type than requested.
    #[error("Construct '{node}' has no outputs of type {expected}")]
    MissingOutputs {
        node: String,
        expected: &'static str,
    },
}

/// Errors raised while synthesizing a tree into a document.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A props value could not be represented as JSON.
    #[error("Failed to serialize props of '{node}': {source}")]
    Serialization {
        node: String,
        #[source]
        source: serde_json::Error,
    },

    /// Rendering the finished document failed.
    #[error("Failed to render document: {0}")]
    Render(#[source] serde_json::Error),

    /// The rendered document was not valid UTF-8.
    #[error("Rendered document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("No construct with {0} in this tree")]
    UnknownNode(NodeId),
}

/// Result type for construction operations.
pub type Result<T> = std::result::Result<T, ConstructError>;

/// Result type for synthesis operations.
pub type SynthResult<T> = std::result::Result<T, SynthError>;
