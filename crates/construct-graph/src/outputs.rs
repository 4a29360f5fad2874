/*
 * outputs.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Output reference generation.
//!
//! An outputs shape is a provider-defined struct that describes what a
//! construct exposes to other constructs. Before any real value exists, each
//! text field is filled with a reference string of the form
//! `"<nodeId>.<FieldName>"`, which a downstream generator later resolves.
//! An embedded field receives a copy of the node's own props, so a consumer
//! can read back the inputs it was given.
//!
//! Shapes describe their fields through [`OutputShape`] instead of runtime
//! reflection:
//!
//! ```rust
//! use construct_graph::{AssignmentError, FieldValue, OutputField, OutputShape};
//!
//! #[derive(Default)]
//! struct BucketOutputs {
//!     arn: String,
//! }
//!
//! impl OutputShape for BucketOutputs {
//!     fn output_fields(&self) -> Vec<OutputField> {
//!         vec![OutputField::text("Arn")]
//!     }
//!
//!     fn set_output_field(
//!         &mut self,
//!         name: &str,
//!         value: FieldValue<'_>,
//!     ) -> Result<(), AssignmentError> {
//!         match name {
//!             "Arn" => self.arn = value.into_reference(name)?,
//!             _ => return Err(AssignmentError::UnknownField { field: name.to_string() }),
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::AssignmentError;
use crate::props::PropsValue;
use std::any::Any;

/// How a field of an outputs shape is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// An inlined sub-shape that receives a copy of the node's props.
    Embedded,
    /// A string field that receives a reference string.
    Text,
    /// Any other field; left at its default value.
    Other,
}

/// One declared field of an outputs shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputField {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Fields that are not part of the public contract are skipped.
    pub exported: bool,
}

impl OutputField {
    pub fn embedded(name: &'static str) -> Self {
        OutputField {
            name,
            kind: FieldKind::Embedded,
            exported: true,
        }
    }

    pub fn text(name: &'static str) -> Self {
        OutputField {
            name,
            kind: FieldKind::Text,
            exported: true,
        }
    }

    pub fn other(name: &'static str) -> Self {
        OutputField {
            name,
            kind: FieldKind::Other,
            exported: true,
        }
    }

    /// Mark the field as internal so generation skips it.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// The value offered to a field during generation.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// The node's props, absent when none were set.
    Props(Option<&'a dyn Any>),
    /// A reference string for a text field.
    Reference(&'a str),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Props(_) => FieldKind::Embedded,
            FieldValue::Reference(_) => FieldKind::Text,
        }
    }

    /// Clone the node's props out as `P`.
    ///
    /// Returns `Ok(None)` when the node has no props.
    pub fn into_props<P: Clone + 'static>(self, field: &str) -> Result<Option<P>, AssignmentError> {
        match self {
            FieldValue::Props(None) => Ok(None),
            FieldValue::Props(Some(props)) => match props.downcast_ref::<P>() {
                Some(props) => Ok(Some(props.clone())),
                None => Err(AssignmentError::PropsTypeMismatch {
                    field: field.to_string(),
                    expected: std::any::type_name::<P>(),
                }),
            },
            other => Err(AssignmentError::KindMismatch {
                field: field.to_string(),
                offered: other.kind(),
            }),
        }
    }

    pub fn into_reference(self, field: &str) -> Result<String, AssignmentError> {
        match self {
            FieldValue::Reference(reference) => Ok(reference.to_string()),
            other => Err(AssignmentError::KindMismatch {
                field: field.to_string(),
                offered: other.kind(),
            }),
        }
    }
}

/// Capability interface for outputs shapes.
pub trait OutputShape: Any {
    /// Declared fields, in declaration order.
    fn output_fields(&self) -> Vec<OutputField>;

    /// Write one field. Called once per exported embedded or text field.
    fn set_output_field(&mut self, name: &str, value: FieldValue<'_>)
    -> Result<(), AssignmentError>;
}

/// Reference string pointing at `field` of the construct at `node_id`.
pub fn reference(node_id: &str, field: &str) -> String {
    format!("{}.{}", node_id, field)
}

/// Populate `shape` for the construct at `node_id` holding `props`.
///
/// Stops at the first field that cannot be written.
pub fn wire_outputs(
    shape: &mut dyn OutputShape,
    node_id: &str,
    props: Option<&dyn PropsValue>,
) -> Result<(), AssignmentError> {
    for field in shape.output_fields() {
        if !field.exported {
            continue;
        }
        match field.kind {
            FieldKind::Embedded => {
                let props = props.map(|p| p.as_any());
                shape.set_output_field(field.name, FieldValue::Props(props))?;
            }
            FieldKind::Text => {
                let target = reference(node_id, field.name);
                tracing::trace!(node = node_id, reference = %target, "Wiring output reference");
                shape.set_output_field(field.name, FieldValue::Reference(&target))?;
            }
            FieldKind::Other => {}
        }
    }
    Ok(())
}
