/*
 * file.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `Local/File`: a file written with the given content.

use crate::PROVIDER;
use construct_graph::{
    AssignmentError, ConstructTree, FieldValue, NodeId, OutputField, OutputShape, Result,
    outputs, scope, set_props, set_type,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileProps {
    pub sensitive_content: String,
    pub content_base64: String,
    pub filename: String,
    pub file_permission: String,
    pub directory_permission: String,
    pub source: String,
    pub content: String,
}

/// A file exposes nothing beyond its own inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutputs {
    pub props: Option<FileProps>,
}

impl OutputShape for FileOutputs {
    fn output_fields(&self) -> Vec<OutputField> {
        vec![OutputField::embedded("FileProps")]
    }

    fn set_output_field(
        &mut self,
        name: &str,
        value: FieldValue<'_>,
    ) -> std::result::Result<(), AssignmentError> {
        match name {
            "FileProps" => self.props = value.into_props(name)?,
            _ => {
                return Err(AssignmentError::UnknownField {
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Declare a `Local/File` construct under `parent`.
pub fn file(
    tree: &mut ConstructTree,
    parent: NodeId,
    id: &str,
    props: FileProps,
) -> Result<FileOutputs> {
    let node = tree.create(
        id,
        [
            scope(parent),
            set_type(PROVIDER),
            set_type("File"),
            set_props(props),
            outputs(FileOutputs::default()),
        ],
    )?;
    tree.outputs::<FileOutputs>(node).cloned()
}
