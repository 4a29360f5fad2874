/*
 * file_data.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `Local/FileData`: reads an existing file.

use crate::PROVIDER;
use construct_graph::{
    AssignmentError, ConstructTree, FieldValue, NodeId, OutputField, OutputShape, Result,
    outputs, scope, set_props, set_type,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileDataProps {
    pub filename: String,
}

/// References to the file's content, resolved by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDataOutputs {
    pub props: Option<FileDataProps>,
    pub content: String,
    pub content_base64: String,
}

impl OutputShape for FileDataOutputs {
    fn output_fields(&self) -> Vec<OutputField> {
        vec![
            OutputField::embedded("FileDataProps"),
            OutputField::text("Content"),
            OutputField::text("ContentBase64"),
        ]
    }

    fn set_output_field(
        &mut self,
        name: &str,
        value: FieldValue<'_>,
    ) -> std::result::Result<(), AssignmentError> {
        match name {
            "FileDataProps" => self.props = value.into_props(name)?,
            "Content" => self.content = value.into_reference(name)?,
            "ContentBase64" => self.content_base64 = value.into_reference(name)?,
            _ => {
                return Err(AssignmentError::UnknownField {
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Declare a `Local/FileData` construct under `parent`.
pub fn file_data(
    tree: &mut ConstructTree,
    parent: NodeId,
    id: &str,
    props: FileDataProps,
) -> Result<FileDataOutputs> {
    let node = tree.create(
        id,
        [
            scope(parent),
            set_type(PROVIDER),
            set_type("FileData"),
            set_props(props),
            outputs(FileDataOutputs::default()),
        ],
    )?;
    tree.outputs::<FileDataOutputs>(node).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_data_references() {
        let mut tree = ConstructTree::new();
        let root = tree.create("/", []).unwrap();

        let outputs = file_data(
            &mut tree,
            root,
            "MyFileData",
            FileDataProps {
                filename: "./go.mod".to_string(),
            },
        )
        .unwrap();

        assert_eq!(outputs.content, "/MyFileData.Content");
        assert_eq!(outputs.content_base64, "/MyFileData.ContentBase64");
        assert_eq!(
            outputs.props.map(|p| p.filename),
            Some("./go.mod".to_string())
        );
    }
}
