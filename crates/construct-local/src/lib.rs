/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Local file providers for construct trees.
//!
//! Shapes follow the `local` provider's `local_file` resource and
//! `local_file` data source. Each provider function creates one construct
//! typed `Local/<Kind>` and returns its wired outputs.

pub mod file;
pub mod file_data;

pub use file::{FileOutputs, FileProps, file};
pub use file_data::{FileDataOutputs, FileDataProps, file_data};

use construct_graph::{ConstructTree, NodeId, Result, set_type, with_sub_builder};

/// Type namespace shared by every construct in this crate.
pub const PROVIDER: &str = "Local";

/// File read by the data source unless configured otherwise.
pub const DEFAULT_SOURCE: &str = "./go.mod";

/// File written with the source's content unless configured otherwise.
pub const DEFAULT_TARGET: &str = "./foo.txt";

/// Names used by [`build_file_copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopy {
    /// File read by the data source.
    pub source: String,
    /// File written with the source's content.
    pub target: String,
}

impl Default for FileCopy {
    fn default() -> Self {
        FileCopy {
            source: DEFAULT_SOURCE.to_string(),
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

/// Build a `Root` tree that copies `source` into `target` by reference.
pub fn build_file_copy(config: &FileCopy) -> Result<(ConstructTree, NodeId)> {
    let mut tree = ConstructTree::new();
    let root = tree.create(
        "/",
        [
            set_type("Root"),
            with_sub_builder(|tree, root| {
                let src = file_data(
                    tree,
                    root,
                    "MyFileData",
                    FileDataProps {
                        filename: config.source.clone(),
                    },
                )?;
                file(
                    tree,
                    root,
                    "MyFile",
                    FileProps {
                        filename: config.target.clone(),
                        content: src.content,
                        ..Default::default()
                    },
                )?;
                Ok(())
            }),
        ],
    )?;
    tracing::debug!(constructs = tree.len(), "Built file copy tree");
    Ok((tree, root))
}
