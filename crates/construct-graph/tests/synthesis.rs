/*
 * synthesis.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document shape, ordering and determinism of synthesized trees.
 */

use construct_graph::{
    AssignmentError, ConstructError, ConstructTree, FieldValue, NodeId, OutputField, OutputShape,
    Result, SynthOptions, outputs, scope, set_props, set_type, with_sub_builder,
    with_sub_builder_outputs,
};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct DataProps {
    #[serde(rename = "Filename")]
    filename: String,
}

#[derive(Debug, Default)]
struct DataOutputs {
    props: Option<DataProps>,
    content: String,
    content_base64: String,
}

impl OutputShape for DataOutputs {
    fn output_fields(&self) -> Vec<OutputField> {
        vec![
            OutputField::embedded("DataProps"),
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
            "DataProps" => self.props = value.into_props(name)?,
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

#[derive(Debug, Clone, Serialize)]
struct SinkProps {
    #[serde(rename = "Filename")]
    filename: String,
    #[serde(rename = "Content")]
    content: String,
}

fn data(tree: &mut ConstructTree, parent: NodeId, id: &str, props: DataProps) -> Result<NodeId> {
    tree.create(
        id,
        [
            scope(parent),
            set_type("Test/Data"),
            set_props(props),
            outputs(DataOutputs::default()),
        ],
    )
}

fn build_example() -> (ConstructTree, NodeId) {
    let mut tree = ConstructTree::new();
    let root = tree
        .create(
            "/",
            [
                set_type("Root"),
                with_sub_builder(|tree, root| {
                    let src = data(
                        tree,
                        root,
                        "MyFileData",
                        DataProps {
                            filename: "./go.mod".to_string(),
                        },
                    )?;
                    let content = tree.outputs::<DataOutputs>(src)?.content.clone();
                    tree.create(
                        "MyFile",
                        [
                            scope(root),
                            set_type("Test/Sink"),
                            set_props(SinkProps {
                                filename: "./foo.txt".to_string(),
                                content,
                            }),
                        ],
                    )?;
                    Ok(())
                }),
            ],
        )
        .unwrap();
    (tree, root)
}

fn assert_ordered_keys(value: &Value) {
    let object = value.as_object().expect("node must be an object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "type", "props", "children"]);
    let children = object["children"].as_array().expect("children must be an array");
    for child in children {
        assert_ordered_keys(child);
    }
}

#[test]
fn test_output_reference_flows_into_sibling_props() {
    let (tree, root) = build_example();

    let doc: Value = serde_json::from_str(&tree.to_json(root, &SynthOptions::compact()).unwrap()).unwrap();

    assert_eq!(doc["children"][0]["id"], "/MyFileData");
    assert_eq!(doc["children"][1]["id"], "/MyFile");
    assert_eq!(doc["children"][1]["props"]["Content"], "/MyFileData.Content");
}

#[test]
fn test_outputs_embed_props_and_references() {
    let (tree, root) = build_example();
    let src = tree.node(root).children()[0];

    let outputs = tree.outputs::<DataOutputs>(src).unwrap();

    assert_eq!(
        outputs.props,
        Some(DataProps {
            filename: "./go.mod".to_string()
        })
    );
    assert_eq!(outputs.content, "/MyFileData.Content");
    assert_eq!(outputs.content_base64, "/MyFileData.ContentBase64");
}

#[test]
fn test_every_node_has_ordered_keys() {
    let mut tree = ConstructTree::new();
    let root = tree.create("/", [set_type("Root")]).unwrap();
    let a = tree.create("A", [scope(root)]).unwrap();
    let b = tree.create("B", [scope(a), set_props(vec![1, 2, 3])]).unwrap();
    tree.create("C", [scope(b)]).unwrap();
    tree.create("D", [scope(root)]).unwrap();

    let json = tree.to_json(root, &SynthOptions::pretty(4)).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();

    assert_ordered_keys(&doc);
    assert_eq!(doc["children"][0]["children"][0]["children"][0]["id"], "/A/B/C");
}

#[test]
fn test_children_keep_attachment_order() {
    let mut tree = ConstructTree::new();
    let root = tree.create("/", []).unwrap();
    for name in ["Zebra", "Apple", "Mango", "Apple"] {
        tree.create(name, [scope(root)]).unwrap();
    }

    let doc = tree.synth(root).unwrap();
    let ids: Vec<&str> = doc.children.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, ["/Zebra", "/Apple", "/Mango", "/Apple"]);
}

#[test]
fn test_synthesis_is_idempotent() {
    let (tree, root) = build_example();
    let options = SynthOptions::pretty(4);

    let first = tree.to_json(root, &options).unwrap();
    let second = tree.to_json(root, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_independent_trees_are_identical() {
    let (left, left_root) = build_example();
    let (right, right_root) = build_example();

    assert_eq!(
        left.to_json(left_root, &SynthOptions::compact()).unwrap(),
        right.to_json(right_root, &SynthOptions::compact()).unwrap()
    );
}

#[test]
fn test_outputs_before_props_see_no_props() {
    let mut tree = ConstructTree::new();
    let node = tree
        .create(
            "Early",
            [
                outputs(DataOutputs::default()),
                set_props(DataProps {
                    filename: "late".to_string(),
                }),
            ],
        )
        .unwrap();

    let outputs = tree.outputs::<DataOutputs>(node).unwrap();
    assert_eq!(outputs.props, None);
    assert_eq!(outputs.content, "Early.Content");
}

#[test]
fn test_sub_builder_outputs_override_generated_outputs() {
    let mut tree = ConstructTree::new();
    let node = tree
        .create(
            "Composite",
            [
                outputs(DataOutputs::default()),
                with_sub_builder_outputs(|_, _| Ok("X".to_string())),
            ],
        )
        .unwrap();

    assert_eq!(tree.outputs::<String>(node).unwrap(), "X");
    assert!(matches!(
        tree.outputs::<DataOutputs>(node),
        Err(ConstructError::MissingOutputs { .. })
    ));
}

#[test]
fn test_generated_outputs_applied_last_win() {
    let mut tree = ConstructTree::new();
    let node = tree
        .create(
            "Composite",
            [
                with_sub_builder_outputs(|_, _| Ok("X".to_string())),
                outputs(DataOutputs::default()),
            ],
        )
        .unwrap();

    assert_eq!(
        tree.outputs::<DataOutputs>(node).unwrap().content,
        "Composite.Content"
    );
    assert!(matches!(
        tree.outputs::<String>(node),
        Err(ConstructError::MissingOutputs { .. })
    ));
}

#[test]
fn test_wrong_props_type_aborts_whole_build() {
    let mut tree = ConstructTree::new();

    let err = tree
        .create(
            "/",
            [with_sub_builder(|tree, root| {
                tree.create("Fine", [scope(root)])?;
                tree.create(
                    "Broken",
                    [
                        scope(root),
                        set_props("not data props".to_string()),
                        outputs(DataOutputs::default()),
                    ],
                )?;
                Ok(())
            })],
        )
        .unwrap_err();

    match err {
        ConstructError::Assignment { node, source } => {
            assert_eq!(node, "/Broken");
            assert!(matches!(source, AssignmentError::PropsTypeMismatch { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(tree.is_empty());
}
