//! Parsing for the JSON directory tree format

pub mod node;

pub use node::Node;

use crate::error::ParseError;

/// Parse JSON source into a [`Node`] tree.
///
/// The root entry must be a folder, and every entry must carry a non-empty
/// name. Both conditions are validated after deserialization so that a
/// structurally valid but semantically broken document is rejected with a
/// specific error rather than rendered as garbage.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let root: Node = serde_json::from_str(source)
        .map_err(|err| ParseError::from_json(&err, source))?;
    validate(&root)?;
    Ok(root)
}

/// Serialize a tree back to pretty-printed JSON.
///
/// Round-trip counterpart of [`parse`]: re-parsing the output yields an
/// equal tree.
pub fn to_json(root: &Node) -> String {
    // Node serialization cannot fail: no maps with non-string keys, no
    // fallible Serialize impls.
    serde_json::to_string_pretty(root).unwrap_or_default()
}

fn validate(root: &Node) -> Result<(), ParseError> {
    if let Node::File { name, .. } = root {
        return Err(ParseError::RootNotFolder { name: name.clone() });
    }
    validate_names(root)
}

fn validate_names(node: &Node) -> Result<(), ParseError> {
    if node.name().is_empty() {
        return Err(ParseError::EmptyName {
            kind: if node.is_folder() { "folder" } else { "file" },
        });
    }
    for child in node.children() {
        validate_names(child)?;
    }
    Ok(())
}
