//! The directory tree data model

use serde::{Deserialize, Serialize};

/// A single entry in a directory tree: either a folder (container) or a
/// file (leaf).
///
/// The JSON representation is tagged by a `"type"` field:
///
/// ```json
/// {
///   "type": "folder",
///   "name": "src",
///   "children": [
///     { "type": "file", "name": "main.rs", "comment": "entry point" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    File {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

impl Node {
    /// Create a folder node with no comment
    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.into(),
            children,
            comment: None,
        }
    }

    /// Create a file node with no comment
    pub fn file(name: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            comment: None,
        }
    }

    /// Display name of this entry
    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Optional inline comment shown next to the entry
    pub fn comment(&self) -> Option<&str> {
        match self {
            Node::Folder { comment, .. } | Node::File { comment, .. } => comment.as_deref(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    /// Children of a folder; empty slice for files
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}
