// ABOUTME: Node and NodeKind - the tagged-variant schema for codebase graph
// ABOUTME: nodes, plus NodeId, the deterministic path-hash identity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identity of a graph node, derived from its repo-relative path.
///
/// The id is the hex SHA-256 of the path, so it is stable across re-index
/// runs. A node that moves to a new path is a new node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Derive the id for a repo-relative path.
    pub fn from_path(path: &str) -> Self {
        use std::fmt::Write;

        let digest = Sha256::digest(path.as_bytes());
        let mut hex = String::with_capacity(64);
        for byte in digest {
            let _ = write!(hex, "{:02x}", byte);
        }
        Self(hex)
    }

    /// The hex digest string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind-specific attributes of a graph node.
///
/// Nodes form a containment tree: Codebase > Directory > File > Function/Class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of the containment tree, named after the repository.
    Codebase { name: String },
    Directory {
        /// Nesting depth relative to the repo root (root dirs are 1).
        depth: u32,
    },
    File {
        extension: String,
        size_bytes: u64,
    },
    Function {
        /// 1-based line number of the definition.
        line: u32,
    },
    Class {
        line: u32,
    },
}

impl NodeKind {
    /// The kind's wire name ("codebase", "directory", ...).
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Codebase { .. } => "codebase",
            NodeKind::Directory { .. } => "directory",
            NodeKind::File { .. } => "file",
            NodeKind::Function { .. } => "function",
            NodeKind::Class { .. } => "class",
        }
    }
}

/// A node in the codebase graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Repo-relative path. For Function/Class nodes this is
    /// "<file path>::<symbol name>".
    pub path: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Build a node for a path, deriving its id.
    pub fn new(path: impl Into<String>, kind: NodeKind) -> Self {
        let path = path.into();
        Self {
            id: NodeId::from_path(&path),
            path,
            kind,
        }
    }
}
