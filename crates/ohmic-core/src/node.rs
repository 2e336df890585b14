//! Node identifiers and deterministic node-name indexing.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;

/// The reserved name of the ground node.
pub const GROUND_NAME: &str = "GND";

/// Unique identifier for a node in the circuit.
///
/// Ground is always node 0; every other node occupies MNA matrix
/// row/column `id - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The ground node (node 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw node ID value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Check if this is the ground node.
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// MNA matrix index for this node's voltage unknown (`None` for ground).
    pub fn matrix_index(self) -> Option<usize> {
        if self.is_ground() {
            None
        } else {
            Some((self.0 - 1) as usize)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "{}", GROUND_NAME)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Mapping from node names to node identifiers.
///
/// `GND` always maps to node 0, even when no element mentions it. Every
/// other name is numbered `1..` in ascending lexicographic order, so the
/// matrix layout is reproducible regardless of the order elements appear
/// in the netlist.
#[derive(Debug, Clone)]
pub struct NodeMap {
    ids: IndexMap<String, NodeId>,
}

impl NodeMap {
    /// Build a map from the node names collected out of a netlist.
    ///
    /// Duplicates are fine; `GND` may or may not be present in the input.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sorted: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        sorted.remove(GROUND_NAME);

        let mut ids = IndexMap::with_capacity(sorted.len() + 1);
        ids.insert(GROUND_NAME.to_string(), NodeId::GROUND);
        for (n, name) in sorted.into_iter().enumerate() {
            ids.insert(name, NodeId::new(n as u32 + 1));
        }
        Self { ids }
    }

    /// Look up a node by name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Number of distinct nodes, ground included.
    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    /// Number of node-voltage unknowns (ground excluded).
    pub fn num_unknowns(&self) -> usize {
        self.ids.len() - 1 // GND is always present
    }

    /// Iterate `(name, id)` pairs in index order, ground first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.ids.iter().map(|(name, id)| (name.as_str(), *id))
    }
}
