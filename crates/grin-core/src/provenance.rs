//! Provenance and schema descriptors attached to serialized reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every invariant report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Canonical hash of the graph the invariants were computed on.
    pub graph_hash: String,
    /// Solving method used for the set searches (`brute_force` or `ilp`).
    pub method: String,
    /// Optional deterministic seed when the graph was generated randomly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Creates a provenance record for the given graph hash and method.
    pub fn new(graph_hash: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            graph_hash: graph_hash.into(),
            method: method.into(),
            seed: None,
            tool_versions: BTreeMap::new(),
        }
    }

    /// Records the version of a tool involved in the run.
    pub fn with_tool(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.tool_versions.insert(name.into(), version.into());
        self
    }
}
