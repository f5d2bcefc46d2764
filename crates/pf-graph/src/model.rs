//! Pipeline graph model: node identifiers plus a prebuilt adjacency index.

use std::collections::HashMap;
use tracing::debug;

/// Builder for assembling a pipeline graph from a submitted node/edge list.
///
/// Call `add_node` and `add_edge` in request order, then `build()` to
/// freeze the adjacency index into an immutable [`PipelineGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    node_ids: Vec<String>,
    links: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node identifier.
    pub fn add_node(&mut self, id: impl Into<String>) {
        self.node_ids.push(id.into());
    }

    /// Record a directed edge from `source` to `target`.
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.links.push((source.into(), target.into()));
    }

    /// Freeze the builder into an immutable graph.
    ///
    /// Every node identifier gets an adjacency entry (possibly empty).
    /// Edges whose source was never added as a node are dropped without
    /// error. A repeated node identifier resets its adjacency entry (last
    /// write wins) and keeps its first-seen position in traversal order.
    pub fn build(self) -> PipelineGraph {
        let mut order = Vec::with_capacity(self.node_ids.len());
        let mut adjacency: HashMap<String, Vec<String>> =
            HashMap::with_capacity(self.node_ids.len());

        for id in self.node_ids {
            if adjacency.insert(id.clone(), Vec::new()).is_none() {
                order.push(id);
            }
        }

        let mut dropped = 0usize;
        for (source, target) in self.links {
            match adjacency.get_mut(&source) {
                Some(targets) => targets.push(target),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(dropped, "ignored edges with unknown source node");
        }

        PipelineGraph { order, adjacency }
    }
}

/// An immutable pipeline graph.
///
/// Stores node identifiers in submission order and the adjacency index
/// (node id -> successor ids in edge submission order). Built once per
/// request; traversal never mutates it.
#[derive(Debug, Clone)]
pub struct PipelineGraph {
    /// Distinct node identifiers, first-seen submission order.
    order: Vec<String>,
    /// Adjacency index. Invariant: one entry per identifier in `order`.
    adjacency: HashMap<String, Vec<String>>,
}

impl PipelineGraph {
    /// Node identifiers in first-seen submission order.
    pub fn node_ids(&self) -> &[String] {
        &self.order
    }

    /// Number of distinct node identifiers.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Successors of `id`, in edge submission order.
    ///
    /// Identifiers that were never submitted as nodes have no recorded
    /// successors.
    pub fn successors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Whether `id` was submitted as a node.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }
}
