//! Wire schema for pipeline requests and responses.

use serde::{Deserialize, Serialize};

/// 2D canvas position of a node in the editor. Pass-through only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node as submitted by the editor.
///
/// Only `id` participates in the analysis; `kind`, `position`, and `data`
/// are carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// A directed edge as submitted by the editor.
///
/// Handles are sub-port labels on the editor side; the analysis ignores
/// them but they round-trip through responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeData {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle", default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(rename = "targetHandle", default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// Request body for pipeline analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineRequest {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

/// Analysis result returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineResponse {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
