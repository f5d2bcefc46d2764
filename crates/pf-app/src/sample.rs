//! Fixed sample pipeline for the smoke-test endpoint.

use serde_json::{Map, Value};

use crate::schema::{EdgeData, NodeData, PipelineRequest, Position};

/// The canonical two-node sample: an input node feeding a text node.
///
/// The smoke-test endpoint runs this through the same analysis path as
/// real requests, so it doubles as living documentation of the payload
/// shape.
pub fn sample_pipeline() -> PipelineRequest {
    PipelineRequest {
        nodes: vec![
            NodeData {
                id: "1".to_string(),
                kind: "input".to_string(),
                position: Position { x: 100.0, y: 100.0 },
                data: label("Input Node"),
            },
            NodeData {
                id: "2".to_string(),
                kind: "text".to_string(),
                position: Position { x: 300.0, y: 100.0 },
                data: label("Text Node"),
            },
        ],
        edges: vec![EdgeData {
            id: "e1-2".to_string(),
            source: "1".to_string(),
            target: "2".to_string(),
            source_handle: Some("output".to_string()),
            target_handle: Some("input".to_string()),
        }],
    }
}

fn label(text: &str) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("label".to_string(), Value::String(text.to_string()));
    data
}
