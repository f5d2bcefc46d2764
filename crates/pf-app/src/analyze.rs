//! Pipeline analysis: node/edge counts plus the DAG verdict.

use pf_graph::{GraphBuilder, is_acyclic};
use tracing::info;

use crate::error::AppResult;
use crate::schema::{PipelineRequest, PipelineResponse};

/// Analyze a submitted pipeline.
///
/// Counts reflect the submitted lists exactly — edges dropped during graph
/// construction (unknown source) still count. The verdict comes from cycle
/// detection over the adjacency index. Infallible today; the `Result`
/// keeps the service-layer signature uniform for frontends.
pub fn analyze_pipeline(request: &PipelineRequest) -> AppResult<PipelineResponse> {
    let num_nodes = request.nodes.len();
    let num_edges = request.edges.len();
    info!(num_nodes, num_edges, "received pipeline");

    let mut builder = GraphBuilder::new();
    for node in &request.nodes {
        builder.add_node(node.id.as_str());
    }
    for edge in &request.edges {
        builder.add_edge(edge.source.as_str(), edge.target.as_str());
    }
    let is_dag = is_acyclic(&builder.build());

    let message = if is_dag {
        "Pipeline parsed successfully. Graph is a DAG."
    } else {
        "Pipeline parsed successfully. Graph contains cycles."
    };

    Ok(PipelineResponse {
        num_nodes,
        num_edges,
        is_dag,
        message: Some(message.to_string()),
    })
}
