//! pf-graph: graph/model layer for pipeflow.
//!
//! Provides:
//! - Pipeline graph model keyed by node identifier (`GraphBuilder`, `PipelineGraph`)
//! - Cycle detection over the adjacency index (`is_acyclic`)
//!
//! # Example
//!
//! ```
//! use pf_graph::{GraphBuilder, is_acyclic};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_node("a");
//! builder.add_node("b");
//! builder.add_edge("a", "b");
//! let graph = builder.build();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert!(is_acyclic(&graph));
//! ```

pub mod detect;
pub mod model;

// Re-exports for ergonomics
pub use detect::is_acyclic;
pub use model::{GraphBuilder, PipelineGraph};
