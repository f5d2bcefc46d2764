//! Shared application service layer for pipeflow.
//!
//! Centralizes the wire schema, the pipeline analysis operation, and the
//! unified error type so every frontend (the HTTP server today, other
//! bindings tomorrow) consumes the same behavior.

pub mod analyze;
pub mod error;
pub mod sample;
pub mod schema;

// Re-export key types for convenience
pub use analyze::analyze_pipeline;
pub use error::{AppError, AppResult};
pub use sample::sample_pipeline;
pub use schema::{EdgeData, NodeData, PipelineRequest, PipelineResponse, Position};
