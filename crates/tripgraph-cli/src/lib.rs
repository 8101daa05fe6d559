//! Pipeline wiring for the tripgraph binary

pub mod pipeline;

pub use pipeline::{run_pipeline, PipelineReport};
