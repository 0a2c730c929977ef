//! Application-level configuration.
//!
//! - [`PipelineParams`] — fan-out limits and source policy for the pipeline

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
