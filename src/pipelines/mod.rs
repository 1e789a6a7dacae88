//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the OpenITI to ACT pipeline.
pub mod openiti;
pub mod pipeline;

pub use openiti::{Failure, Openiti2Act, Options, Report};
pub use pipeline::Pipeline;
