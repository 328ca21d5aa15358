//! Library side of the `csvnorm` binary: configuration, logging and the
//! normalization pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
