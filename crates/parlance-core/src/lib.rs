//! # parlance-core
//!
//! Foundation crate for the Parlance utterance preprocessor.
//! Defines the result models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ParlanceConfig;
pub use errors::{ConfigError, ParlanceError, ParlanceResult};
pub use models::{Axis, Classification, InferredContext, Label, ProcessingResult};
pub use traits::IPreprocessor;
