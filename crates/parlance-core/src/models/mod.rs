mod classification;
mod inferred_context;
mod processing_result;
mod slang;

pub use classification::{Axis, Classification, Label};
pub use inferred_context::InferredContext;
pub use processing_result::ProcessingResult;
pub use slang::SlangCategory;
