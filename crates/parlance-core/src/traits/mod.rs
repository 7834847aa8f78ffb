mod preprocessor;

pub use preprocessor::IPreprocessor;
