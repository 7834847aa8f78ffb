/// Configuration errors. All of them surface at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pattern in {table}: {pattern:?}: {reason}")]
    InvalidPattern {
        table: String,
        pattern: String,
        reason: String,
    },

    #[error("confidence {value} out of range [0, 1] in {table} for {label:?}")]
    ConfidenceOutOfRange {
        table: String,
        label: String,
        value: f64,
    },

    #[error("label {label:?} in {table} does not belong to the {axis} axis")]
    LabelAxisMismatch {
        table: String,
        label: String,
        axis: String,
    },

    #[error("empty {field} in {table}")]
    EmptyField { table: String, field: String },

    #[error("config parse failed: {reason}")]
    TomlParse { reason: String },

    #[error("config file unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },
}
