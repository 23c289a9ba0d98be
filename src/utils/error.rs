use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunnelError {
    #[error("Catalog request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Order submit failed with status {status}: {message}")]
    Submission {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Validation failed for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Cannot submit without a selected {which}")]
    MissingSelection { which: &'static str },

    #[error("A submission is already in flight")]
    SubmissionPending,

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FunnelError>;
