use thiserror::Error;

/// Input-boundary failures. Everything past loading is infallible.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("expected a top-level JSON array of records")]
    JsonNotArray,

    #[error("record {0} is not a JSON object")]
    JsonNotObject(usize),
}
