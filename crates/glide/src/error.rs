use gcss::GcssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlideError {
    #[error("Style error: {0}")]
    Style(#[from] GcssError),

    #[error("Unknown variant `{0}`")]
    UnknownVariant(String),

    #[error("Variant `{0}` is private and cannot be selected")]
    PrivateVariant(String),

    #[error("Invalid component config: {0}")]
    Config(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GlideError>;
