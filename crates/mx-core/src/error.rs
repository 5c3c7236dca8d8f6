use thiserror::Error;

#[derive(Error, Debug)]
pub enum MxError {
    #[error("Metadata type not supported: {type_name}")]
    UnsupportedType { type_name: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Mixed input: {0}")]
    MixedInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MxError {
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MxError>;
