use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrompterError {
    #[error("Prompt not found: {0}")]
    NotFound(String),

    #[error("Invalid GUID: {0}")]
    InvalidGuid(String),

    #[error("Prompt already exists under a different filename: {0}")]
    AlreadyExists(String),

    #[error("Name \"{0}\" matches {1} prompts; confirm to delete all, or select by GUID or filename")]
    AmbiguousName(String, usize),

    #[error("Malformed prompt file {0}: {1}")]
    Malformed(String, String),

    #[error("Library out of sync: {0}")]
    PartialSync(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PrompterError>;
