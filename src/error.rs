use std::io;

/// Errors surfaced by QuickGen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The system clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(#[from] arboard::Error),
    #[error("settings file error: {0}")]
    Io(#[from] io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
