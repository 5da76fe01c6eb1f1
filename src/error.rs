use thiserror::Error;

/// All errors produced by the lookup core.
///
/// None of these are fatal to the extension: callers degrade to reduced
/// functionality (empty lookup table, fallback text, silently skipped copy).
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a dataset or settings file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The class dataset was not a JSON object of strings.
    #[error("malformed class dataset: {0}")]
    Dataset(#[source] serde_json::Error),

    /// A cross-context message did not match any known message kind.
    #[error("malformed message: {0}")]
    Message(#[source] serde_json::Error),

    /// Settings could not be decoded or written.
    #[error("settings error: {0}")]
    Settings(String),

    /// The receiving context (tab, content script) was not there.
    #[error("no receiving context: {0}")]
    Disconnected(String),

    /// The host failed to fetch a bundled resource.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand constructors.
impl Error {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn disconnected(msg: impl Into<String>) -> Self {
        Self::Disconnected(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}
