/// Why a poll tick produced no new snapshot.
///
/// Every variant is recovered the same way: the stream keeps showing its
/// last good snapshot and the next tick tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
