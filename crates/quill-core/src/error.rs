/// Errors that can occur in Quill operations.
///
/// The core has a single failure mode: a caller handed it an argument that
/// fails validation. Well-formed text of any length or content never errors.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QuillError {
    /// Build an `InvalidArgument` error from any displayable message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
