/// Convenience result type used across lcdpage.
pub type RenderResult<T> = Result<T, RenderError>;

/// Top-level error taxonomy used by rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// A precondition was violated: missing page, degenerate geometry or an undersized buffer.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A destination or intermediate buffer could not be allocated.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// The vector rasterizer failed, or the destination has an unsupported format.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Status codes reported across the rendering boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The call completed.
    Ok,
    /// See [`RenderError::InvalidArguments`].
    InvalidArguments,
    /// See [`RenderError::Unknown`].
    Unknown,
    /// See [`RenderError::OutOfMemory`].
    OutOfMemory,
}

impl ErrorCode {
    /// Collapse a rendering result into its boundary status code.
    pub fn of<T>(result: &RenderResult<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.code(),
        }
    }
}

impl RenderError {
    /// Build a [`RenderError::InvalidArguments`] value.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Build a [`RenderError::OutOfMemory`] value.
    pub fn out_of_memory(msg: impl Into<String>) -> Self {
        Self::OutOfMemory(msg.into())
    }

    /// Build a [`RenderError::Unknown`] value.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Boundary status code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArguments(_) => ErrorCode::InvalidArguments,
            Self::OutOfMemory(_) => ErrorCode::OutOfMemory,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    /// Re-tag any error as [`RenderError::Unknown`], keeping its message.
    ///
    /// Rasterizer failures all surface as `Unknown` regardless of their cause.
    pub(crate) fn into_unknown(self) -> Self {
        match self {
            Self::Unknown(_) => self,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
