use thiserror::Error;

use crate::global_constants;

/// What went wrong during an extraction, kept structured so callers can
/// branch on the kind. Rendering to user-facing text happens only at the
/// display boundary via [`ExtractError::render_for_display`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{}", global_constants::MISSING_IMAGE_NOTICE)]
    MissingInput,
    #[error("{message}")]
    Transport { message: String },
    #[error("backend returned HTTP {status}")]
    Backend { status: u16 },
    #[error("{message}")]
    MalformedResponse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractErrorKind {
    MissingInput,
    Transport,
    Backend,
    MalformedResponse,
}

impl ExtractError {
    pub fn kind(&self) -> ExtractErrorKind {
        match self {
            ExtractError::MissingInput => ExtractErrorKind::MissingInput,
            ExtractError::Transport { .. } => ExtractErrorKind::Transport,
            ExtractError::Backend { .. } => ExtractErrorKind::Backend,
            ExtractError::MalformedResponse { .. } => ExtractErrorKind::MalformedResponse,
        }
    }

    /// The `"Error: <description>"` string shown in the result panel.
    pub fn render_for_display(&self) -> String {
        format!("Error: {}", self)
    }
}
