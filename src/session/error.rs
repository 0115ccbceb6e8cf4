//! Session Errors

use thiserror::Error;

use super::state::SessionId;

/// Errors returned by [`super::SessionManager`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Working directory path is empty")]
    EmptyPath,
}
