//! Session state
//!
//! A session is one tab's command context. Its mutable state sits behind a
//! per-session lock shared by the UI thread and in-flight command tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::context::SessionContext;

pub type SessionId = u64;

#[derive(Debug)]
pub struct Session {
    id: SessionId,
    context: Mutex<SessionContext>,
}

impl Session {
    /// New session rooted at the process's current directory.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            context: Mutex::new(SessionContext::new()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Lock the session's context.
    ///
    /// Every critical section leaves the context consistent, so a poisoned
    /// lock is recovered rather than propagated. Never hold the guard across
    /// an `.await`.
    pub fn context(&self) -> MutexGuard<'_, SessionContext> {
        self.context.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let ctx = self.context();
        SessionSnapshot {
            id: self.id,
            working_directory: ctx.working_directory().to_string(),
            history: ctx.history.entries().to_vec(),
            history_cursor: ctx.history.cursor(),
        }
    }
}

/// Point-in-time copy of a session for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub working_directory: String,
    /// Oldest first.
    pub history: Vec<String>,
    /// Offset from the newest entry while browsing history.
    pub history_cursor: Option<usize>,
}
