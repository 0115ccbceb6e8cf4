//! Session Manager
//!
//! Owns every open session, keyed by id in creation (tab) order, and routes
//! the presentation layer's requests to the right one.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::shell::{CommandExecutor, Submission};

use super::error::SessionError;
use super::state::{Session, SessionId, SessionSnapshot};

pub struct SessionManager {
    /// Ids only grow, so key order is creation order.
    sessions: BTreeMap<SessionId, Arc<Session>>,
    next_id: SessionId,
    executor: CommandExecutor,
}

impl SessionManager {
    pub fn new(executor: CommandExecutor) -> Self {
        Self {
            sessions: BTreeMap::new(),
            next_id: 1,
            executor,
        }
    }

    /// Open a new session rooted at the process's current directory.
    ///
    /// Ids start at 1 and are never reused, even after a session closes.
    pub fn create_session(&mut self) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;
        let session = Arc::new(Session::new(id));
        info!("Created session {} in {}", id, session.context().working_directory());
        self.sessions.insert(id, session);
        id
    }

    /// Forget a session.
    ///
    /// Commands already running keep their own handle on it and still
    /// report their results.
    pub fn close_session(&mut self, id: SessionId) -> Result<(), SessionError> {
        if self.sessions.remove(&id).is_none() {
            return Err(SessionError::NotFound(id));
        }
        info!("Closed session {}", id);
        Ok(())
    }

    /// Session ids in tab order.
    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().copied().collect()
    }

    pub fn get_session(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        Ok(self.session(id)?.snapshot())
    }

    /// Point a session at `path` without checking that it exists.
    ///
    /// A bad path shows up as an error the next time a command runs there.
    pub fn set_working_directory(&self, id: SessionId, path: &str) -> Result<(), SessionError> {
        if path.is_empty() {
            return Err(SessionError::EmptyPath);
        }
        self.session(id)?.context().update_cwd(path.to_string());
        info!("Session {} working directory set to {}", id, path);
        Ok(())
    }

    /// Submit a command to a session. See [`CommandExecutor::submit`].
    pub fn execute(&self, id: SessionId, command: &str) -> Result<Submission, SessionError> {
        let session = self.session(id)?;
        Ok(self.executor.submit(session, command))
    }

    /// Move one entry back in the session's history.
    pub fn navigate_up(&self, id: SessionId) -> Result<String, SessionError> {
        let entry = self.session(id)?.context().history.navigate_up();
        debug!("Session {} history up: {:?}", id, entry);
        Ok(entry)
    }

    /// Move one entry forward; empty once browsing ends.
    pub fn navigate_down(&self, id: SessionId) -> Result<String, SessionError> {
        let entry = self.session(id)?.context().history.navigate_down();
        debug!("Session {} history down: {:?}", id, entry);
        Ok(entry)
    }

    fn session(&self, id: SessionId) -> Result<&Arc<Session>, SessionError> {
        self.sessions.get(&id).ok_or(SessionError::NotFound(id))
    }
}
