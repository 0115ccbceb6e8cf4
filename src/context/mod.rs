//! Per-session state: working directory and command history.
//!
//! A [`SessionContext`] is the mutable half of a session. The session layer
//! keeps it behind a lock so a command finishing on a worker task and the UI
//! thread browsing history never see it half-updated.

mod cwd;
mod history;

pub use cwd::CurrentDir;
pub use history::History;

/// Working directory and history of one session.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub cwd: CurrentDir,
    pub history: History,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// Fresh context rooted at the process's current directory.
    pub fn new() -> Self {
        Self {
            cwd: CurrentDir::capture().unwrap_or_default(),
            history: History::new(),
        }
    }

    /// Update the current working directory.
    pub fn update_cwd(&mut self, new_path: String) {
        self.cwd.update(new_path);
    }

    /// Add a command to history.
    pub fn add_to_history(&mut self, command: String) {
        self.history.push(command);
    }

    pub fn working_directory(&self) -> &str {
        &self.cwd.path
    }
}
