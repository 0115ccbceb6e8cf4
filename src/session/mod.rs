//! Session management for tabbed command execution.
//!
//! Each tab owns a [`Session`]: a working directory plus command history.
//! The [`SessionManager`] creates sessions, routes commands to them, and
//! answers history navigation.

mod error;
mod manager;
mod state;

pub use error::SessionError;
pub use manager::SessionManager;
pub use state::{Session, SessionId, SessionSnapshot};
