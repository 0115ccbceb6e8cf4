//! turminal - a tabbed command runner
//!
//! Every tab is a session with its own working directory and command
//! history. Commands run one-shot in the host shell on background tasks and
//! their captured output comes back as colored segments.
//!
//! This library provides:
//! - Session management (create, route, history navigation)
//! - Command execution with per-session `cd` tracking
//! - Context (working directory, history) for each session
//! - The terminal UI that drives it all
//!
//! # Example
//!
//! ```no_run
//! use turminal::config::ShellConfig;
//! use turminal::event::init_app_eventsource;
//! use turminal::session::SessionManager;
//! use turminal::shell::CommandExecutor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (event_sink, mut events) = init_app_eventsource();
//!     let executor = CommandExecutor::new(ShellConfig::default(), event_sink);
//!     let mut sessions = SessionManager::new(executor);
//!
//!     let id = sessions.create_session();
//!     sessions.execute(id, "cd /tmp").unwrap();
//!
//!     // Results arrive asynchronously as AppEvent::CommandFinished
//!     let _finished = events.recv().await;
//!     assert_eq!(sessions.navigate_up(id).unwrap(), "cd /tmp");
//! }
//! ```

pub mod app;
pub mod config;
pub mod context;
pub mod event;
pub mod session;
pub mod shell;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, InputMode};
pub use config::Config;
pub use event::{init_app_eventsource, AppEvent};
pub use session::{SessionError, SessionId, SessionManager, SessionSnapshot};
pub use shell::{CommandExecutor, ExecutionResult, Segment, SegmentKind, Submission};
