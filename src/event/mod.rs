//! Event handling system for the application.
//!
//! Two channels feed the main loop:
//!
//! - **User Events**: keyboard and resize events read from the terminal on a
//!   dedicated thread, so input is never stuck behind other work
//! - **App Events**: notifications from background tasks, currently the
//!   result of each finished command
//!
//! # Submodules
//!
//! - `input`: maps key presses to actions on the input line and tabs

pub mod input;

use std::thread;

use std::io::Result;
use tokio::sync::mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender};

use crate::session::SessionId;
use crate::shell::ExecutionResult;

/// Type alias for user input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Initializes the user event stream.
///
/// Spawns a thread that blocks on `crossterm::event::read()` and forwards
/// every event. The thread ends once the receiver is dropped.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Application-wide events sent from background tasks to the main loop.
#[derive(Debug)]
#[non_exhaustive]
pub enum AppEvent {
    /// A submitted command has finished (or was handled without a process).
    CommandFinished {
        session_id: SessionId,
        result: ExecutionResult,
    },
}

/// Initializes the application event channel.
///
/// Unbounded because results arrive at most once per submitted command and
/// senders live on worker tasks that must never wait on the UI.
pub fn init_app_eventsource() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}
