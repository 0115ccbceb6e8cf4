//! One-shot command execution against a session's working directory.
//!
//! Each command runs in a fresh, non-PTY shell subprocess:
//! - the command text goes to the host shell verbatim (`sh -c` / `cmd /C`)
//! - stdout and stderr are collected to completion, not streamed
//! - the working directory is passed to the child, never set process-wide
//!
//! Submission is synchronous and cheap; the process runs on its own tokio
//! task and its result is sent to the app as [`AppEvent::CommandFinished`].

use std::process::{Output, Stdio};
use std::sync::Arc;

use tokio::process::Command;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::ShellConfig;
use crate::context::CurrentDir;
use crate::event::AppEvent;
use crate::session::{Session, SessionId};

use super::error::ExecError;
use super::result::ExecutionResult;

const CLEAR_COMMAND: &str = "clear";
const CD_PREFIX: &str = "cd ";

/// Outcome of handing a command to the executor.
#[derive(Debug)]
pub enum Submission {
    /// Blank input: nothing recorded, nothing run.
    Ignored,
    /// Handled without spawning a process (`clear`).
    Ready(ExecutionResult),
    /// A shell process is running on a background task.
    Running(JoinHandle<ExecutionResult>),
}

impl Submission {
    /// Wait for the command's result.
    ///
    /// The same result is also delivered on the app event channel; this is
    /// for callers that would rather await it directly.
    pub async fn result(self) -> ExecutionResult {
        match self {
            Submission::Ignored => ExecutionResult::empty(),
            Submission::Ready(result) => result,
            Submission::Running(handle) => match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!("Command task did not complete: {}", e);
                    let mut result = ExecutionResult::empty();
                    result.push_error(&ExecError::TaskFailed(e.to_string()).to_string());
                    result
                }
            },
        }
    }
}

/// Runs commands for sessions and reports results to the app.
#[derive(Clone, Debug)]
pub struct CommandExecutor {
    shell: ShellConfig,
    event_sink: UnboundedSender<AppEvent>,
}

impl CommandExecutor {
    /// # Arguments
    /// * `shell` - Host shell invocation used for every command
    /// * `event_sink` - Channel receiving `AppEvent::CommandFinished`
    pub fn new(shell: ShellConfig, event_sink: UnboundedSender<AppEvent>) -> Self {
        Self { shell, event_sink }
    }

    /// Record `command` in the session and start running it.
    ///
    /// History is updated before this returns, so history order always
    /// follows submission order even when commands finish out of order.
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, session: &Arc<Session>, command: &str) -> Submission {
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return Submission::Ignored;
        }

        // Snapshot the directory under the same lock as the history append.
        let cwd = {
            let mut ctx = session.context();
            ctx.add_to_history(command.to_string());
            ctx.working_directory().to_string()
        };
        debug!(session_id = session.id(), cwd = %cwd, "Submitting command: {}", command);

        if trimmed == CLEAR_COMMAND {
            let result = ExecutionResult::clear_screen();
            deliver(&self.event_sink, session.id(), result.clone());
            return Submission::Ready(result);
        }

        let shell = self.shell.clone();
        let sink = self.event_sink.clone();
        let session = Arc::clone(session);
        let command = command.to_string();

        Submission::Running(tokio::spawn(async move {
            let result = run_command(&shell, &session, &command, &cwd).await;
            deliver(&sink, session.id(), result.clone());
            result
        }))
    }
}

fn deliver(sink: &UnboundedSender<AppEvent>, session_id: SessionId, result: ExecutionResult) {
    if let Err(e) = sink.send(AppEvent::CommandFinished { session_id, result }) {
        warn!("Failed to send CommandFinished event for session {}: {:?}", session_id, e);
    }
}

async fn run_command(
    shell: &ShellConfig,
    session: &Session,
    command: &str,
    cwd: &str,
) -> ExecutionResult {
    let mut result = ExecutionResult::for_input(command);

    match capture_output(shell, command, cwd).await {
        Ok(output) => {
            result.push_output(&String::from_utf8_lossy(&output.stdout));
            result.push_error(&String::from_utf8_lossy(&output.stderr));
        }
        Err(e) => {
            warn!(session_id = session.id(), "Command failed to run: {}", e);
            result.push_error(&e.to_string());
            return result;
        }
    }

    if let Some(target) = cd_target(command) {
        let base = CurrentDir { path: cwd.to_string() };
        match base.resolve(target) {
            Ok(resolved) => {
                session.context().update_cwd(resolved.clone());
                info!(session_id = session.id(), "Working directory changed to {}", resolved);
                result.new_working_directory = Some(resolved);
            }
            Err(source) => {
                let e = ExecError::DirectoryChangeFailed {
                    path: target.to_string(),
                    source,
                };
                warn!(session_id = session.id(), "{}", e);
                result.push_error(&e.to_string());
            }
        }
    }

    result
}

/// Directory argument of a `cd <dir>` command, if that is what `command` is.
fn cd_target(command: &str) -> Option<&str> {
    command
        .trim()
        .strip_prefix(CD_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

async fn capture_output(
    shell: &ShellConfig,
    command: &str,
    cwd: &str,
) -> Result<Output, ExecError> {
    let mut c = Command::new(&shell.program);
    c.args(&shell.args).arg(command);
    c.current_dir(cwd);
    c.stdin(Stdio::null());
    c.stdout(Stdio::piped());
    c.stderr(Stdio::piped());

    let child = c.spawn().map_err(|source| ExecError::CommandLaunchFailed {
        program: shell.program.clone(),
        source,
    })?;

    child
        .wait_with_output()
        .await
        .map_err(ExecError::CommandIoFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::init_app_eventsource;
    use crate::shell::SegmentKind;

    #[test]
    fn test_cd_target_parsing() {
        assert_eq!(cd_target("cd /tmp"), Some("/tmp"));
        assert_eq!(cd_target("  cd   sub dir  "), Some("sub dir"));
        assert_eq!(cd_target("cd"), None);
        assert_eq!(cd_target("cd "), None);
        assert_eq!(cd_target("CD /tmp"), None);
        assert_eq!(cd_target("cdx /tmp"), None);
        assert_eq!(cd_target("echo cd /tmp"), None);
    }

    #[tokio::test]
    async fn test_submit_runs_and_delivers_event() {
        let (tx, mut rx) = init_app_eventsource();
        let executor = CommandExecutor::new(ShellConfig::default(), tx);
        let session = Arc::new(Session::new(7));

        let result = executor.submit(&session, "echo hello").result().await;
        assert_eq!(result.texts(SegmentKind::Input), vec!["echo hello"]);
        assert_eq!(result.texts(SegmentKind::Output), vec!["hello"]);

        match rx.recv().await {
            Some(AppEvent::CommandFinished { session_id, result: delivered }) => {
                assert_eq!(session_id, 7);
                assert_eq!(delivered, result);
            }
            other => panic!("Expected CommandFinished, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_shell_reports_launch_error() {
        let (tx, _rx) = init_app_eventsource();
        let shell = ShellConfig {
            program: "/nonexistent/turminal-shell".to_string(),
            args: vec!["-c".to_string()],
        };
        let executor = CommandExecutor::new(shell, tx);
        let session = Arc::new(Session::new(1));

        let result = executor.submit(&session, "echo hi").result().await;
        let errors = result.texts(SegmentKind::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error: "));
        assert_eq!(session.context().history.len(), 1);
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_fail_command() {
        let (tx, rx) = init_app_eventsource();
        drop(rx);
        let executor = CommandExecutor::new(ShellConfig::default(), tx);
        let session = Arc::new(Session::new(1));

        let result = executor.submit(&session, "echo still-works").result().await;
        assert_eq!(result.texts(SegmentKind::Output), vec!["still-works"]);
    }
}
