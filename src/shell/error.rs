//! Failures that can happen while running a command.
//!
//! None of these escape the executor. Each one is rendered into an `Error`
//! segment of the command's result, so the session stays usable.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("cd: {source}: '{path}'")]
    DirectoryChangeFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to launch `{program}`: {source}")]
    CommandLaunchFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to collect command output: {0}")]
    CommandIoFailed(#[source] io::Error),

    #[error("Error: command task failed: {0}")]
    TaskFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_their_prefix() {
        let cd = ExecError::DirectoryChangeFailed {
            path: "nope".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(cd.to_string(), "cd: No such file or directory: 'nope'");

        let launch = ExecError::CommandLaunchFailed {
            program: "/bin/sh".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(launch.to_string().starts_with("Error: "));
        assert!(launch.to_string().contains("/bin/sh"));
    }
}
