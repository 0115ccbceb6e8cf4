//! Shell execution and output capture.
//!
//! This module runs submitted commands in the host shell, classifies what
//! they print, and applies `cd` to the owning session.

mod error;
mod executor;
mod result;

pub use error::ExecError;
pub use executor::{CommandExecutor, Submission};
pub use result::{ExecutionResult, Segment, SegmentKind};
