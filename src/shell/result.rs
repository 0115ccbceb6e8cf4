//! Tagged output produced by one command invocation.

/// What a piece of output is, which decides how it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Echo of the submitted command.
    Input,
    /// Captured standard output.
    Output,
    /// Captured standard error, or a failure reported by the executor.
    Error,
    /// Instruction to wipe the display; carries no text.
    ClearScreen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Everything one command produced, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub segments: Vec<Segment>,
    /// Set when a `cd` succeeded and the session moved.
    pub new_working_directory: Option<String>,
}

impl ExecutionResult {
    /// Result for blank input: nothing to show.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn clear_screen() -> Self {
        Self {
            segments: vec![Segment::new(SegmentKind::ClearScreen, "")],
            new_working_directory: None,
        }
    }

    /// Start a result with the echo of `command`.
    pub fn for_input(command: &str) -> Self {
        Self {
            segments: vec![Segment::new(SegmentKind::Input, command)],
            new_working_directory: None,
        }
    }

    /// Append captured stdout. Trailing whitespace is dropped and blank
    /// output adds nothing.
    pub fn push_output(&mut self, text: &str) {
        self.push_trimmed(SegmentKind::Output, text);
    }

    /// Append captured stderr or an executor failure message.
    pub fn push_error(&mut self, text: &str) {
        self.push_trimmed(SegmentKind::Error, text);
    }

    fn push_trimmed(&mut self, kind: SegmentKind, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            self.segments.push(Segment::new(kind, text));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_clear_screen(&self) -> bool {
        self.segments
            .iter()
            .any(|s| s.kind == SegmentKind::ClearScreen)
    }

    /// Texts of all segments of the given kind, in order.
    pub fn texts(&self, kind: SegmentKind) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_trims_trailing_whitespace() {
        let mut result = ExecutionResult::for_input("ls");
        result.push_output("a\nb\n\n");
        result.push_error("  oops \n");

        assert_eq!(result.texts(SegmentKind::Input), vec!["ls"]);
        assert_eq!(result.texts(SegmentKind::Output), vec!["a\nb"]);
        // leading whitespace is kept
        assert_eq!(result.texts(SegmentKind::Error), vec!["  oops"]);
    }

    #[test]
    fn test_blank_streams_add_nothing() {
        let mut result = ExecutionResult::for_input("true");
        result.push_output("");
        result.push_error("\n");
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn test_clear_and_empty() {
        assert!(ExecutionResult::empty().is_empty());
        assert!(ExecutionResult::clear_screen().is_clear_screen());
        assert!(!ExecutionResult::for_input("clear").is_clear_screen());
    }
}
