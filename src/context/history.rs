//! Command history tracking and navigation.
//!
//! This module keeps the commands submitted in a session, oldest first, and
//! a browsing cursor used to walk back through them with Up/Down.

#[derive(Clone, Debug, Default)]
pub struct History {
    commands: Vec<String>,
    /// Offset from the most recent entry while browsing, `None` otherwise.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and stop browsing.
    ///
    /// The command is stored exactly as submitted. Callers are expected to
    /// reject blank input before getting here.
    pub fn push(&mut self, cmd: String) {
        self.commands.push(cmd);
        self.cursor = None;
    }

    /// Step one entry further back in time.
    ///
    /// Returns the entry under the cursor. Browsing clamps at the oldest
    /// entry, and an empty history yields an empty string.
    pub fn navigate_up(&mut self) -> String {
        if self.commands.is_empty() {
            return String::new();
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.commands.len() {
            self.cursor = Some(next);
        }
        self.current()
    }

    /// Step one entry forward in time.
    ///
    /// Leaving the most recent entry ends browsing and yields an empty string
    /// so the input line can be cleared.
    pub fn navigate_down(&mut self) -> String {
        self.cursor = match self.cursor {
            Some(0) | None => None,
            Some(c) => Some(c - 1),
        };
        self.current()
    }

    fn current(&self) -> String {
        self.cursor
            .and_then(|c| self.commands.len().checked_sub(c + 1))
            .and_then(|idx| self.commands.get(idx))
            .cloned()
            .unwrap_or_default()
    }

    /// Browsing position, `None` when not browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All commands, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.commands
    }

    /// Get total number of commands in history.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if history is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(cmds: &[&str]) -> History {
        let mut history = History::new();
        for cmd in cmds {
            history.push(cmd.to_string());
        }
        history
    }

    #[test]
    fn test_up_then_down_walks_history() {
        let mut history = history_of(&["a", "b", "c"]);

        assert_eq!(history.navigate_up(), "c");
        assert_eq!(history.navigate_up(), "b");
        assert_eq!(history.navigate_up(), "a");
        // clamped at the oldest entry
        assert_eq!(history.navigate_up(), "a");
        assert_eq!(history.cursor(), Some(2));

        assert_eq!(history.navigate_down(), "b");
        assert_eq!(history.navigate_down(), "c");
        assert_eq!(history.navigate_down(), "");
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_navigate_empty_history() {
        let mut history = History::new();
        assert_eq!(history.navigate_up(), "");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.navigate_down(), "");
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_down_without_browsing_stays_idle() {
        let mut history = history_of(&["ls"]);
        assert_eq!(history.navigate_down(), "");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.navigate_up(), "ls");
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = history_of(&["a", "b"]);
        history.navigate_up();
        history.navigate_up();
        assert_eq!(history.cursor(), Some(1));

        history.push("c".to_string());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.navigate_up(), "c");
    }

    #[test]
    fn test_push_keeps_duplicates_and_raw_text() {
        let history = history_of(&["ls", "ls", "  echo hi  "]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[2], "  echo hi  ");
        assert_eq!(history.entries(), ["ls", "ls", "  echo hi  "]);
    }
}
