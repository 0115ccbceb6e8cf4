//! Per-tab display state: the output log and the command entry line.

use ratatui::text::{Line, Span};

use crate::session::SessionId;
use crate::shell::{ExecutionResult, Segment, SegmentKind};

use super::palette::Palette;

#[derive(Debug, Clone)]
pub struct TabView {
    pub session_id: SessionId,
    /// Everything shown since the last `clear`, oldest first.
    pub segments: Vec<Segment>,
    /// Text typed into the command entry.
    pub input: String,
}

impl TabView {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            segments: Vec::new(),
            input: String::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("Terminal {}", self.session_id)
    }

    /// Append a finished command's output, or wipe the log on `clear`.
    pub fn apply(&mut self, result: ExecutionResult) {
        if result.is_clear_screen() {
            self.segments.clear();
            return;
        }
        self.segments.extend(result.segments);
    }

    /// Styled display lines, wrapped to `width` columns. The first line of
    /// input and output segments is labelled; errors are shown as they came.
    pub fn lines(&self, palette: &Palette, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(1));
        let mut lines = Vec::new();
        for segment in &self.segments {
            let style = palette.segment(segment.kind);
            let label = match segment.kind {
                SegmentKind::Input => "Input: ",
                SegmentKind::Output => "Output: ",
                SegmentKind::Error | SegmentKind::ClearScreen => "",
            };
            for (i, text) in segment.text.lines().enumerate() {
                let text = if i == 0 {
                    format!("{}{}", label, text)
                } else {
                    text.to_string()
                };
                for row in textwrap::wrap(&text, width) {
                    lines.push(Line::from(Span::styled(row.into_owned(), style)));
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(command: &str, stdout: &str, stderr: &str) -> ExecutionResult {
        let mut result = ExecutionResult::for_input(command);
        result.push_output(stdout);
        result.push_error(stderr);
        result
    }

    #[test]
    fn test_apply_appends_then_clears() {
        let mut tab = TabView::new(3);
        assert_eq!(tab.title(), "Terminal 3");

        tab.apply(finished("ls", "a\nb\n", ""));
        tab.apply(finished("cat x", "", "cat: x: No such file"));
        assert_eq!(tab.segments.len(), 4);

        tab.apply(ExecutionResult::clear_screen());
        assert!(tab.segments.is_empty());
    }

    #[test]
    fn test_lines_are_labelled() {
        let mut tab = TabView::new(1);
        tab.apply(finished("ls", "a\nb\n", "warn"));
        let text: Vec<String> = tab
            .lines(&Palette::default(), 80)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(text, vec!["Input: ls", "Output: a", "b", "warn"]);
    }

    #[test]
    fn test_long_lines_wrap_to_width() {
        let mut tab = TabView::new(1);
        tab.apply(finished("ls", "one two three

four", ""));
        let text: Vec<String> = tab
            .lines(&Palette::default(), 12)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert_eq!(text, vec!["Input: ls", "Output: one", "two three", "", "four"]);
        assert!(text.iter().all(|row| row.chars().count() <= 12));
    }
}
