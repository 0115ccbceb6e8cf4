use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions inside the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub tabs: Rect,
    pub working_directory: Rect,
    pub output: Rect,
    pub input: Rect,
}

impl AppLayout {
    pub fn build(inner: Rect) -> Self {
        let [tabs, working_directory, output, input] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        Self {
            tabs,
            working_directory,
            output,
            input,
        }
    }
}
