//! User interface for the tabbed terminal.
//!
//! Renders the tab bar, the active tab's working directory, its colored
//! output log, and the entry line.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use crate::app::{App, InputMode};

pub mod layout;
pub mod palette;
pub mod tab;

pub use layout::AppLayout;
pub use palette::Palette;
pub use tab::TabView;

fn outer_block() -> Block<'static> {
    Block::new()
        .borders(Borders::all())
        .title(Line::from(" turminal ".bold()))
}

/// Regions for a frame of the given size.
pub fn app_layout(area: Rect) -> AppLayout {
    AppLayout::build(outer_block().inner(area))
}

fn prompt(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Command => "Command: ",
        InputMode::Directory => "Directory: ",
    }
}

/// Where the hardware cursor belongs: the end of the entry line.
pub fn cursor_position(app: &App, area: Rect) -> Position {
    let input = app_layout(area).input;
    let typed = prompt(app.mode()).chars().count() + app.input_text().chars().count();
    let max_x = input.x + input.width.saturating_sub(1);
    let x = (input.x as usize + typed).min(max_x as usize) as u16;
    Position::new(x, input.y)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer) {
        let outer = outer_block();
        let layout = AppLayout::build(outer.inner(area));
        outer.render(area, buf);

        let titles: Vec<String> = self.tabs().iter().map(TabView::title).collect();
        Tabs::new(titles)
            .select(self.active_index())
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .render(layout.tabs, buf);

        Paragraph::new(self.working_directory())
            .style(Style::default().add_modifier(Modifier::DIM))
            .render(layout.working_directory, buf);

        let palette = self.palette();
        let lines = self.current_tab().lines(palette, layout.output.width);
        // rows are already wrapped; keep the newest output in view
        let hidden = lines.len().saturating_sub(layout.output.height as usize);
        Paragraph::new(lines)
            .style(palette.base())
            .scroll((hidden.min(u16::MAX as usize) as u16, 0))
            .render(layout.output, buf);

        Line::from(vec![prompt(self.mode()).bold(), self.input_text().into()])
            .render(layout.input, buf);
    }
}
