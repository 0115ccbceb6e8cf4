//! Colors used to draw output, resolved from [`PaletteConfig`].

use std::str::FromStr;

use ratatui::style::{Color, Style};
use tracing::warn;

use crate::config::PaletteConfig;
use crate::shell::SegmentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub input: Color,
    pub output: Color,
    pub error: Color,
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

impl Palette {
    /// Parse configured colors, falling back to the default for any entry
    /// that is not a valid color.
    pub fn from_config(config: &PaletteConfig) -> Self {
        let defaults = PaletteConfig::default();
        Self {
            input: parse_color("input", &config.input, &defaults.input),
            output: parse_color("output", &config.output, &defaults.output),
            error: parse_color("error", &config.error, &defaults.error),
            background: parse_color("background", &config.background, &defaults.background),
            foreground: parse_color("foreground", &config.foreground, &defaults.foreground),
        }
    }

    /// Base style of the output pane.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn segment(&self, kind: SegmentKind) -> Style {
        let fg = match kind {
            SegmentKind::Input => self.input,
            SegmentKind::Output => self.output,
            SegmentKind::Error => self.error,
            SegmentKind::ClearScreen => self.foreground,
        };
        self.base().fg(fg)
    }
}

fn parse_color(name: &str, value: &str, fallback: &str) -> Color {
    Color::from_str(value)
        .or_else(|_| {
            warn!("Invalid {} color {:?}, using {}", name, value, fallback);
            Color::from_str(fallback)
        })
        .unwrap_or(Color::Reset)
}
