use clap::ValueEnum;
use std::fmt;
use tabled::{settings::Style, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    Day,
    #[default]
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Day => write!(f, "day"),
            Theme::Night => write!(f, "night"),
        }
    }
}

/// Process-wide UI context handed to every renderer. Lives for one run and
/// is never persisted, so each invocation starts at night unless overridden.
#[derive(Debug, Default)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        tracing::debug!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn render_table(&self, mut table: Table) -> String {
        match self.theme {
            Theme::Night => table.with(Style::rounded()),
            Theme::Day => table.with(Style::ascii()),
        };
        table.to_string()
    }

    /// Horizontal separator in the theme's line style
    pub fn rule(&self, width: usize) -> String {
        match self.theme {
            Theme::Night => "─".repeat(width),
            Theme::Day => "-".repeat(width),
        }
    }
}
