//! Theming for progress output

mod tokyo_night;

pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::course::LessonState;

/// A color theme for rendered progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub info: Color,

    // Progress bars
    pub bar_filled: Color,
    pub bar_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Built-in theme by display name, ignoring case and `-`/`_` separators
    pub fn by_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "tokyonight" => Some(Theme::tokyo_night()),
            _ => None,
        }
    }

    /// Style for a lesson in the given access state
    pub fn lesson_style(&self, state: LessonState) -> Style {
        match state {
            LessonState::Done => Style::default().fg(self.success),
            LessonState::Next => Style::default().fg(self.accent_primary),
            LessonState::Locked => Style::default().fg(self.fg_muted),
        }
    }
}
