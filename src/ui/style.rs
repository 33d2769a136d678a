use ratatui::style::{Color, Modifier, Style};

/// Styles the panel draws with. Hosts override via
/// [`super::EmojiPicker::with_theme`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub border: Style,
    pub prompt: Style,
    pub header: Style,
    pub empty: Style,
}

impl Theme {
    #[must_use]
    pub fn border_style(&self) -> Style {
        self.border
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::new().fg(Color::DarkGray),
            prompt: Style::new().fg(Color::LightCyan),
            header: Style::new()
                .fg(Color::Rgb(226, 232, 240))
                .add_modifier(Modifier::BOLD),
            empty: Style::new().fg(Color::DarkGray),
        }
    }
}
