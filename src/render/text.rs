use ratatui::style::{Color, Modifier, Style};

use crate::game::Rgb;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Text size for screen messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Parse a size name. Anything other than `medium`/`med` or `large`
    /// is treated as [`FontSize::Small`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "large" => FontSize::Large,
            "medium" | "med" => FontSize::Medium,
            "small" => FontSize::Small,
            // Unknown names fall back to the smallest size
            _ => FontSize::Small,
        }
    }

    pub fn style(&self, fg: Rgb, bg: Rgb) -> Style {
        let base = Style::default().fg(fg.into()).bg(bg.into());
        match self {
            FontSize::Small => base,
            FontSize::Medium | FontSize::Large => base.add_modifier(Modifier::BOLD),
        }
    }

    /// Terminal cells cannot scale glyphs, so large text is upper-cased and letter-spaced
    pub fn shape(&self, text: &str) -> String {
        match self {
            FontSize::Small | FontSize::Medium => text.to_string(),
            FontSize::Large => text
                .chars()
                .map(|c| c.to_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// A line of text centred on the playfield, shifted by a pixel offset
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub color: Rgb,
    pub size: FontSize,
    pub y_change: i32,
    pub x_change: i32,
}

impl Message {
    pub fn new(text: impl Into<String>, color: Rgb, size: FontSize, y_change: i32) -> Self {
        Self {
            text: text.into(),
            color,
            size,
            y_change,
            x_change: 0,
        }
    }

    /// Text as it will appear on screen
    pub fn shaped(&self) -> String {
        self.size.shape(&self.text)
    }
}
