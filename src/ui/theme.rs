use ratatui::style::Color;

use crate::theme_store::ThemeSurface;

/// Color theme for one frame, picked from the dark marker.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn for_surface(surface: ThemeSurface) -> Self {
        Self {
            dark: surface.dark_marker,
        }
    }

    /// Screen background
    pub fn background(&self) -> Color {
        if self.dark {
            Color::Rgb(24, 24, 32)
        } else {
            Color::Rgb(245, 245, 240)
        }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        if self.dark { Color::Cyan } else { Color::Blue }
    }

    /// Focused control
    pub fn highlight(&self) -> Color {
        if self.dark {
            Color::Cyan
        } else {
            Color::Rgb(0, 110, 140)
        }
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        if self.dark { Color::DarkGray } else { Color::Gray }
    }

    /// Normal text
    pub fn text(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Accent for labels and the spinner
    pub fn accent(&self) -> Color {
        if self.dark {
            Color::LightBlue
        } else {
            Color::Rgb(30, 90, 200)
        }
    }

    /// Toast text and the success line in the footer
    pub fn success(&self) -> Color {
        if self.dark {
            Color::LightGreen
        } else {
            Color::Green
        }
    }
}
