//! Theme tokens passed explicitly into every card.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::config::ThemeVariant;

pub const RED_700: Color = Color::Rgb(0xdd, 0x0d, 0x3c);
pub const RED_300: Color = Color::Rgb(0xea, 0x6d, 0x7e);
pub const NEAR_BLACK: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const INK: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
pub const PAPER: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GREY_400: Color = Color::Rgb(0xbd, 0xbd, 0xbd);
pub const GREY_600: Color = Color::Rgb(0x75, 0x75, 0x75);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub primary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub border: Color,
    pub placeholder: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub h6: Style,
    pub subtitle1: Style,
    pub body1: Style,
    pub body2: Style,
    pub button: Style,
}

/// Border types standing in for corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shapes {
    pub small: BorderType,
    pub medium: BorderType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub colors: Colors,
    pub typography: Typography,
    pub shapes: Shapes,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self::build(Colors {
            primary: RED_700,
            surface: PAPER,
            on_surface: INK,
            border: GREY_400,
            placeholder: GREY_400,
        })
    }

    pub fn dark() -> Self {
        Self::build(Colors {
            primary: RED_300,
            surface: NEAR_BLACK,
            on_surface: PAPER,
            border: GREY_600,
            placeholder: GREY_600,
        })
    }

    fn build(colors: Colors) -> Self {
        let text = Style::default().fg(colors.on_surface);
        Self {
            colors,
            typography: Typography {
                h6: text.add_modifier(Modifier::BOLD),
                subtitle1: text,
                body1: text,
                body2: text,
                button: Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            },
            shapes: Shapes {
                small: BorderType::Plain,
                medium: BorderType::Rounded,
            },
        }
    }

    /// Medium emphasis for secondary content.
    pub fn medium(&self, style: Style) -> Style {
        style.add_modifier(Modifier::DIM)
    }

    pub fn surface(&self) -> Style {
        Style::default().bg(self.colors.surface).fg(self.colors.on_surface)
    }
}
