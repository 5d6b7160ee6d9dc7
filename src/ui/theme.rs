//! Color palette shared by the gallery, cards and share card

use ratatui::style::Color;

/// Banner / accent red
pub const CHINA_RED: Color = Color::Rgb(0xde, 0x29, 0x10);

/// Banner text / random button gold
pub const REVOLUTION_GOLD: Color = Color::Rgb(0xff, 0xde, 0x00);

/// Share card paper
pub const PAPER: Color = Color::Rgb(0xfc, 0xfa, 0xf7);

/// Body text on paper
pub const INK: Color = Color::Rgb(0x1f, 0x29, 0x37);

/// Secondary text (years, hints, unselected borders)
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

/// Faint red used for the inner border of the share card
pub const RED_FAINT: Color = Color::Rgb(0xf0, 0xb4, 0xab);
