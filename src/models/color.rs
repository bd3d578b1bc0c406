//! The fixed dye color palette.
//!
//! Every colored asset exists in exactly these sixteen variants. The order
//! matches the in-game dye order and only affects the order outputs are
//! written in.

use serde::Serialize;
use std::fmt;

/// One of the sixteen dye colors.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DyeColor {
    White,
    Red,
    Orange,
    Pink,
    Yellow,
    Lime,
    Green,
    LightBlue,
    Cyan,
    Blue,
    Magenta,
    Purple,
    Brown,
    Gray,
    LightGray,
    Black,
}

/// The full palette in generation order.
pub const PALETTE: [DyeColor; 16] = [
    DyeColor::White,
    DyeColor::Red,
    DyeColor::Orange,
    DyeColor::Pink,
    DyeColor::Yellow,
    DyeColor::Lime,
    DyeColor::Green,
    DyeColor::LightBlue,
    DyeColor::Cyan,
    DyeColor::Blue,
    DyeColor::Magenta,
    DyeColor::Purple,
    DyeColor::Brown,
    DyeColor::Gray,
    DyeColor::LightGray,
    DyeColor::Black,
];

impl DyeColor {
    /// Label used in file names and substituted for the color token.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::LightBlue => "light_blue",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Gray => "gray",
            Self::LightGray => "light_gray",
            Self::Black => "black",
        }
    }

    /// Tint applied to dyeable blocks of this color (0xRRGGBB).
    #[must_use]
    pub const fn tint(self) -> u32 {
        match self {
            Self::White => 0x00ff_ffff,
            Self::Red => 0x0099_3333,
            Self::Orange => 0x00d8_7f33,
            Self::Pink => 0x00f2_7fa5,
            Self::Yellow => 0x00e5_e533,
            Self::Lime => 0x007f_cc19,
            Self::Green => 0x0066_7f33,
            Self::LightBlue => 0x0066_99d8,
            Self::Cyan => 0x004c_7f99,
            Self::Blue => 0x0033_4cb2,
            Self::Magenta => 0x00b2_4cd8,
            Self::Purple => 0x007f_3fb2,
            Self::Brown => 0x0066_4c33,
            Self::Gray => 0x004c_4c4c,
            Self::LightGray => 0x0099_9999,
            Self::Black => 0x0019_1919,
        }
    }

    /// Tint formatted as `#RRGGBB`.
    #[must_use]
    pub fn tint_hex(self) -> String {
        format!("#{:06X}", self.tint())
    }
}

impl fmt::Display for DyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
