//! Tile colours.
//!
//! A `Palette` is an explicit table from cell value to display style,
//! checked when it is built: every key must be a valid cell value and
//! appear once. Values missing from the table use the fallback style.

use serde::{Deserialize, Serialize};

use crate::board::is_cell_value;

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How a single cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl TileStyle {
    #[must_use]
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self { background, foreground }
    }
}

/// Errors from building a palette.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette key {0} is not 0 or a power of two >= 2")]
    InvalidValue(u32),
    #[error("palette key {0} appears more than once")]
    Duplicate(u32),
}

const DARK_TEXT: Rgb = Rgb(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Rgb = Rgb(0xf9, 0xf6, 0xf2);

const CLASSIC: [(u32, Rgb, Rgb); 12] = [
    (0, Rgb(0xcd, 0xc1, 0xb4), DARK_TEXT),
    (2, Rgb(0xee, 0xe4, 0xda), DARK_TEXT),
    (4, Rgb(0xed, 0xe0, 0xc8), DARK_TEXT),
    (8, Rgb(0xf2, 0xb1, 0x79), LIGHT_TEXT),
    (16, Rgb(0xf5, 0x95, 0x63), LIGHT_TEXT),
    (32, Rgb(0xf6, 0x7c, 0x5f), LIGHT_TEXT),
    (64, Rgb(0xf6, 0x5e, 0x3b), LIGHT_TEXT),
    (128, Rgb(0xed, 0xcf, 0x72), LIGHT_TEXT),
    (256, Rgb(0xed, 0xcc, 0x61), LIGHT_TEXT),
    (512, Rgb(0xed, 0xc8, 0x50), LIGHT_TEXT),
    (1024, Rgb(0xed, 0xc5, 0x3f), LIGHT_TEXT),
    (2048, Rgb(0xed, 0xc2, 0x2e), LIGHT_TEXT),
];

/// Value → style table with a fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Sorted by value.
    entries: Vec<(u32, TileStyle)>,
    fallback: TileStyle,
}

impl Palette {
    /// Build a palette, rejecting invalid or repeated keys.
    pub fn new(
        entries: impl IntoIterator<Item = (u32, TileStyle)>,
        fallback: TileStyle,
    ) -> Result<Self, PaletteError> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        if let Some(&(value, _)) = entries.iter().find(|(v, _)| !is_cell_value(*v)) {
            return Err(PaletteError::InvalidValue(value));
        }
        entries.sort_by_key(|(v, _)| *v);
        if let Some(pair) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(PaletteError::Duplicate(pair[0].0));
        }
        Ok(Self { entries, fallback })
    }

    /// The classic 2048 colours up to 2048, dark tiles beyond.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            entries: CLASSIC
                .iter()
                .map(|&(v, bg, fg)| (v, TileStyle::new(bg, fg)))
                .collect(),
            fallback: TileStyle::new(Rgb(0x3c, 0x3a, 0x32), LIGHT_TEXT),
        }
    }

    /// Style for a cell value.
    #[must_use]
    pub fn style(&self, value: u32) -> TileStyle {
        self.entries
            .binary_search_by_key(&value, |(v, _)| *v)
            .map_or(self.fallback, |i| self.entries[i].1)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
