//! Display attributes for tiles.

pub mod palette;

pub use palette::{Palette, PaletteError, Rgb, TileStyle};
