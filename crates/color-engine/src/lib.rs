//! Color model and palette generation engine.
//!
//! Canonicalizes textual CSS colors (hex, rgb/rgba, hsl/hsla, named
//! keywords) into an RGB pivot, classifies colors as dark or light for
//! contrast, cycles a color through its equivalent textual formats, and
//! derives harmonious companion palettes from a single seed color.
//!
//! Every boundary exchanges canonical strings; callers that scan free
//! text hand each matched literal to this crate and skip the ones that
//! come back as [`Error::InvalidColorFormat`].

use thiserror::Error;

pub mod convert;
pub mod cycle;
pub mod luminance;
pub mod palettes;
pub mod premade;

pub use convert::{named, parse, to_hex, to_hsl, to_hsla, to_rgb, to_rgba, Hsl, Rgb};
pub use cycle::{ColorFormat, FormatCycle};
pub use luminance::{is_dark, relative_luminance};
pub use palettes::{
    BranchPicker, Palette, PaletteGenerator, PaletteKind, RandomPicker,
};
pub use premade::PremadeCatalog;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{0}` is not a recognized color")]
    InvalidColorFormat(String),
    #[error("format `{0}` is not part of this rotation")]
    UnsupportedScheme(String),
    #[error("premade palette data could not be read: {0}")]
    AssetUnavailable(String),
}
