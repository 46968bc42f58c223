//! Text handling for Sprig widgets.
//!
//! Fonts are resolved once at widget construction ([`Font::new`]); a missing
//! family is a [`TextError`] there and never at draw time. Layout and caret
//! math only need a [`FontMetrics`] provider, so they also run against
//! [`FixedMetrics`] without any fonts installed.

mod font;
mod layout;
mod raster;

pub use font::{
    DEFAULT_FONT_PX, FixedMetrics, Font, FontMetrics, LINE_HEIGHT_FACTOR, LineMetrics,
};
pub use layout::{LineLayout, TextLayout, layout_text};
pub use raster::{TextBitmap, rasterize_line};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextError {
    #[error("font family `{family}` is not installed")]
    FontNotFound { family: String },
    #[error("invalid font size {0}px, expected a positive number")]
    InvalidSize(f32),
}
