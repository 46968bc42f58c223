//! # Core types
//!
//! Sprig draws a handful of retained widgets into a [`Scene`] each frame and
//! feeds them discrete [`InputEvent`]s. This crate holds the value types every
//! other crate shares:
//!
//! - [`Rect`] / [`Vec2`] with the half-open hit test used by every widget.
//! - [`Color`] with HSV value scaling for hover/pressed variants.
//! - [`InputEvent`] for pointer motion, pointer buttons and key presses.
//! - [`Scene`], the display list a host backend replays.
//!
//! ```rust
//! use sprig_core::*;
//!
//! let r = Rect::new(0.0, 0.0, 50.0, 30.0);
//! assert!(r.contains(Vec2::new(0.0, 0.0)));
//! assert!(!r.contains(Vec2::new(50.0, 10.0)));
//!
//! let hover = Color::from_rgb(200, 200, 200).scale_value(HOVER_FACTOR);
//! assert_eq!(hover, Color::from_rgb(180, 180, 180));
//! ```
//!
//! Rectangles and colors are `Copy`: moving a widget copies its rectangle,
//! nothing is shared between widgets.

pub mod color;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod tests;

pub use color::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
