//! # Layer tree value model
//!
//! Backend-independent values that flow between the SVG translator and the
//! renderer: geometry (`Point`, `Size`, `Rect`), encoded raster payloads
//! (`Image`), and the diagnostic raised when a source construct has no
//! representation here (`Unsupported`).
//!
//! Nothing in this crate parses markup or draws pixels. The types only carry
//! the invariants both sides rely on.

pub mod error;
pub mod geometry;
pub mod image;

pub use error::{LayerTreeError, Result, Unsupported, UnsupportedKind};
pub use geometry::{Point, Rect, Size};
pub use image::{Image, ImageFormat};
