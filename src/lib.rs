//! # ffcanvas
//!
//! Farbfeld raster canvas: an owned 16-bit RGBA pixel buffer with basic
//! drawing primitives and a lossless farbfeld codec.
//!
//! ## Permissive pixel access
//!
//! Reads outside the canvas return opaque black and writes outside are
//! silently dropped. Drawing primitives rely on this for clipping, so none
//! of them can fail.
//!
//! ## Wire-layout storage
//!
//! The canvas stores its pixels in the exact farbfeld byte layout (row-major
//! RGBA, two big-endian bytes per channel). Decoding is a validated copy,
//! encoding is its exact inverse, and `decode(encode(c)) == c` holds
//! byte-for-byte for every canvas.
//!
//! ## Non-Goals
//!
//! - Compression, color management, or any format other than farbfeld
//! - Sharing one canvas across threads (a canvas has a single owner)
//!
//! ## Usage
//!
//! ```
//! use ffcanvas::{Canvas, Rgba, Unstoppable};
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.clear(Rgba::opaque(32, 32, 48));
//! canvas.fill_rect(8, 8, 16, 16, Rgba::opaque(255, 80, 0));
//! canvas.draw_line(4, 60, 60, 4, 2, Rgba::new(0, 255, 128, 200));
//!
//! let bytes = ffcanvas::encode(&canvas, Unstoppable)?;
//! let back = ffcanvas::decode(&bytes, Unstoppable)?;
//! assert_eq!(back, canvas);
//! # Ok::<(), ffcanvas::CanvasError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod canvas;
mod draw;
mod error;
mod info;
mod limits;
mod pixel;

pub mod farbfeld;

// Re-exports
pub use canvas::Canvas;
pub use enough::{Stop, Unstoppable};
pub use error::CanvasError;
pub use farbfeld::{decode, decode_with_limits, encode};
#[cfg(feature = "std")]
pub use farbfeld::{decode_from_reader, encode_to_writer};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::Rgba;
