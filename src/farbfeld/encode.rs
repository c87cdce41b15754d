//! Farbfeld encoder.
//!
//! Forked from zune-farbfeld 0.5.2 by Caleb Etemesi (MIT/Apache-2.0/Zlib).

use alloc::vec::Vec;
use enough::Stop;

use super::{HEADER_SIZE, MAGIC};
use crate::canvas::Canvas;
use crate::error::CanvasError;

/// Encode a canvas to farbfeld bytes.
///
/// The canvas already holds its pixels in wire layout, so the payload is a
/// straight copy after the 16-byte header.
pub(crate) fn encode_farbfeld(canvas: &Canvas, stop: &dyn Stop) -> Result<Vec<u8>, CanvasError> {
    let pixel_bytes = canvas.as_bytes();
    let total = pixel_bytes
        .len()
        .checked_add(HEADER_SIZE)
        .ok_or(CanvasError::DimensionsTooLarge {
            width: canvas.width(),
            height: canvas.height(),
        })?;

    stop.check()?;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&canvas.width().to_be_bytes());
    out.extend_from_slice(&canvas.height().to_be_bytes());
    out.extend_from_slice(pixel_bytes);

    Ok(out)
}
