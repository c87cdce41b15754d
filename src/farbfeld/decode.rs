//! Farbfeld decoder.
//!
//! Forked from zune-farbfeld 0.5.2 by Caleb Etemesi (MIT/Apache-2.0/Zlib).

use alloc::vec::Vec;

use super::{HEADER_SIZE, MAGIC};
use crate::canvas::Canvas;
use crate::error::CanvasError;
use crate::pixel::BYTES_PER_PIXEL;

/// Parse farbfeld header, returning (width, height).
///
/// The magic is checked as soon as eight bytes are available, so a stream
/// with a wrong signature fails with `UnrecognizedFormat` even when it is
/// also shorter than a full header.
pub(crate) fn parse_header(data: &[u8]) -> Result<(u32, u32), CanvasError> {
    if data.len() < MAGIC.len() {
        return Err(CanvasError::UnexpectedEof);
    }
    if &data[0..MAGIC.len()] != MAGIC {
        return Err(CanvasError::UnrecognizedFormat);
    }
    if data.len() < HEADER_SIZE {
        return Err(CanvasError::UnexpectedEof);
    }
    let width = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
    let height = u32::from_be_bytes([data[12], data[13], data[14], data[15]]);
    Ok((width, height))
}

/// Pixel payload size in bytes for the given dimensions.
pub(crate) fn payload_size(width: u32, height: u32) -> Result<usize, CanvasError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(CanvasError::DimensionsTooLarge { width, height })
}

/// Copy the pixel payload out of `data` into an owned canvas.
pub(crate) fn decode_pixels(
    data: &[u8],
    width: u32,
    height: u32,
    payload_bytes: usize,
) -> Result<Canvas, CanvasError> {
    let end = HEADER_SIZE
        .checked_add(payload_bytes)
        .ok_or(CanvasError::DimensionsTooLarge { width, height })?;
    let payload = data
        .get(HEADER_SIZE..end)
        .ok_or(CanvasError::UnexpectedEof)?;

    let mut bytes = Vec::with_capacity(payload_bytes);
    bytes.extend_from_slice(payload);
    Ok(Canvas::from_wire_bytes(width, height, bytes))
}
