//! Farbfeld image format decoder and encoder.
//!
//! Farbfeld is a simple lossless format: 8-byte magic ("farbfeld"),
//! width/height as u32 big-endian, then RGBA u16 big-endian pixels.
//! Since [`Canvas`] keeps its pixels in exactly that layout, decoding is a
//! validated copy and encoding is its exact inverse for any stream decode
//! accepts.

mod decode;
mod encode;

pub(crate) use decode::parse_header;

use alloc::vec::Vec;
use enough::Stop;

use crate::canvas::Canvas;
use crate::error::CanvasError;
use crate::limits::Limits;

pub(crate) const MAGIC: &[u8; 8] = b"farbfeld";
pub(crate) const HEADER_SIZE: usize = 16;

/// Decode farbfeld data into a [`Canvas`].
///
/// Fails with [`CanvasError::UnrecognizedFormat`] on a bad magic,
/// [`CanvasError::UnexpectedEof`] when the header or pixel payload is short;
/// a partially populated canvas is never returned.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Canvas, CanvasError> {
    decode_inner(data, None, &stop)
}

/// Decode farbfeld data, rejecting images that exceed `limits`.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Canvas, CanvasError> {
    decode_inner(data, Some(limits), &stop)
}

fn decode_inner(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Canvas, CanvasError> {
    let (width, height) = decode::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let payload_bytes = decode::payload_size(width, height)?;
    if let Some(limits) = limits {
        limits.check_memory(payload_bytes)?;
    }
    stop.check()?;
    decode::decode_pixels(data, width, height, payload_bytes)
}

/// Encode a canvas as farbfeld.
pub fn encode(canvas: &Canvas, stop: impl Stop) -> Result<Vec<u8>, CanvasError> {
    encode::encode_farbfeld(canvas, &stop)
}

/// Read a farbfeld stream to its end and decode it.
///
/// File-path resolution stays with the caller; any reader works.
#[cfg(feature = "std")]
pub fn decode_from_reader<R: std::io::Read>(
    mut reader: R,
    stop: impl Stop,
) -> Result<Canvas, CanvasError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_inner(&data, None, &stop)
}

/// Encode a canvas as farbfeld and write every byte to `writer`.
///
/// A sink that cannot accept the full payload surfaces as
/// [`CanvasError::Io`]; the caller decides what to do about it.
#[cfg(feature = "std")]
pub fn encode_to_writer<W: std::io::Write>(
    canvas: &Canvas,
    mut writer: W,
    stop: impl Stop,
) -> Result<(), CanvasError> {
    let bytes = encode::encode_farbfeld(canvas, &stop)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
