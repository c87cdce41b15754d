use crate::error::CanvasError;
use crate::farbfeld;

/// Header information probed without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Probe a farbfeld header. Looks at the first 16 bytes only.
    pub fn from_bytes(data: &[u8]) -> Result<ImageInfo, CanvasError> {
        let (width, height) = farbfeld::parse_header(data)?;
        Ok(ImageInfo { width, height })
    }
}
