//! 180° image rotation that keeps the original encoding.

use std::io::Cursor;
use std::path::Path;

use flipbot_core::{FlipbotError, HandlerError, Result};
use image::ImageFormat;

/// Detects the format of `bytes`, rotates the picture 180° and re-encodes it in that format.
pub fn rotate_180(bytes: &[u8]) -> Result<Vec<u8>> {
    let format = image::guess_format(bytes)
        .map_err(|e| HandlerError::UnsupportedImage(e.to_string()))?;
    let rotated = decode(bytes, format)?.rotate180();

    let mut out = Cursor::new(Vec::new());
    rotated
        .write_to(&mut out, format)
        .map_err(|e| FlipbotError::Image(e.to_string()))?;
    Ok(out.into_inner())
}

fn decode(bytes: &[u8], format: ImageFormat) -> Result<image::DynamicImage> {
    image::load_from_memory_with_format(bytes, format).map_err(|e| match e {
        image::ImageError::Unsupported(u) => HandlerError::UnsupportedImage(u.to_string()).into(),
        other => FlipbotError::Image(other.to_string()),
    })
}

/// Rotates the image at `input` and writes it to `output`.
pub fn rotate_file(input: &Path, output: &Path) -> Result<()> {
    let bytes = std::fs::read(input)?;
    let rotated = rotate_180(&bytes)?;
    std::fs::write(output, rotated)?;
    Ok(())
}
