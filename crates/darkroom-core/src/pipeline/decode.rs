//! Image decoding with format sniffing.

use std::io::Cursor;

use image::DynamicImage;

use crate::error::PipelineError;

/// Decode an in-memory byte buffer into a pixel grid.
///
/// The container format is detected from the content, not from any
/// client-supplied name, so a PNG uploaded as `photo.jpg` still decodes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PipelineError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PipelineError::Decode {
            message: format!("Cannot detect image format: {e}"),
        })?;

    if reader.format().is_none() {
        return Err(PipelineError::Decode {
            message: "Unknown image format".to_string(),
        });
    }

    reader.decode().map_err(|e| PipelineError::Decode {
        message: e.to_string(),
    })
}
