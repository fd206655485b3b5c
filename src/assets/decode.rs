use std::path::Path;

use image::imageops::FilterType;

use crate::{
    foundation::core::Canvas,
    foundation::error::{CardError, CardResult},
};

/// Background scaled to the canvas, in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct PreparedBackground {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Read and decode the background, then resize it to exactly fill `canvas`.
pub fn load_background(path: &Path, canvas: Canvas) -> CardResult<PreparedBackground> {
    let bytes = std::fs::read(path).map_err(|e| {
        CardError::image_load(format!("read background '{}': {e}", path.display()))
    })?;
    decode_background(&bytes, canvas).map_err(|e| match e {
        CardError::ImageLoad(msg) => {
            CardError::image_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Decode encoded image bytes and resize them to `canvas` with a Lanczos3 filter.
///
/// The aspect ratio is not preserved; the image is stretched to the exact canvas size.
pub fn decode_background(bytes: &[u8], canvas: Canvas) -> CardResult<PreparedBackground> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CardError::image_load(format!("decode background image: {e}")))?;
    tracing::debug!(
        src_width = dyn_img.width(),
        src_height = dyn_img.height(),
        dst_width = canvas.width(),
        dst_height = canvas.height(),
        "resize background"
    );

    let rgba = dyn_img.to_rgba8();
    let resized = if rgba.dimensions() == (canvas.width(), canvas.height()) {
        rgba
    } else {
        image::imageops::resize(&rgba, canvas.width(), canvas.height(), FilterType::Lanczos3)
    };

    let (width, height) = resized.dimensions();
    let mut rgba8_premul = resized.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedBackground {
        width,
        height,
        rgba8_premul,
    })
}

pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
