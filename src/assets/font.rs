use std::{path::Path, sync::Arc};

use crate::foundation::error::{CardError, CardResult};

#[derive(Clone)]
/// Font file bytes, shared between shaping and rasterization.
pub struct FontAsset {
    pub bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

impl FontAsset {
    pub fn from_bytes(bytes: Vec<u8>) -> CardResult<Self> {
        if bytes.is_empty() {
            return Err(CardError::image_load("font data is empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
        })
    }

    /// Peniko handle used by the CPU rasterizer.
    pub fn font_data(&self) -> vello_cpu::peniko::FontData {
        let blob = vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone());
        vello_cpu::peniko::FontData::new(blob, 0)
    }
}

/// Read a font file. Missing or empty files are [`CardError::ImageLoad`].
pub fn load_font(path: &Path) -> CardResult<FontAsset> {
    let bytes = std::fs::read(path)
        .map_err(|e| CardError::image_load(format!("read font '{}': {e}", path.display())))?;
    if bytes.is_empty() {
        return Err(CardError::image_load(format!(
            "font '{}' is empty",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded font");
    FontAsset::from_bytes(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
