use std::path::PathBuf;

use crate::{
    foundation::core::Canvas,
    foundation::error::{CardError, CardResult},
};

pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 628;
pub const DEFAULT_DOMAIN_FONT_SIZE: f32 = 80.0;
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 90.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
/// Font files for the two text layers.
pub struct FontPaths {
    /// Monospace regular face used for the domain label.
    pub regular: PathBuf,
    /// Bold face used for the title.
    pub bold: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("fonts").join("FiraCode-Regular.ttf"),
            bold: PathBuf::from("fonts").join("FiraCode-Bold.ttf"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// The full parameter set for one image-generation call.
///
/// Requests are usually built from a [`crate::ComposeConfig`] via
/// [`crate::ComposeConfig::request`], which fills in canvas size, font sizes and font paths.
pub struct CompositionRequest {
    /// Source image; resized to the canvas.
    pub background_path: PathBuf,
    /// Output width in pixels.
    pub canvas_width: u32,
    /// Output height in pixels.
    pub canvas_height: u32,
    /// Label drawn bottom-right.
    pub domain_text: String,
    /// Font size of the domain label.
    pub domain_font_size: f32,
    /// Headline drawn top-left and word-wrapped.
    pub title_text: String,
    /// Font size of the title.
    pub title_font_size: f32,
    /// Fonts for both text layers.
    pub fonts: FontPaths,
    /// Destination PNG. Overwritten if it exists.
    pub output_path: PathBuf,
}

impl CompositionRequest {
    /// Request with the reference 1200x628 geometry and default font sizes.
    pub fn new(
        background_path: impl Into<PathBuf>,
        domain_text: impl Into<String>,
        title_text: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            background_path: background_path.into(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            domain_text: domain_text.into(),
            domain_font_size: DEFAULT_DOMAIN_FONT_SIZE,
            title_text: title_text.into(),
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            fonts: FontPaths::default(),
            output_path: output_path.into(),
        }
    }

    /// Check sizes and paths; returns the validated canvas.
    pub fn validate(&self) -> CardResult<Canvas> {
        let canvas = Canvas::new(self.canvas_width, self.canvas_height)?;
        validate_font_size("domain_font_size", self.domain_font_size)?;
        validate_font_size("title_font_size", self.title_font_size)?;
        if self.background_path.as_os_str().is_empty() {
            return Err(CardError::invalid_parameter(
                "background path must be non-empty",
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(CardError::invalid_parameter("output path must be non-empty"));
        }
        Ok(canvas)
    }
}

pub(crate) fn validate_font_size(field: &str, size: f32) -> CardResult<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(CardError::invalid_parameter(format!(
            "{field} must be finite and > 0 (got {size})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/request.rs"]
mod tests;
