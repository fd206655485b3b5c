use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{
    composition::request::{
        CompositionRequest, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DOMAIN_FONT_SIZE,
        DEFAULT_TITLE_FONT_SIZE, FontPaths, validate_font_size,
    },
    foundation::core::Canvas,
    foundation::error::{CardError, CardResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
/// Defaults shared by every card built from this config.
///
/// Loaded from JSON. Every key is optional; a key that is not one of the recognized options is
/// rejected instead of being silently ignored.
///
/// ```json
/// {
///   "canvas_width": 1200,
///   "canvas_height": 628,
///   "domain_text": "example.com",
///   "fonts": { "regular": "fonts/FiraCode-Regular.ttf", "bold": "fonts/FiraCode-Bold.ttf" }
/// }
/// ```
pub struct ComposeConfig {
    /// Output width in pixels.
    pub canvas_width: u32,
    /// Output height in pixels.
    pub canvas_height: u32,
    /// Font size of the domain label.
    pub domain_font_size: f32,
    /// Font size of the title.
    pub title_font_size: f32,
    /// Label offered as the default answer for the domain prompt.
    pub domain_text: Option<String>,
    /// Directory bare background names are resolved against.
    pub background_dir: PathBuf,
    /// Fonts for both text layers.
    pub fonts: FontPaths,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            domain_font_size: DEFAULT_DOMAIN_FONT_SIZE,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            domain_text: None,
            background_dir: PathBuf::from("backgroundImages"),
            fonts: FontPaths::default(),
        }
    }
}

impl ComposeConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> CardResult<Self> {
        let f = File::open(path).map_err(|e| {
            CardError::invalid_parameter(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a JSON config.
    pub fn from_reader(r: impl Read) -> CardResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CardError::invalid_parameter(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CardResult<()> {
        Canvas::new(self.canvas_width, self.canvas_height)?;
        validate_font_size("domain_font_size", self.domain_font_size)?;
        validate_font_size("title_font_size", self.title_font_size)?;
        Ok(())
    }

    /// Resolve a background name the user typed.
    ///
    /// A file of that name inside [`Self::background_dir`] wins. Otherwise absolute paths and
    /// paths that exist relative to the working directory are taken as-is, and anything else
    /// falls back to the `background_dir` candidate so the load error names it.
    pub fn resolve_background(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        let in_dir = self.background_dir.join(p);
        if p.is_relative() && in_dir.is_file() {
            return in_dir;
        }
        if p.is_absolute() || p.exists() {
            return p.to_path_buf();
        }
        in_dir
    }

    /// Build a request from these defaults plus the per-card fields.
    pub fn request(
        &self,
        background_path: impl Into<PathBuf>,
        domain_text: impl Into<String>,
        title_text: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> CompositionRequest {
        CompositionRequest {
            background_path: background_path.into(),
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            domain_text: domain_text.into(),
            domain_font_size: self.domain_font_size,
            title_text: title_text.into(),
            title_font_size: self.title_font_size,
            fonts: self.fonts.clone(),
            output_path: output_path.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
