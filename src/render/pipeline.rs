use std::{io::Cursor, path::Path};

use crate::{
    assets::decode::{load_background, unpremultiply_rgba8_in_place},
    assets::font::load_font,
    composition::request::CompositionRequest,
    foundation::core::{Canvas, Rgba8},
    foundation::error::{CardError, CardResult},
    render::composite::{fill_rect_over, over_in_place},
    render::cpu::{CpuTextRasterizer, TextPass},
    text::layout::{TextLayoutEngine, nominal_line_height},
};

/// Inset of the contrast overlay from every canvas edge.
pub const OVERLAY_MARGIN: f64 = 20.0;
/// Overlay color: black at 204/255 alpha.
pub const OVERLAY_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 204);

/// Gap between the domain label's right edge and the canvas edge.
pub const DOMAIN_MARGIN_RIGHT: f32 = 50.0;
/// Vertical nudge of the domain baseline below `height - nominal_line_height`.
pub const DOMAIN_BASELINE_DROP: f32 = 10.0;

/// Left (and, for wrapping, right) margin of the title block.
pub const TITLE_MARGIN_X: f32 = 60.0;
/// Top edge of the title block.
pub const TITLE_TOP: f32 = 90.0;
/// Baseline advance between title lines, in nominal line heights.
pub const TITLE_LINE_SPACING: f32 = 1.5;
/// Shadow offset in both axes.
pub const TITLE_SHADOW_OFFSET: f64 = 1.0;

/// Rendered card in straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CardImage {
    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> CardResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| CardError::image_write("rgba buffer does not match image size"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| CardError::image_write(format!("encode png: {e}")))?;
        Ok(buf)
    }

    /// Encode and write to `path`, creating missing parent directories. An existing file is
    /// replaced.
    pub fn write_png(&self, path: &Path) -> CardResult<()> {
        let png = self.encode_png()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                CardError::image_write(format!(
                    "create output dir '{}': {e}",
                    parent.display()
                ))
            })?;
        }
        std::fs::write(path, png)
            .map_err(|e| CardError::image_write(format!("write png '{}': {e}", path.display())))
    }
}

/// Composite the card described by `req` in memory.
///
/// Layers, bottom to top: the background resized to the canvas, the translucent overlay inset by
/// [`OVERLAY_MARGIN`], the domain label bottom-right, then the title with its drop shadow.
#[tracing::instrument(skip_all, fields(width = req.canvas_width, height = req.canvas_height))]
pub fn render_card(req: &CompositionRequest) -> CardResult<CardImage> {
    let canvas = req.validate()?;

    let background = load_background(&req.background_path, canvas)?;
    let mut pixels = background.rgba8_premul;

    let overlay = canvas.inset(OVERLAY_MARGIN);
    tracing::debug!(?overlay, "fill overlay");
    fill_rect_over(&mut pixels, canvas, overlay, OVERLAY_COLOR)?;

    let regular = load_font(&req.fonts.regular)?;
    let bold = load_font(&req.fonts.bold)?;
    let mut domain_engine = TextLayoutEngine::new(&regular)?;
    let mut title_engine = TextLayoutEngine::new(&bold)?;

    let text_layer = draw_text_layer(canvas, req, &mut domain_engine, &mut title_engine)?;
    over_in_place(&mut pixels, &text_layer)?;

    unpremultiply_rgba8_in_place(&mut pixels);
    Ok(CardImage {
        width: canvas.width(),
        height: canvas.height(),
        data: pixels,
    })
}

fn draw_text_layer(
    canvas: Canvas,
    req: &CompositionRequest,
    domain_engine: &mut TextLayoutEngine,
    title_engine: &mut TextLayoutEngine,
) -> CardResult<Vec<u8>> {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    let domain_lines = if req.domain_text.is_empty() {
        Vec::new()
    } else {
        let baseline = height - nominal_line_height(req.domain_font_size) + DOMAIN_BASELINE_DROP;
        vec![domain_engine.place_right_aligned(
            &req.domain_text,
            req.domain_font_size,
            width,
            DOMAIN_MARGIN_RIGHT,
            baseline,
        )?]
    };

    let max_width = width - 2.0 * TITLE_MARGIN_X;
    let wrapped = title_engine.wrap(&req.title_text, req.title_font_size, max_width)?;
    let title_lines = title_engine.place_lines(
        &wrapped,
        req.title_font_size,
        TITLE_MARGIN_X,
        TITLE_TOP,
        TITLE_LINE_SPACING,
    )?;
    tracing::debug!(
        lines = title_lines.len(),
        max_width,
        family = title_engine.family_name(),
        "wrapped title"
    );

    let mut raster = CpuTextRasterizer::new(canvas);
    raster.draw(&TextPass {
        lines: &domain_lines,
        font: domain_engine.font().font_data(),
        color: Rgba8::WHITE,
        offset: (0.0, 0.0),
    });
    let title_font = title_engine.font().font_data();
    raster.draw(&TextPass {
        lines: &title_lines,
        font: title_font.clone(),
        color: Rgba8::BLACK,
        offset: (TITLE_SHADOW_OFFSET, TITLE_SHADOW_OFFSET),
    });
    raster.draw(&TextPass {
        lines: &title_lines,
        font: title_font,
        color: Rgba8::WHITE,
        offset: (0.0, 0.0),
    });
    Ok(raster.finish())
}

/// Render the card and write it as PNG to `req.output_path`.
///
/// Nothing is written unless every drawing step succeeded. The first error is returned as-is.
#[tracing::instrument(skip_all, fields(out = %req.output_path.display()))]
pub fn compose(req: &CompositionRequest) -> CardResult<()> {
    let card = render_card(req)?;
    card.write_png(&req.output_path)?;
    tracing::info!(
        width = card.width,
        height = card.height,
        "wrote {}",
        req.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
