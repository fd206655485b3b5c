use std::borrow::Cow;

use crate::{
    assets::font::FontAsset,
    foundation::core::Rgba8,
    foundation::error::{CardError, CardResult},
};

/// Nominal line height for a font size: the historical renderer assumed 72pt faces on a 96 DPI
/// surface, so one line unit is three quarters of the size.
pub fn nominal_line_height(size_px: f32) -> f32 {
    size_px * 72.0 / 96.0
}

/// One shaped line placed on the canvas.
pub struct PlacedLine {
    /// The source text of this line.
    pub text: String,
    /// Single-line Parley layout; glyph positions are relative to the layout's top-left.
    pub layout: parley::Layout<Rgba8>,
    /// Left edge of the line on the canvas.
    pub x: f32,
    /// Baseline position on the canvas.
    pub baseline_y: f32,
    /// Advance width of the line, excluding trailing whitespace.
    pub width: f32,
}

impl std::fmt::Debug for PlacedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacedLine")
            .field("text", &self.text)
            .field("x", &self.x)
            .field("baseline_y", &self.baseline_y)
            .field("width", &self.width)
            .finish()
    }
}

impl PlacedLine {
    /// Distance from the layout's top edge to the baseline of its first line.
    pub fn layout_baseline(&self) -> f32 {
        self.layout
            .lines()
            .next()
            .map(|l| l.metrics().baseline)
            .unwrap_or(0.0)
    }
}

/// Shapes text with exactly one registered font.
///
/// Each engine owns its own Parley contexts and never consults system fonts, so layout only
/// depends on the font bytes it was built from.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    weight: parley::style::FontWeight,
    font: FontAsset,
}

impl TextLayoutEngine {
    /// Register `font` and prepare fresh Parley contexts for it.
    pub fn new(font: &FontAsset) -> CardResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let (family_id, infos) = families
            .first()
            .ok_or_else(|| CardError::image_load("no font families registered from font bytes"))?;
        let weight = infos
            .first()
            .map(|info| info.weight())
            .unwrap_or(parley::style::FontWeight::NORMAL);

        let family_name = font_ctx
            .collection
            .family_name(*family_id)
            .ok_or_else(|| CardError::image_load("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            weight,
            font: font.clone(),
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn font(&self) -> &FontAsset {
        &self.font
    }

    /// Shape `text` as a single unbroken line.
    pub fn shape_line(&mut self, text: &str, size_px: f32) -> CardResult<parley::Layout<Rgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::invalid_parameter(
                "text size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(self.weight));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` on one line.
    pub fn measure(&mut self, text: &str, size_px: f32) -> CardResult<f32> {
        Ok(self.shape_line(text, size_px)?.width())
    }

    /// Greedy word wrap of `text` against `max_width`, measured with this engine's font.
    pub fn wrap(&mut self, text: &str, size_px: f32, max_width: f32) -> CardResult<Vec<String>> {
        wrap_greedy(text, max_width, |s| self.measure(s, size_px))
    }

    /// Shape `lines` and stack them from `top`: the first baseline sits one nominal line height
    /// below `top`, later baselines advance by `nominal * line_spacing`.
    pub fn place_lines(
        &mut self,
        lines: &[String],
        size_px: f32,
        x: f32,
        top: f32,
        line_spacing: f32,
    ) -> CardResult<Vec<PlacedLine>> {
        let nominal = nominal_line_height(size_px);
        let mut out = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            let layout = self.shape_line(line, size_px)?;
            let width = layout.width();
            out.push(PlacedLine {
                text: line.clone(),
                layout,
                x,
                baseline_y: top + nominal + (i as f32) * nominal * line_spacing,
                width,
            });
        }
        Ok(out)
    }

    /// Shape one line whose right edge ends `margin_right` before `right_edge`, with its baseline
    /// at `baseline_y`.
    pub fn place_right_aligned(
        &mut self,
        text: &str,
        size_px: f32,
        right_edge: f32,
        margin_right: f32,
        baseline_y: f32,
    ) -> CardResult<PlacedLine> {
        let layout = self.shape_line(text, size_px)?;
        let width = layout.width();
        Ok(PlacedLine {
            text: text.to_string(),
            layout,
            x: right_edge - width - margin_right,
            baseline_y,
            width,
        })
    }
}

/// Greedy word wrap.
///
/// Hard line breaks in `text` start a new paragraph. Within a paragraph, words (split on
/// whitespace) are appended to the current line while `measure` of the joined line stays within
/// `max_width`. A single word wider than `max_width` gets a line of its own and overflows.
pub fn wrap_greedy(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> CardResult<f32>,
) -> CardResult<Vec<String>> {
    let mut out = Vec::new();
    if text.trim().is_empty() {
        return Ok(out);
    }

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate)? <= max_width {
                current = candidate;
            } else {
                out.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        out.push(current);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
