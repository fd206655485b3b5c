//! social-card composites social-media preview images.
//!
//! A card is a background photo stretched to a fixed canvas (1200x628 by default), a
//! translucent black overlay inset 20 px from every edge, a short domain label in the
//! bottom-right corner and a word-wrapped title with a drop shadow in the top-left.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`CompositionRequest::validate`] rejects non-positive sizes before any IO.
//! 2. **Decode**: the background is decoded and resized with Lanczos3 into premultiplied RGBA8.
//! 3. **Overlay**: the inset rectangle is composited source-over in software.
//! 4. **Text**: both labels are shaped with Parley and rasterized with `vello_cpu` into a
//!    transparent layer that is composited over the canvas.
//! 5. **Encode**: the canvas is encoded as PNG in memory and only then written out.
//!
//! The whole pipeline is synchronous and deterministic for fixed inputs; fonts come only from
//! the files named in the request, never from the system.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod foundation;
mod render;
mod text;

pub mod input;

#[cfg(test)]
#[path = "../tests/support/fonts.rs"]
mod test_support;

pub use assets::decode::{
    PreparedBackground, decode_background, load_background, premultiply_rgba8_in_place,
    unpremultiply_rgba8_in_place,
};
pub use assets::font::{FontAsset, load_font};
pub use composition::config::ComposeConfig;
pub use composition::request::{
    CompositionRequest, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DOMAIN_FONT_SIZE,
    DEFAULT_TITLE_FONT_SIZE, FontPaths,
};
pub use foundation::core::{Canvas, Rect, Rgba8};
pub use foundation::error::{CardError, CardResult};
pub use render::composite::{fill_rect_over, over, over_in_place, pixel_span};
pub use render::pipeline::{
    CardImage, DOMAIN_BASELINE_DROP, DOMAIN_MARGIN_RIGHT, OVERLAY_COLOR, OVERLAY_MARGIN,
    TITLE_LINE_SPACING, TITLE_MARGIN_X, TITLE_SHADOW_OFFSET, TITLE_TOP, compose, render_card,
};
pub use text::layout::{PlacedLine, TextLayoutEngine, nominal_line_height, wrap_greedy};
