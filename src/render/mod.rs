//! Compositing the card (CPU only).

/// Premultiplied source-over and the overlay rectangle fill.
pub mod composite;
/// Glyph rasterization into a transparent layer.
pub(crate) mod cpu;
/// `render_card` / `compose` and PNG output.
pub mod pipeline;
