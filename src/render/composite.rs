use crate::{
    foundation::core::{Canvas, Rect, Rgba8},
    foundation::error::{CardError, CardResult},
};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a full-canvas premultiplied layer over `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> CardResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CardError::invalid_parameter(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Pixel span `[x0, x1) x [y0, y1)` covered by `rect`, clipped to `canvas`.
///
/// Edges are snapped to whole pixels; a pixel is covered when its center lies inside `rect`.
pub fn pixel_span(canvas: Canvas, rect: Rect) -> (u32, u32, u32, u32) {
    let snap = |v: f64, max: u32| -> u32 { v.round().clamp(0.0, f64::from(max)) as u32 };
    let x0 = snap(rect.x0, canvas.width());
    let y0 = snap(rect.y0, canvas.height());
    let x1 = snap(rect.x1, canvas.width()).max(x0);
    let y1 = snap(rect.y1, canvas.height()).max(y0);
    (x0, y0, x1, y1)
}

/// Source-over a solid color onto the pixels covered by `rect`.
pub fn fill_rect_over(
    dst: &mut [u8],
    canvas: Canvas,
    rect: Rect,
    color: Rgba8,
) -> CardResult<()> {
    if dst.len() != canvas.pixel_count() * 4 {
        return Err(CardError::invalid_parameter(
            "fill_rect_over buffer does not match canvas size",
        ));
    }
    let src = color.to_premul();
    let (x0, y0, x1, y1) = pixel_span(canvas, rect);
    let stride = canvas.width() as usize * 4;
    for y in y0..y1 {
        let row = &mut dst[y as usize * stride..(y as usize + 1) * stride];
        for px in row[x0 as usize * 4..x1 as usize * 4].chunks_exact_mut(4) {
            let out = over([px[0], px[1], px[2], px[3]], src);
            px.copy_from_slice(&out);
        }
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
