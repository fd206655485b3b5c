use crate::foundation::error::{CardError, CardResult};

pub use kurbo::Rect;

/// Output canvas dimensions in pixels. Only constructible through [`Canvas::new`], so both
/// sides are always in `1..=u16::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero sizes and sizes the rasterizer cannot address.
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        if width == 0 || height == 0 {
            return Err(CardError::invalid_parameter(format!(
                "canvas size must be > 0 (got {width}x{height})"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(CardError::invalid_parameter(format!(
                "canvas size must be <= {} (got {width}x{height})",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Width and height as the `u16` pair `vello_cpu` surfaces take.
    pub fn dims_u16(self) -> (u16, u16) {
        (self.width as u16, self.height as u16)
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Canvas bounds shrunk by `margin` on every side. Collapses to an empty rect when the
    /// margin eats the whole canvas.
    pub fn inset(self, margin: f64) -> Rect {
        let b = self.bounds();
        let x0 = margin.min(b.x1);
        let y0 = margin.min(b.y1);
        let x1 = (b.x1 - margin).max(x0);
        let y1 = (b.y1 - margin).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
