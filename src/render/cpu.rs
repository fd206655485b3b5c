use crate::{
    foundation::core::{Canvas, Rgba8},
    text::layout::PlacedLine,
};

/// A run of placed lines drawn in one color with one font, optionally nudged by an offset.
pub struct TextPass<'a> {
    pub lines: &'a [PlacedLine],
    pub font: vello_cpu::peniko::FontData,
    pub color: Rgba8,
    pub offset: (f64, f64),
}

/// Rasterizes text passes into a transparent, canvas-sized premultiplied layer.
pub struct CpuTextRasterizer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuTextRasterizer {
    pub fn new(canvas: Canvas) -> Self {
        let (width, height) = canvas.dims_u16();
        Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        }
    }

    /// Queue a pass; later passes paint over earlier ones.
    pub fn draw(&mut self, pass: &TextPass<'_>) {
        let (dx, dy) = pass.offset;
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            pass.color.r,
            pass.color.g,
            pass.color.b,
            pass.color.a,
        ));

        for line in pass.lines {
            let top = f64::from(line.baseline_y - line.layout_baseline());
            self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                f64::from(line.x) + dx,
                top + dy,
            )));

            for l in line.layout.lines() {
                for item in l.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    self.ctx
                        .glyph_run(&pass.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Flush queued passes and return the layer as premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}
