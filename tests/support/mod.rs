#![allow(dead_code)]

use std::path::{Path, PathBuf};

use social_card::FontPaths;


pub use fonts::system_font_path;

/// Scratch directory under `target/`, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("it").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a flat-color opaque background PNG.
pub fn write_background(path: &Path, w: u32, h: u32, rgb: [u8; 3]) {
    image::RgbaImage::from_pixel(w, h, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
        .save(path)
        .unwrap();
}

/// Write a horizontal gradient JPEG; exercises the non-PNG decode path.
pub fn write_gradient_jpeg(path: &Path, w: u32, h: u32) {
    let img = image::RgbImage::from_fn(w, h, |x, y| {
        image::Rgb([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Regular + bold system fonts, or `None` when the machine has no usable fonts.
pub fn system_fonts() -> Option<FontPaths> {
    let fonts = FontPaths {
        regular: system_font_path(false)?,
        bold: system_font_path(true)?,
    };
    Some(fonts)
}

pub fn skip_without_fonts() -> Option<FontPaths> {
    let fonts = system_fonts();
    if fonts.is_none() {
        eprintln!("skipping: no system TrueType/OpenType font found");
    }
    fonts
}
