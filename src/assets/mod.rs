//! Loading of external inputs: the background image and font files.

/// Background decoding, Lanczos resize and premultiplication.
pub mod decode;
/// Font file loading.
pub mod font;
