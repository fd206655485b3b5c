//! What to draw: per-card requests and shared defaults.

/// JSON config of recognized default options.
pub mod config;
/// The per-card parameter set.
pub mod request;
