/// Canvas geometry and colors.
pub mod core;
/// Error taxonomy.
pub mod error;
