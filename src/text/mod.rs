/// Shaping, measuring and word wrapping with Parley.
pub mod layout;
