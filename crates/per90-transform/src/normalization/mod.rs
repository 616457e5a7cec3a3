//! Value-level normalization helpers.

pub mod numeric;

pub use numeric::parse_numeric;
