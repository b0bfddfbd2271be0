//! CLI command implementations.

pub mod price;
pub mod sweep;
