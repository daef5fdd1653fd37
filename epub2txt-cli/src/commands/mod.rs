//! CLI command implementations

mod convert;

pub use convert::convert;
