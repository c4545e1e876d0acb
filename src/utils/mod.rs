// Shared utilities

pub mod constants;

pub use constants::*;
