// src/utils/mod.rs
mod format;
mod validation;

pub use format::*;
pub use validation::*;
