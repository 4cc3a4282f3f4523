pub mod algorithms;
pub mod data_structure;
pub mod error;

pub use error::{DsaError, Result};

#[cfg(test)]
mod tests;
