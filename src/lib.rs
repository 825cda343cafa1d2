//! Hellwig: Variable Selection Library
//!
//! Selects the subset of predictor variables with the greatest integral
//! information capacity according to Hellwig's method.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
