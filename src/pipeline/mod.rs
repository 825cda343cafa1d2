//! Pipeline module - correlation, enumeration, scoring and selection

pub mod combinations;
pub mod config;
pub mod correlation;
pub mod error;
pub mod executor;
pub mod loader;
pub mod optimizer;
pub mod scorer;
pub mod selector;

pub use combinations::*;
pub use config::*;
pub use correlation::*;
pub use error::*;
pub use executor::*;
pub use loader::*;
pub use optimizer::*;
pub use scorer::*;
pub use selector::*;
