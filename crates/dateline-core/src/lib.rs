pub mod config;
pub mod error;

pub use config::DatelineConfig;
pub use error::{DatelineError, Result};
