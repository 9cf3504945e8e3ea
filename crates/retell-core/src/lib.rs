//! Retell core — configuration and error taxonomy.

pub mod config;
pub mod error;

pub use config::RetellConfig;
pub use error::{Error, Result};
