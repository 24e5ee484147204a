pub mod config;
pub mod error;

pub use config::{CryptoConfig, GeoConfig, LogFormat, LoggingConfig};
pub use error::{GeoCoreError, GeoCoreResult};
