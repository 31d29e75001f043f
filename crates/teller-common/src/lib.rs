pub mod errors;

pub use errors::{ConfigError, TellerError};

pub type Result<T> = std::result::Result<T, TellerError>;
