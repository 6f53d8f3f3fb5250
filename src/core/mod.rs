pub mod defaults;
pub mod error;
pub mod migrate;
pub mod paths;

pub use error::{Error, ErrorCode, Result};
