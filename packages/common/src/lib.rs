pub mod config;
pub mod error;
pub mod manifest;
pub mod result;

pub use config::*;
pub use error::*;
pub use manifest::*;
pub use result::*;
