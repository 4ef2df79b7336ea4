pub mod config;
pub mod lock;

pub use config::*;
pub use lock::*;
