pub mod config;
pub mod parsed;
pub mod plan;

pub use config::*;
pub use parsed::*;
pub use plan::*;
