pub mod assemble;
pub mod extract;
pub mod llm;
pub mod prompts;
pub mod runner;
pub mod sanitize;
pub mod strategy;

pub use assemble::*;
pub use extract::*;
pub use llm::*;
pub use prompts::*;
pub use runner::*;
pub use sanitize::*;
pub use strategy::*;
