pub mod agent;
pub mod main;
pub mod stateless_llm;
pub mod system;
pub mod utils;

pub use main::Config;
pub use stateless_llm::LlmConfig;
