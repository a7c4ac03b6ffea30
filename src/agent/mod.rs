pub mod input_types;
pub mod output_types;
pub mod prompts;
pub mod stateless_llm_factory;

pub mod stateless_llm;

pub use input_types::*;
pub use output_types::*;
pub use stateless_llm_factory::*;
pub use stateless_llm::*;
