mod default_mode_chain_generator;

pub use default_mode_chain_generator::{DefaultModeChainGenerator, DefaultModeChainGeneratorFactory};
