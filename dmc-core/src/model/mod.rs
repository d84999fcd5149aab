pub mod candidate;
pub mod component;
mod error;
pub mod plan;
pub mod trip;

pub use error::ModeChoiceError;
