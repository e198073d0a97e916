mod application;
pub mod data;
mod input;
mod progress;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use input::{InputError, InputSource};
pub use progress::BuildProgress;
pub use runtime_config::RuntimeConfig;
