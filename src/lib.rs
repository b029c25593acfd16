#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Commands};

pub use core::{engine::FixtureEngine, names::RandomNames};
pub use domain::model::{GenerationRequest, Service};
pub use domain::ports::NameSource;
pub use utils::error::{GeneratorError, Result};
