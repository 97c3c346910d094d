pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::core::checker::check_document;
pub use crate::core::{engine::GradeEngine, pipeline::GradePipeline};
pub use config::{cli::LocalStorage, CliConfig};
pub use domain::model::{CheckSuite, GradeInput, PresenceReport};
pub use utils::error::{GradeError, Result};
