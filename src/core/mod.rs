pub mod checker;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{CheckSuite, GradeInput, PresenceReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
