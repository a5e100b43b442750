pub mod aggregate;
pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Aggregation, InputOutcome, RunReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
