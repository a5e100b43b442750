use crate::domain::model::{Aggregation, InputOutcome, RunReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn read_stdin(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> Option<&Path>;
    fn max_concurrent_reads(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InputOutcome>>;
    async fn transform(&self, outcomes: Vec<InputOutcome>) -> Result<Aggregation>;
    async fn load(&self, aggregation: Aggregation) -> Result<RunReport>;
}
