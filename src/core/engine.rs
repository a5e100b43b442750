use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;

pub struct ExtractionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExtractionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::debug!("Reading inputs...");
        let outcomes = self.pipeline.extract().await?;
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        tracing::debug!("Processed {} inputs ({} failed)", outcomes.len(), failed);

        let aggregation = self.pipeline.transform(outcomes).await?;
        tracing::info!("Found {} unique numbers", aggregation.phones.len());

        let report = self.pipeline.load(aggregation).await?;
        if !report.failures.is_empty() {
            tracing::warn!("⚠️ {} inputs could not be read", report.failures.len());
        }

        Ok(report)
    }
}
