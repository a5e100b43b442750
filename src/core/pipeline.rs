use crate::core::aggregate;
use crate::core::extractor::PhoneExtractor;
use crate::core::{Aggregation, ConfigProvider, InputOutcome, Pipeline, RunReport, Storage};
use crate::domain::model::{Delivery, InputSource, Mode, ResultSet};
use crate::utils::error::{PhoneError, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

pub struct ExtractionPipeline<S: Storage, C: ConfigProvider> {
    storage: Arc<S>,
    config: C,
    mode: Mode,
    inputs: Vec<InputSource>,
    extractor: PhoneExtractor,
}

impl<S: Storage + 'static, C: ConfigProvider> ExtractionPipeline<S, C> {
    pub fn new(storage: S, config: C, mode: Mode, inputs: Vec<InputSource>) -> Self {
        Self {
            storage: Arc::new(storage),
            config,
            mode,
            inputs,
            extractor: PhoneExtractor::new(),
        }
    }
}

async fn read_and_extract<S: Storage>(
    storage: &S,
    source: &InputSource,
    extractor: PhoneExtractor,
) -> Result<ResultSet> {
    let text = match source {
        InputSource::File(path) => storage.read_file(path).await,
        InputSource::Stdin => storage.read_stdin().await,
    }
    .map_err(|e| match e {
        e @ PhoneError::RetrievalError { .. } => e,
        other => PhoneError::retrieval(source.label(), other),
    })?;

    tracing::debug!("Read {} bytes from {}", text.len(), source);
    Ok(extractor.extract(&text))
}

#[async_trait::async_trait]
impl<S: Storage + 'static, C: ConfigProvider> Pipeline for ExtractionPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputOutcome>> {
        let permits = Arc::new(Semaphore::new(self.config.max_concurrent_reads().max(1)));
        let mut handles = Vec::with_capacity(self.inputs.len());

        for source in &self.inputs {
            let storage = Arc::clone(&self.storage);
            let permits = Arc::clone(&permits);
            let source = source.clone();
            let extractor = self.extractor;

            handles.push(tokio::spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| PhoneError::TaskError {
                        message: e.to_string(),
                    })?;
                read_and_extract(storage.as_ref(), &source, extractor).await
            }));
        }

        // Awaited in input order so every result maps back to its source,
        // whatever order the reads complete in.
        let mut outcomes = Vec::with_capacity(handles.len());
        for (source, handle) in self.inputs.iter().zip(handles) {
            let result = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(PhoneError::retrieval(source.label(), join_error)),
            };
            outcomes.push(InputOutcome {
                source: source.clone(),
                result,
            });
        }

        Ok(outcomes)
    }

    async fn transform(&self, outcomes: Vec<InputOutcome>) -> Result<Aggregation> {
        Ok(aggregate::merge(outcomes))
    }

    async fn load(&self, aggregation: Aggregation) -> Result<RunReport> {
        let Aggregation { phones, failures } = aggregation;

        let delivery = match self.config.output_path() {
            Some(path) if !phones.is_empty() => {
                let mut data = phones
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                data.push('\n');

                tracing::debug!("Writing {} numbers to {}", phones.len(), path.display());
                let saved = match self.storage.write_file(path, data.as_bytes()).await {
                    Ok(()) => {
                        tracing::info!("📁 Results saved to {}", path.display());
                        true
                    }
                    Err(e) => {
                        let e = PhoneError::persistence(path.display().to_string(), e);
                        tracing::error!("❌ {}", e);
                        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                        false
                    }
                };

                Delivery::File {
                    path: path.to_path_buf(),
                    saved,
                }
            }
            _ => Delivery::Console,
        };

        Ok(RunReport {
            mode: self.mode,
            phones,
            failures,
            delivery,
        })
    }
}
