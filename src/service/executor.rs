use super::types::{ExternalPost, IntentResult, SummaryResult, TextRequest};
use crate::{
    Error, Result,
    config::Config,
    inference::{HuggingFaceClient, InferenceProvider, SummaryParams},
    source::{DataSource, HttpDataSource},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Request handling shared by every route. Built once at startup; holds only
/// read-only handles, so it is shared behind an `Arc` without locking.
pub struct NlpService {
    inference: Arc<dyn InferenceProvider>,
    source: Arc<dyn DataSource>,
    summary: SummaryParams,
}

impl NlpService {
    pub fn new(
        inference: Arc<dyn InferenceProvider>,
        source: Arc<dyn DataSource>,
        summary: SummaryParams,
    ) -> Self {
        Self {
            inference,
            source,
            summary,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            "Initializing pipelines: summarization={}, classification={}",
            config.inference.summarization_model, config.inference.classification_model
        );

        let inference = Arc::new(HuggingFaceClient::new(config.inference.clone()));
        let source = Arc::new(HttpDataSource::new(config.fetch.clone()));
        let summary = SummaryParams::from(&config.inference.summary);

        Self::new(inference, source, summary)
    }

    pub fn summary_params(&self) -> &SummaryParams {
        &self.summary
    }

    pub async fn summarize(&self, request: &TextRequest) -> Result<SummaryResult> {
        ensure_text(request)?;

        let summary = self.inference.summarize(&request.text, &self.summary).await?;
        debug!("Produced summary of {} chars", summary.len());

        Ok(SummaryResult { summary })
    }

    pub async fn detect_intent(&self, request: &TextRequest) -> Result<IntentResult> {
        ensure_text(request)?;

        let intent = self.inference.classify(&request.text).await?;
        debug!("Top intent {} ({:.4})", intent.label, intent.score);

        Ok(IntentResult { intent })
    }

    pub async fn fetch_data(&self) -> Result<ExternalPost> {
        self.source.fetch().await
    }
}

fn ensure_text(request: &TextRequest) -> Result<()> {
    if request.text.is_empty() {
        return Err(Error::validation(NO_TEXT_PROVIDED));
    }
    Ok(())
}
