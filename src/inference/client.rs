use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String>;

    async fn classify(&self, text: &str) -> Result<Classification>;
}

/// Pipelines served by the Hugging Face inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    summarization_model: String,
    classification_model: String,
    wait_for_model: bool,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.filter(|key| !key.is_empty()),
            summarization_model: config.summarization_model,
            classification_model: config.classification_model,
            wait_for_model: config.wait_for_model,
        }
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn run_pipeline<P, T>(&self, model: &str, inputs: &str, parameters: Option<P>) -> Result<T>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let url = self.model_url(model);
        let request = PipelineRequest {
            inputs,
            parameters,
            options: PipelineOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        debug!("Invoking pipeline {} ({} chars of input)", model, inputs.len());

        let mut req_builder = self.client.post(&url).json(&request);
        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.bearer_auth(api_key);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| Error::inference(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::inference(e.to_string()))?;

        if let Ok(provider_error) = serde_json::from_slice::<ProviderErrorBody>(&body) {
            return Err(Error::inference(provider_error.error.into_message()));
        }

        if !status.is_success() {
            return Err(Error::inference(format!(
                "Inference provider returned {} for model {}",
                status, model
            )));
        }

        serde_json::from_slice(&body).map_err(|e| Error::inference(e.to_string()))
    }
}

#[async_trait]
impl InferenceProvider for HuggingFaceClient {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        let outputs: Vec<SummaryOutput> = self
            .run_pipeline(&self.summarization_model, text, Some(params))
            .await?;

        debug!("Summarization returned {} candidates", outputs.len());

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or_else(|| Error::inference("Summarization pipeline returned no output"))
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let output: ClassificationOutput = self
            .run_pipeline::<(), _>(&self.classification_model, text, None)
            .await?;

        output
            .top()
            .ok_or_else(|| Error::inference("Classification pipeline returned no labels"))
    }
}
