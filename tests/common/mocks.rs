use async_trait::async_trait;
use multi_api_rust::{
    Error, Result,
    inference::{Classification, InferenceProvider, SummaryParams},
    source::DataSource,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock inference provider for testing
#[derive(Debug, Default)]
pub struct MockInferenceProvider {
    pub summary: Option<String>,
    pub classification: Option<Classification>,
    pub error: Option<String>,
    pub summarize_calls: Arc<Mutex<Vec<(String, SummaryParams)>>>,
    pub classify_calls: Arc<Mutex<Vec<String>>>,
}

impl MockInferenceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_classification(mut self, label: impl Into<String>, score: f64) -> Self {
        self.classification = Some(Classification {
            label: label.into(),
            score,
        });
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn summarize_requests(&self) -> Vec<(String, SummaryParams)> {
        self.summarize_calls.lock().unwrap().clone()
    }

    pub fn classify_requests(&self) -> Vec<String> {
        self.classify_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        self.summarize_calls
            .lock()
            .unwrap()
            .push((text.to_string(), params.clone()));

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        self.summary
            .clone()
            .ok_or_else(|| Error::inference("No mock summary configured"))
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        self.classify_calls.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        self.classification
            .clone()
            .ok_or_else(|| Error::inference("No mock classification configured"))
    }
}

/// Mock upstream JSON source for testing
#[derive(Debug, Default)]
pub struct MockDataSource {
    pub body: Option<Value>,
    pub error: Option<String>,
    pub calls: Arc<Mutex<usize>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch(&self) -> Result<Value> {
        *self.calls.lock().unwrap() += 1;

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        self.body
            .clone()
            .ok_or_else(|| Error::upstream("No mock body configured"))
    }
}
