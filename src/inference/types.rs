use crate::config::SummaryConfig;
use serde::{Deserialize, Serialize};

/// Decoding parameters for the summarization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self::from(&SummaryConfig::default())
    }
}

impl From<&SummaryConfig> for SummaryParams {
    fn from(config: &SummaryConfig) -> Self {
        Self {
            max_length: config.max_length,
            min_length: config.min_length,
            do_sample: config.do_sample,
        }
    }
}

/// Top label produced by the text-classification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct PipelineRequest<'a, P: Serialize> {
    pub inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<P>,
    pub options: PipelineOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct PipelineOptions {
    pub wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryOutput {
    pub summary_text: String,
}

/// The hosted classifier answers either a flat list of labels or one list
/// per input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassificationOutput {
    Batched(Vec<Vec<Classification>>),
    Flat(Vec<Classification>),
}

impl ClassificationOutput {
    pub fn top(self) -> Option<Classification> {
        let labels = match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(labels) => labels,
        };
        labels
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub error: ProviderErrorMessage,
}

/// Parameter validation failures arrive as a list of messages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProviderErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ProviderErrorMessage {
    pub fn into_message(self) -> String {
        match self {
            Self::Single(message) => message,
            Self::Many(messages) => messages.join("; "),
        }
    }
}
