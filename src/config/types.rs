use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_inference_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_summarization_model")]
    pub summarization_model: String,
    #[serde(default = "default_classification_model")]
    pub classification_model: String,
    #[serde(default)]
    pub summary: SummaryConfig,
    /// Ask the provider to block until a cold model is loaded instead of
    /// answering 503.
    #[serde(default = "default_true")]
    pub wait_for_model: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default)]
    pub do_sample: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_inference_base_url(),
            api_key: None,
            summarization_model: default_summarization_model(),
            classification_model: default_classification_model(),
            summary: SummaryConfig::default(),
            wait_for_model: default_true(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            min_length: default_min_length(),
            do_sample: false,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: default_fetch_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_inference_base_url() -> String {
    "https://router.huggingface.co/hf-inference".to_string()
}

fn default_summarization_model() -> String {
    "sshleifer/distilbart-cnn-12-6".to_string()
}

fn default_classification_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_max_length() -> u32 {
    100
}

fn default_min_length() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

fn default_fetch_url() -> String {
    "https://jsonplaceholder.typicode.com/posts/1".to_string()
}
