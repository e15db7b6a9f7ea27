//! Third-party JSON endpoint relayed by `GET /fetch`.

use crate::{Error, Result, config::FetchConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Value>;
}

pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Value> {
        debug!("Fetching upstream document from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream {} answered {}", self.url, status);
            return Err(Error::upstream(format!(
                "Upstream {} returned {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::upstream(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| Error::upstream(e.to_string()))
    }
}
