use serde::{Deserialize, Serialize};

pub const LIVENESS_MESSAGE: &str = "Multi-API FastAPI Backend is Live!";

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self {
            message: LIVENESS_MESSAGE.to_string(),
        }
    }
}
