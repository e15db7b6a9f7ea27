mod client;
mod types;

pub use client::{HuggingFaceClient, InferenceProvider};
pub use types::{Classification, SummaryParams};
