mod executor;
mod types;

pub use executor::{NO_TEXT_PROVIDED, NlpService};
pub use types::{ExternalPost, IntentResult, SummaryResult, TextRequest};
