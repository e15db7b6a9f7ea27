pub mod config;
pub mod error;
pub mod inference;
pub mod server;
pub mod service;
pub mod source;

pub use error::{Error, Result};
