//! Directory-listing models and fetcher contracts.

pub mod service;
pub mod types;
