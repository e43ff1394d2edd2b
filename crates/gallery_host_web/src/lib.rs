//! Browser (`wasm32`) implementations of [`gallery_host`] service contracts.
//!
//! This crate wires the History API, the Fetch API and `localStorage` into the host traits the
//! gallery views consume. Browser calls go through `bridge::interop`, which has a `wasm`
//! implementation and a native fallback shim so the crate builds and tests off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host bundle assembly for the browser entry point.
pub mod adapters;
mod bridge;
pub mod config;
pub mod history;
pub mod listing;
pub mod spawn;

pub use adapters::{build_gallery_host, load_gallery_config};
pub use config::WebConfigStore;
pub use history::WebHistoryBridge;
pub use listing::WebDirectoryFetcher;
pub use spawn::WebSpawner;
