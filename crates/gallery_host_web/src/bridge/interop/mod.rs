//! Shared transport interop for the browser bridge.
//!
//! Routes calls to target-specific implementations while preserving a uniform API.

use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub(crate) use imp::LocationEventListener;

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpTextResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

pub(crate) fn current_pathname() -> Option<String> {
    imp::current_pathname()
}

pub(crate) fn push_history_state(path: &str) -> Result<(), String> {
    imp::push_history_state(path)
}

pub(crate) fn dispatch_window_event(name: &str) -> Result<(), String> {
    imp::dispatch_window_event(name)
}

pub(crate) fn listen_window_events(
    names: &[&'static str],
    callback: Rc<dyn Fn()>,
) -> Result<LocationEventListener, String> {
    imp::listen_window_events(names, callback)
}

pub(crate) async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    imp::fetch_text(url).await
}

pub(crate) fn load_local_storage(key: &str) -> Result<Option<String>, String> {
    imp::load_local_storage(key)
}
