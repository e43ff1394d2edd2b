//! Browser capability bridge used by the `gallery_host_web` adapters.
//!
//! This module keeps a stable crate-internal API while [`interop`] routes each call to the
//! target-specific implementation.

mod interop;

pub(crate) use interop::{HttpTextResponse, LocationEventListener};

/// Name of the window event dispatched after bridge-driven navigation.
pub(crate) const LOCATION_CHANGE_EVENT: &str = "locationchange";

pub(crate) fn current_pathname() -> Option<String> {
    interop::current_pathname()
}

pub(crate) fn push_history_state(path: &str) -> Result<(), String> {
    interop::push_history_state(path)
}

pub(crate) fn dispatch_location_change() -> Result<(), String> {
    interop::dispatch_window_event(LOCATION_CHANGE_EVENT)
}

pub(crate) fn listen_location_changes(
    callback: std::rc::Rc<dyn Fn()>,
) -> Result<LocationEventListener, String> {
    interop::listen_window_events(&["popstate", LOCATION_CHANGE_EVENT], callback)
}

pub(crate) async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    interop::fetch_text(url).await
}

pub(crate) fn load_local_storage(key: &str) -> Result<Option<String>, String> {
    interop::load_local_storage(key)
}
