use std::rc::Rc;

use super::HttpTextResponse;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

#[derive(Debug)]
pub(crate) struct LocationEventListener;

impl LocationEventListener {
    pub(crate) fn remove(self) {}
}

pub(crate) fn current_pathname() -> Option<String> {
    None
}

pub(crate) fn push_history_state(_path: &str) -> Result<(), String> {
    Err(unsupported())
}

pub(crate) fn dispatch_window_event(_name: &str) -> Result<(), String> {
    Err(unsupported())
}

pub(crate) fn listen_window_events(
    _names: &[&'static str],
    _callback: Rc<dyn Fn()>,
) -> Result<LocationEventListener, String> {
    Err(unsupported())
}

pub(crate) async fn fetch_text(_url: &str) -> Result<HttpTextResponse, String> {
    Err(unsupported())
}

pub(crate) fn load_local_storage(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}
