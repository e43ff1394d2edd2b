//! History bridge backed by the browser History API.

use gallery_host::{HistoryBridge, LocationListener, LocationSubscription, ROOT_PATH};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser history adapter.
///
/// `navigate` pushes a new history entry and then dispatches a `locationchange` window event.
/// Listeners are attached to both that event and the native `popstate` event, so in-page
/// navigation and the back/forward controls reach them the same way.
pub struct WebHistoryBridge;

impl HistoryBridge for WebHistoryBridge {
    fn current_path(&self) -> String {
        bridge::current_pathname()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| ROOT_PATH.to_string())
    }

    fn navigate(&self, path: &str) {
        if bridge::push_history_state(path).is_ok() {
            let _ = bridge::dispatch_location_change();
        }
    }

    fn on_location_change(
        &self,
        listener: LocationListener,
    ) -> Result<LocationSubscription, String> {
        let registration = bridge::listen_location_changes(listener)?;
        Ok(LocationSubscription::new(move || registration.remove()))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn off_browser_history_reports_root_and_refuses_listeners() {
        let history = WebHistoryBridge;
        history.navigate("/photos");

        assert_eq!(history.current_path(), "/");
        let err = history
            .on_location_change(Rc::new(|| {}))
            .expect_err("no window events off-browser");
        assert!(err.contains("wasm32"));
    }
}
