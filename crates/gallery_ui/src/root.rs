//! Root controller: keeps the page shell in sync with the browser location.

use std::{cell::RefCell, rc::Rc};

use gallery_host::{HistoryBridge, LocationSubscription, ROOT_PATH};
use leptos::logging;

use crate::{shell::PageShell, view::PathView};

fn normalize_location(path: String) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path
    }
}

/// Forwards the current location path to a sink on attach and on every location change.
///
/// Notifications carry no path; the controller always re-reads
/// [`HistoryBridge::current_path`].
#[derive(Debug)]
pub struct RootController {
    subscription: Option<LocationSubscription>,
}

impl RootController {
    /// Sends the current path to `on_path`, then subscribes to location changes.
    ///
    /// When the host cannot deliver notifications the failure is logged and only the initial
    /// path is forwarded.
    pub fn attach(
        history: Rc<dyn HistoryBridge>,
        trace_navigation: bool,
        on_path: impl Fn(String) + 'static,
    ) -> Self {
        let on_path = Rc::new(on_path);
        on_path(normalize_location(history.current_path()));

        let reader = Rc::clone(&history);
        let forward = Rc::clone(&on_path);
        let listener = Rc::new(move || {
            let path = normalize_location(reader.current_path());
            if trace_navigation {
                logging::log!("location changed: {path}");
            }
            forward(path);
        });

        let subscription = match history.on_location_change(listener) {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                logging::warn!("location change notifications unavailable: {err}");
                None
            }
        };
        Self { subscription }
    }

    /// Attaches with `shell` as the sink.
    pub fn attach_shell(
        history: Rc<dyn HistoryBridge>,
        trace_navigation: bool,
        shell: Rc<RefCell<PageShell>>,
    ) -> Self {
        Self::attach(history, trace_navigation, move |path| {
            shell.borrow_mut().set_path(&path);
        })
    }

    /// Returns `true` while location changes are being observed.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops observing location changes.
    ///
    /// The listener holds the history bridge and the sink; detaching releases both.
    pub fn detach(self) {
        if let Some(subscription) = self.subscription {
            subscription.remove();
        }
    }
}
