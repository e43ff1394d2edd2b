//! Browser-history contract and in-memory adapters.
//!
//! The gallery keeps its entire navigation state in the location path. Views change it through
//! [`HistoryBridge::navigate`] and observe it through [`HistoryBridge::on_location_change`], which
//! fires both for bridge-driven navigation and for native back/forward traversal.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::path::ROOT_PATH;

/// Callback invoked after the current location changed.
///
/// Listeners receive no payload; they re-read [`HistoryBridge::current_path`].
pub type LocationListener = Rc<dyn Fn()>;

/// Navigation primitives injected into the views.
pub trait HistoryBridge {
    /// Returns the path of the current location.
    fn current_path(&self) -> String;

    /// Pushes a new history entry for `path` without reloading, then notifies listeners.
    fn navigate(&self, path: &str);

    /// Registers `listener` for location changes until the returned subscription is removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot deliver location notifications.
    fn on_location_change(
        &self,
        listener: LocationListener,
    ) -> Result<LocationSubscription, String>;
}

/// Handle for a registered [`LocationListener`].
#[must_use = "dropping the subscription keeps the listener registered forever"]
pub struct LocationSubscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl LocationSubscription {
    /// Wraps the closure that unregisters the listener.
    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// Subscription that has nothing to unregister.
    pub fn noop() -> Self {
        Self { remove: None }
    }

    /// Unregisters the listener.
    pub fn remove(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for LocationSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationSubscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// History bridge for unsupported targets: always at the root, never notifies.
pub struct NoopHistoryBridge;

impl HistoryBridge for NoopHistoryBridge {
    fn current_path(&self) -> String {
        ROOT_PATH.to_string()
    }

    fn navigate(&self, _path: &str) {}

    fn on_location_change(
        &self,
        _listener: LocationListener,
    ) -> Result<LocationSubscription, String> {
        Ok(LocationSubscription::noop())
    }
}

struct MemoryHistoryInner {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<(u64, LocationListener)>,
    next_listener_id: u64,
    navigations: Vec<String>,
}

#[derive(Clone)]
/// In-memory history stack used by tests and headless composition.
pub struct MemoryHistory {
    inner: Rc<RefCell<MemoryHistoryInner>>,
}

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryHistory")
            .field("entries", &inner.entries)
            .field("cursor", &inner.cursor)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl MemoryHistory {
    /// Creates a history whose only entry is `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryHistoryInner {
                entries: vec![path.into()],
                cursor: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
                navigations: Vec::new(),
            })),
        }
    }

    /// Paths passed to [`HistoryBridge::navigate`], oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.inner.borrow().entries.clone()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Simulates the native back control. Returns `false` at the oldest entry.
    pub fn back(&self) -> bool {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.cursor == 0 {
                false
            } else {
                inner.cursor -= 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    /// Simulates the native forward control. Returns `false` at the newest entry.
    pub fn forward(&self) -> bool {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.cursor + 1 >= inner.entries.len() {
                false
            } else {
                inner.cursor += 1;
                true
            }
        };
        if moved {
            self.notify();
        }
        moved
    }

    fn notify(&self) {
        let listeners: Vec<LocationListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl HistoryBridge for MemoryHistory {
    fn current_path(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.cursor].clone()
    }

    fn navigate(&self, path: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            let keep = inner.cursor + 1;
            inner.entries.truncate(keep);
            inner.entries.push(path.to_string());
            inner.cursor = keep;
            inner.navigations.push(path.to_string());
        }
        self.notify();
    }

    fn on_location_change(
        &self,
        listener: LocationListener,
    ) -> Result<LocationSubscription, String> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<MemoryHistoryInner>> = Rc::downgrade(&self.inner);
        Ok(LocationSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        }))
    }
}
