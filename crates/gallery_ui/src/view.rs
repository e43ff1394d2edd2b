//! Shared view contract.

use std::rc::Rc;

/// Callback receiving a view's render output after every state change.
pub type RenderObserver<R> = Rc<dyn Fn(&R)>;

/// A view driven by the current directory path.
pub trait PathView {
    /// Plain-data description of what the view displays.
    type Render;

    /// Replaces the current path and recomputes derived state.
    ///
    /// Setting the same path again is not deduplicated; every call recomputes.
    fn set_path(&mut self, path: &str);

    /// Returns the current render output.
    fn render(&self) -> Self::Render;
}

/// Outcome of activating an in-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkActivation {
    /// Navigation went through the history bridge; the default link action must be suppressed.
    Intercepted,
    /// The browser should follow the link normally.
    FollowLink,
}
