//! Gallery views: breadcrumb trail, directory listing, entries, page shell and root controller.
//!
//! Each view is a headless model implementing [`PathView`]: the path flows in through
//! `set_path`, derived state is recomputed, and `render` returns plain data. Observers registered
//! on the models push those render snapshots into Leptos signals, and the components in [`app`]
//! turn them into DOM.

pub mod app;
pub mod breadcrumb;
pub mod entry;
pub mod listing;
pub mod root;
pub mod shell;
pub mod view;

pub use app::GalleryApp;
pub use breadcrumb::{breadcrumb_segments, BreadcrumbSegment, BreadcrumbView};
pub use entry::{EntryKind, EntryView};
pub use listing::{prepare_listing, ListingContent, ListingPhase, ListingRender, ListingView};
pub use root::RootController;
pub use shell::{PageShell, ShellRender};
pub use view::{LinkActivation, PathView, RenderObserver};
