//! Page shell: owns the breadcrumb and listing views and forwards the path to both.

use gallery_host::GalleryHost;

use crate::{
    breadcrumb::{BreadcrumbSegment, BreadcrumbView},
    listing::{ListingRender, ListingView},
    view::PathView,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Combined render output of the page.
pub struct ShellRender {
    /// Current path, if one has been set.
    pub path: Option<String>,
    /// Breadcrumb trail.
    pub breadcrumb: Vec<BreadcrumbSegment>,
    /// Listing area.
    pub listing: ListingRender,
}

/// Holds the current path and pushes it, unchanged, to its child views.
pub struct PageShell {
    path: Option<String>,
    breadcrumb: BreadcrumbView,
    listing: ListingView,
}

impl PageShell {
    /// Builds the shell and its children from the injected host services.
    pub fn new(host: &GalleryHost) -> Self {
        Self {
            path: None,
            breadcrumb: BreadcrumbView::new(host.config.home_label.clone()),
            listing: ListingView::new(
                host.fetcher.clone(),
                host.spawner.clone(),
                host.config.clone(),
            ),
        }
    }

    /// The current path, if one has been set.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Mutable access to the breadcrumb view, for observer registration.
    pub fn breadcrumb_mut(&mut self) -> &mut BreadcrumbView {
        &mut self.breadcrumb
    }

    /// Mutable access to the listing view, for observer registration.
    pub fn listing_mut(&mut self) -> &mut ListingView {
        &mut self.listing
    }
}

impl PathView for PageShell {
    type Render = ShellRender;

    fn set_path(&mut self, path: &str) {
        self.path = Some(path.to_string());
        self.breadcrumb.set_path(path);
        self.listing.set_path(path);
    }

    fn render(&self) -> ShellRender {
        ShellRender {
            path: self.path.clone(),
            breadcrumb: self.breadcrumb.render(),
            listing: self.listing.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use gallery_host::{DirectoryEntry, MemoryDirectoryFetcher};

    use super::*;
    use crate::listing::{ListingContent, ListingPhase};

    #[test]
    fn set_path_reaches_both_children() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::default();
        fetcher.insert("/a/b", vec![DirectoryEntry::file("x.png")]);
        let (host, _history) = GalleryHost::memory("/", fetcher.clone(), Rc::new(pool.spawner()));
        let mut shell = PageShell::new(&host);
        assert_eq!(shell.render(), ShellRender::default());

        shell.set_path("/a/b");
        let loading = shell.render();
        assert_eq!(loading.path.as_deref(), Some("/a/b"));
        assert_eq!(loading.breadcrumb.len(), 3);
        assert_eq!(loading.listing.phase, ListingPhase::Loading);

        pool.run_until_stalled();
        let render = shell.render();
        assert_eq!(render.listing.path.as_deref(), Some("/a/b"));
        assert!(matches!(
            render.listing.content,
            ListingContent::Entries(ref entries) if entries.len() == 1
        ));
        assert_eq!(fetcher.requests(), vec!["/a/b?json=true"]);
    }
}
