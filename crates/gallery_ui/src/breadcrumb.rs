//! Breadcrumb trail for the current path.

use gallery_host::{decode_segment, HistoryBridge, ROOT_PATH};

use crate::view::{LinkActivation, PathView, RenderObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One unit of the breadcrumb trail.
pub struct BreadcrumbSegment {
    /// Decoded text shown to the user.
    pub display_name: String,
    /// Encoded path the segment links to; `None` for the trailing plain-text segment.
    pub link_path: Option<String>,
}

impl BreadcrumbSegment {
    fn link(display_name: impl Into<String>, link_path: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            link_path: Some(link_path.into()),
        }
    }

    fn text(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            link_path: None,
        }
    }

    /// Handles a click: links navigate through `history`, plain text does nothing.
    pub fn activate(&self, history: &dyn HistoryBridge) -> LinkActivation {
        match &self.link_path {
            Some(path) => {
                history.navigate(path);
                LinkActivation::Intercepted
            }
            None => LinkActivation::FollowLink,
        }
    }
}

/// Splits `path` into breadcrumb segments.
///
/// The first segment always links `home_label` to `/`. Every following segment but the last
/// links to its cumulative prefix; the last one is decoded plain text. A trailing `/` does not
/// produce an extra empty segment.
pub fn breadcrumb_segments(path: &str, home_label: &str) -> Vec<BreadcrumbSegment> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let parts: Vec<&str> = trimmed.split('/').collect();
    let last = parts.len() - 1;

    let mut segments = Vec::with_capacity(parts.len());
    let mut current = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx == 0 {
            segments.push(BreadcrumbSegment::link(home_label, ROOT_PATH));
        } else if idx < last {
            current.push('/');
            current.push_str(part);
            segments.push(BreadcrumbSegment::link(decode_segment(part), current.clone()));
        } else {
            segments.push(BreadcrumbSegment::text(decode_segment(part)));
        }
    }
    segments
}

/// Breadcrumb view model. Renders nothing until the first path arrives.
pub struct BreadcrumbView {
    home_label: String,
    path: Option<String>,
    segments: Vec<BreadcrumbSegment>,
    observer: Option<RenderObserver<Vec<BreadcrumbSegment>>>,
}

impl BreadcrumbView {
    /// Creates an empty breadcrumb whose root link reads `home_label`.
    pub fn new(home_label: impl Into<String>) -> Self {
        Self {
            home_label: home_label.into(),
            path: None,
            segments: Vec::new(),
            observer: None,
        }
    }

    /// Registers the observer notified after each rebuild.
    pub fn observe(&mut self, observer: RenderObserver<Vec<BreadcrumbSegment>>) {
        self.observer = Some(observer);
    }

    /// The last path set, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl PathView for BreadcrumbView {
    type Render = Vec<BreadcrumbSegment>;

    fn set_path(&mut self, path: &str) {
        self.path = Some(path.to_string());
        self.segments = breadcrumb_segments(path, &self.home_label);
        if let Some(observer) = &self.observer {
            observer(&self.segments);
        }
    }

    fn render(&self) -> Vec<BreadcrumbSegment> {
        self.segments.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gallery_host::MemoryHistory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_path_links_every_ancestor_and_ends_in_text() {
        assert_eq!(
            breadcrumb_segments("/a/b/c", "Home"),
            vec![
                BreadcrumbSegment::link("Home", "/"),
                BreadcrumbSegment::link("a", "/a"),
                BreadcrumbSegment::link("b", "/a/b"),
                BreadcrumbSegment::text("c"),
            ]
        );
    }

    #[test]
    fn root_path_yields_only_home() {
        for path in ["/", ""] {
            assert_eq!(
                breadcrumb_segments(path, "Home"),
                vec![BreadcrumbSegment::link("Home", "/")],
                "path={path:?}"
            );
        }
    }

    #[test]
    fn single_level_path_is_home_then_text() {
        assert_eq!(
            breadcrumb_segments("/photos/", "Home"),
            vec![
                BreadcrumbSegment::link("Home", "/"),
                BreadcrumbSegment::text("photos"),
            ]
        );
    }

    #[test]
    fn names_are_decoded_but_links_stay_encoded() {
        let segments = breadcrumb_segments("/My%20Pictures/caf%C3%A9", "Home");
        assert_eq!(segments[1], BreadcrumbSegment::link("My Pictures", "/My%20Pictures"));
        assert_eq!(segments[2], BreadcrumbSegment::text("café"));
    }

    #[test]
    fn view_renders_nothing_before_first_path_and_rebuilds_on_each_set() {
        let mut view = BreadcrumbView::new("Home");
        assert!(view.render().is_empty());
        assert_eq!(view.path(), None);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        view.observe(Rc::new(move |segments: &Vec<BreadcrumbSegment>| {
            sink.borrow_mut().push(segments.len());
        }));

        view.set_path("/a/b");
        view.set_path("/");
        assert_eq!(*seen.borrow(), vec![3, 1]);
        assert_eq!(view.render(), vec![BreadcrumbSegment::link("Home", "/")]);
    }

    #[test]
    fn activating_a_link_navigates_once_and_text_does_nothing() {
        let history = MemoryHistory::new("/a/b/c");
        let segments = breadcrumb_segments("/a/b/c", "Home");

        assert_eq!(segments[2].activate(&history), LinkActivation::Intercepted);
        assert_eq!(segments[3].activate(&history), LinkActivation::FollowLink);
        assert_eq!(history.navigations(), vec!["/a/b"]);
        assert_eq!(history.current_path(), "/a/b");
    }
}
