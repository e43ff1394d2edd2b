//! Directory listing view: fetch lifecycle, filtering, ordering and error display.

use std::{cell::RefCell, rc::Rc};

use futures::task::{LocalSpawn, LocalSpawnExt};
use gallery_host::{
    listing_url, DirectoryEntry, DirectoryFetcher, GalleryConfig, ListingError, ListingResult,
};
use leptos::logging;

use crate::{
    entry::EntryView,
    view::{PathView, RenderObserver},
};

/// Drops hidden entries and orders directories first, then by name.
///
/// Names compare ordinally, not by locale.
pub fn prepare_listing(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries.retain(|entry| !entry.is_hidden());
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Lifecycle phase of the listing view.
pub enum ListingPhase {
    /// No path has been set yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// Entries from the last resolved request are displayed.
    Populated,
    /// The last resolved request failed.
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// What the listing area currently shows.
pub enum ListingContent {
    /// Nothing yet.
    #[default]
    Empty,
    /// Filtered and ordered entries.
    Entries(Vec<EntryView>),
    /// Failure message shown in place of entries.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Render output of [`ListingView`].
pub struct ListingRender {
    /// Current path, if one has been set.
    pub path: Option<String>,
    /// Lifecycle phase.
    pub phase: ListingPhase,
    /// Whether the loading affordance is shown.
    pub loading: bool,
    /// Displayed content. Previous content stays visible while loading.
    pub content: ListingContent,
}

#[derive(Default)]
struct ListingState {
    path: Option<String>,
    phase: ListingPhase,
    content: ListingContent,
    issued: u64,
}

#[derive(Default)]
struct ListingShared {
    state: RefCell<ListingState>,
    observer: RefCell<Option<RenderObserver<ListingRender>>>,
}

impl ListingShared {
    fn render(&self) -> ListingRender {
        let state = self.state.borrow();
        ListingRender {
            path: state.path.clone(),
            phase: state.phase,
            loading: state.phase == ListingPhase::Loading,
            content: state.content.clone(),
        }
    }

    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&self.render());
        }
    }

    fn apply(&self, request: u64, path: &str, result: ListingResult, config: &GalleryConfig) {
        {
            let mut state = self.state.borrow_mut();
            if config.discard_stale_listings && request != state.issued {
                logging::log!("dropping stale listing for {path}");
                return;
            }
            match result {
                Ok(entries) => {
                    let entries = prepare_listing(entries)
                        .into_iter()
                        .map(|entry| EntryView::new(path, &entry.filename, entry.is_dir, config))
                        .collect();
                    state.content = ListingContent::Entries(entries);
                    state.phase = ListingPhase::Populated;
                }
                Err(err) => {
                    logging::error!("directory listing failed: {err}");
                    state.content = ListingContent::Error(err.to_string());
                    state.phase = ListingPhase::Errored;
                }
            }
        }
        self.notify();
    }
}

/// Listing view model.
///
/// Every `set_path` enters the loading phase and spawns a fresh request; requests are never
/// cancelled. Unless [`GalleryConfig::discard_stale_listings`] is set, whichever request resolves
/// last decides the content, even if it belongs to an older path.
pub struct ListingView {
    fetcher: Rc<dyn DirectoryFetcher>,
    spawner: Rc<dyn LocalSpawn>,
    config: Rc<GalleryConfig>,
    shared: Rc<ListingShared>,
}

impl ListingView {
    /// Creates an idle listing view.
    pub fn new(
        fetcher: Rc<dyn DirectoryFetcher>,
        spawner: Rc<dyn LocalSpawn>,
        config: Rc<GalleryConfig>,
    ) -> Self {
        Self {
            fetcher,
            spawner,
            config,
            shared: Rc::default(),
        }
    }

    /// Registers the observer notified after each state transition.
    pub fn observe(&mut self, observer: RenderObserver<ListingRender>) {
        *self.shared.observer.borrow_mut() = Some(observer);
    }
}

impl PathView for ListingView {
    type Render = ListingRender;

    fn set_path(&mut self, path: &str) {
        let request = {
            let mut state = self.shared.state.borrow_mut();
            state.path = Some(path.to_string());
            state.phase = ListingPhase::Loading;
            state.issued += 1;
            state.issued
        };
        self.shared.notify();

        let shared = Rc::clone(&self.shared);
        let fetcher = Rc::clone(&self.fetcher);
        let config = Rc::clone(&self.config);
        let path = path.to_string();
        let task = async move {
            let result = fetcher.fetch_listing(&path).await;
            shared.apply(request, &path, result, &config);
        };

        if let Err(err) = self.spawner.spawn_local(task) {
            logging::warn!("listing request could not be scheduled: {err}");
            let path = self.shared.state.borrow().path.clone().unwrap_or_default();
            let error = ListingError::Fetch {
                url: listing_url(&path, &self.config.listing_query),
                message: format!("request could not be scheduled: {err}"),
            };
            self.shared.apply(request, &path, Err(error), &self.config);
        }
    }

    fn render(&self) -> ListingRender {
        self.shared.render()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::{
        executor::LocalPool,
        task::{LocalFutureObj, SpawnError},
    };
    use gallery_host::MemoryDirectoryFetcher;
    use pretty_assertions::assert_eq;

    use super::*;

    fn listing_view(
        pool: &LocalPool,
        fetcher: &MemoryDirectoryFetcher,
        config: GalleryConfig,
    ) -> ListingView {
        ListingView::new(
            Rc::new(fetcher.clone()),
            Rc::new(pool.spawner()),
            Rc::new(config),
        )
    }

    fn entry_names(render: &ListingRender) -> Vec<(String, bool)> {
        match &render.content {
            ListingContent::Entries(entries) => entries
                .iter()
                .map(|entry| (entry.filename.clone(), entry.is_dir()))
                .collect(),
            other => panic!("expected entries, got {other:?}"),
        }
    }

    #[test]
    fn prepare_listing_hides_dotfiles_and_puts_directories_first() {
        let prepared = prepare_listing(vec![
            DirectoryEntry::directory(".git"),
            DirectoryEntry::file("b.txt"),
            DirectoryEntry::directory("Archive"),
            DirectoryEntry::file("a.txt"),
        ]);
        assert_eq!(
            prepared,
            vec![
                DirectoryEntry::directory("Archive"),
                DirectoryEntry::file("a.txt"),
                DirectoryEntry::file("b.txt"),
            ]
        );
    }

    #[test]
    fn prepare_listing_orders_by_code_point_not_locale() {
        let names: Vec<String> = prepare_listing(vec![
            DirectoryEntry::file("b"),
            DirectoryEntry::file("B"),
            DirectoryEntry::file("a"),
            DirectoryEntry::directory("z"),
            DirectoryEntry::directory("Z"),
        ])
        .into_iter()
        .map(|entry| entry.filename)
        .collect();
        assert_eq!(names, vec!["Z", "z", "B", "a", "b"]);
    }

    #[test]
    fn successful_load_moves_through_loading_to_populated() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::default();
        fetcher.insert(
            "/",
            vec![
                DirectoryEntry::directory(".git"),
                DirectoryEntry::file("b.txt"),
                DirectoryEntry::directory("Archive"),
                DirectoryEntry::file("a.txt"),
            ],
        );
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());
        assert_eq!(view.render(), ListingRender::default());

        view.set_path("/");
        let loading = view.render();
        assert_eq!(loading.phase, ListingPhase::Loading);
        assert!(loading.loading);
        assert_eq!(loading.content, ListingContent::Empty);

        pool.run_until_stalled();
        let populated = view.render();
        assert_eq!(populated.phase, ListingPhase::Populated);
        assert!(!populated.loading);
        assert_eq!(
            entry_names(&populated),
            vec![
                ("Archive".to_string(), true),
                ("a.txt".to_string(), false),
                ("b.txt".to_string(), false),
            ]
        );
        assert_eq!(fetcher.requests(), vec!["/?json=true"]);
    }

    #[test]
    fn entries_carry_the_requested_path() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::default();
        fetcher.insert("/photos", vec![DirectoryEntry::file("cat.jpg")]);
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());

        view.set_path("/photos");
        pool.run_until_stalled();

        let ListingContent::Entries(entries) = view.render().content else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].path, "/photos");
        assert_eq!(entries[0].href, "/photos/cat.jpg");
    }

    #[test]
    fn error_replaces_previous_entries_with_message() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::default();
        fetcher.insert("/", vec![DirectoryEntry::directory("photos")]);
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());

        view.set_path("/");
        pool.run_until_stalled();
        assert_eq!(entry_names(&view.render()).len(), 1);

        view.set_path("/missing");
        let reloading = view.render();
        assert!(reloading.loading);
        assert_eq!(entry_names(&reloading).len(), 1);

        pool.run_until_stalled();
        let errored = view.render();
        assert_eq!(errored.phase, ListingPhase::Errored);
        assert!(!errored.loading);
        assert_eq!(
            errored.content,
            ListingContent::Error("/missing?json=true responded with HTTP 404".to_string())
        );
    }

    #[test]
    fn setting_the_same_path_twice_fetches_and_renders_twice() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::default();
        fetcher.insert("/a", vec![DirectoryEntry::file("x")]);
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());
        let populated_renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&populated_renders);
        view.observe(Rc::new(move |render: &ListingRender| {
            if render.phase == ListingPhase::Populated {
                counter.set(counter.get() + 1);
            }
        }));

        view.set_path("/a");
        pool.run_until_stalled();
        view.set_path("/a");
        pool.run_until_stalled();

        assert_eq!(fetcher.requests(), vec!["/a?json=true", "/a?json=true"]);
        assert_eq!(populated_renders.get(), 2);
    }

    #[test]
    fn slower_older_response_overwrites_newer_path_by_default() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::gated();
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());

        view.set_path("/old");
        view.set_path("/new");
        pool.run_until_stalled();
        let mut gates = fetcher.take_gates();
        let new_gate = gates.pop().expect("new gate");
        let old_gate = gates.pop().expect("old gate");

        new_gate.resolve(Ok(vec![DirectoryEntry::file("new.txt")]));
        pool.run_until_stalled();
        assert_eq!(entry_names(&view.render()), vec![("new.txt".to_string(), false)]);

        old_gate.resolve(Ok(vec![DirectoryEntry::file("old.txt")]));
        pool.run_until_stalled();
        let render = view.render();
        assert_eq!(render.path.as_deref(), Some("/new"));
        assert_eq!(entry_names(&render), vec![("old.txt".to_string(), false)]);
    }

    #[test]
    fn first_resolution_clears_loading_even_with_newer_request_pending() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::gated();
        let mut view = listing_view(&pool, &fetcher, GalleryConfig::default());

        view.set_path("/old");
        view.set_path("/new");
        pool.run_until_stalled();
        let mut gates = fetcher.take_gates();
        let _new_gate = gates.pop().expect("new gate");
        gates
            .pop()
            .expect("old gate")
            .resolve(Ok(vec![DirectoryEntry::file("old.txt")]));
        pool.run_until_stalled();

        assert!(!view.render().loading);
    }

    #[test]
    fn stale_responses_are_dropped_when_configured() {
        let mut pool = LocalPool::new();
        let fetcher = MemoryDirectoryFetcher::gated();
        let config = GalleryConfig {
            discard_stale_listings: true,
            ..GalleryConfig::default()
        };
        let mut view = listing_view(&pool, &fetcher, config);

        view.set_path("/old");
        view.set_path("/new");
        pool.run_until_stalled();
        let mut gates = fetcher.take_gates();
        let new_gate = gates.pop().expect("new gate");
        let old_gate = gates.pop().expect("old gate");

        old_gate.resolve(Ok(vec![DirectoryEntry::file("old.txt")]));
        pool.run_until_stalled();
        assert!(view.render().loading);

        new_gate.resolve(Ok(vec![DirectoryEntry::file("new.txt")]));
        pool.run_until_stalled();
        assert_eq!(entry_names(&view.render()), vec![("new.txt".to_string(), false)]);
    }

    struct RefusingSpawner;

    impl LocalSpawn for RefusingSpawner {
        fn spawn_local_obj(&self, _future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
            Err(SpawnError::shutdown())
        }
    }

    #[test]
    fn unschedulable_request_surfaces_as_error() {
        let mut view = ListingView::new(
            Rc::new(MemoryDirectoryFetcher::default()),
            Rc::new(RefusingSpawner),
            Rc::new(GalleryConfig::default()),
        );

        view.set_path("/photos");
        let render = view.render();
        assert_eq!(render.phase, ListingPhase::Errored);
        let ListingContent::Error(message) = render.content else {
            panic!("expected error");
        };
        assert!(message.starts_with("failed to fetch /photos?json=true"), "{message}");
    }
}
