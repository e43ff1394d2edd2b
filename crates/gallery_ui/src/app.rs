//! Leptos components rendering the gallery view models.

use std::{cell::RefCell, rc::Rc};

use gallery_host::{GalleryHost, HistoryBridge};
use leptos::*;

use crate::{
    breadcrumb::BreadcrumbSegment,
    entry::{EntryKind, EntryView},
    listing::{ListingContent, ListingRender},
    root::RootController,
    shell::PageShell,
    view::LinkActivation,
};

type SharedHistory = StoredValue<Rc<dyn HistoryBridge>>;

#[component]
/// Root component: wires the page shell to the browser location.
pub fn GalleryApp(
    /// Injected host services assembled by the entry layer.
    host: GalleryHost,
) -> impl IntoView {
    let breadcrumb = create_rw_signal(Vec::<BreadcrumbSegment>::new());
    let listing = create_rw_signal(ListingRender::default());
    let history: SharedHistory = store_value(host.history.clone());

    let mut shell = PageShell::new(&host);
    shell
        .breadcrumb_mut()
        .observe(Rc::new(move |segments: &Vec<BreadcrumbSegment>| {
            let _ = breadcrumb.try_set(segments.clone());
        }));
    shell
        .listing_mut()
        .observe(Rc::new(move |render: &ListingRender| {
            let _ = listing.try_set(render.clone());
        }));

    let controller = RootController::attach_shell(
        host.history.clone(),
        host.config.trace_navigation,
        Rc::new(RefCell::new(shell)),
    );
    on_cleanup(move || controller.detach());

    view! {
        <section class="gallery-shell">
            <BreadcrumbNav segments=breadcrumb.read_only() history=history />
            <ListingSection listing=listing.read_only() history=history />
        </section>
    }
}

#[component]
fn BreadcrumbNav(
    segments: ReadSignal<Vec<BreadcrumbSegment>>,
    history: SharedHistory,
) -> impl IntoView {
    view! {
        <nav class="gallery-breadcrumb" aria-label="Breadcrumb">
            {move || {
                segments
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, segment)| {
                        view! {
                            {(idx > 0).then(|| view! { <span class="breadcrumb-separator">"/"</span> })}
                            <BreadcrumbItem segment=segment history=history />
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn BreadcrumbItem(segment: BreadcrumbSegment, history: SharedHistory) -> impl IntoView {
    let Some(href) = segment.link_path.clone() else {
        return segment.display_name.into_view();
    };
    let label = segment.display_name.clone();
    view! {
        <a
            class="breadcrumb-link"
            href=href
            on:click=move |ev| {
                if segment.activate(history.get_value().as_ref()) == LinkActivation::Intercepted {
                    ev.prevent_default();
                }
            }
        >
            {label}
        </a>
    }
    .into_view()
}

#[component]
fn ListingSection(
    listing: ReadSignal<ListingRender>,
    history: SharedHistory,
) -> impl IntoView {
    view! {
        <section
            class="gallery-listing"
            class:loading=move || listing.with(|render| render.loading)
            aria-busy=move || listing.with(|render| render.loading.to_string())
        >
            {move || match listing.with(|render| render.content.clone()) {
                ListingContent::Empty => ().into_view(),
                ListingContent::Error(message) => message.into_view(),
                ListingContent::Entries(entries) => entries
                    .into_iter()
                    .map(|entry| view! { <EntryItem entry=entry history=history /> })
                    .collect_view(),
            }}
        </section>
    }
}

#[component]
fn EntryItem(entry: EntryView, history: SharedHistory) -> impl IntoView {
    let visual = match &entry.kind {
        EntryKind::Directory { icon_src } => view! {
            <img class="folder-icon" src=icon_src.clone() alt="" width="50" height="50" />
        },
        EntryKind::File { thumbnail_src } => view! {
            <img class="thumbnail" src=thumbnail_src.clone() alt="" width="50" height="50" />
        },
    };
    let href = entry.href.clone();
    let label = entry.filename.clone();

    view! {
        <div class="gallery-entry">
            <a
                href=href
                on:click=move |ev| {
                    if entry.activate(history.get_value().as_ref()) == LinkActivation::Intercepted {
                        ev.prevent_default();
                    }
                }
            >
                {visual}
                {label}
            </a>
        </div>
    }
}
