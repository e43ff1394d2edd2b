use gallery_host::GalleryHost;
use gallery_ui::GalleryApp;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp(host: GalleryHost) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Gallery" />
        <Meta name="description" content="Browse a remote picture directory." />

        <main class="site-root">
            <GalleryApp host=host />
        </main>
    }
}
