mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, warning) = gallery_host_web::load_gallery_config();
    if let Some(err) = warning {
        leptos::logging::warn!("ignoring stored gallery config: {err}");
    }
    let host = gallery_host_web::build_gallery_host(config);

    leptos::mount_to_body(move || leptos::view! { <SiteApp host=host /> })
}
