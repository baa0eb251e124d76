//! Entry crate for the superself site: routes, intro flow, language/content.

mod app;
mod content;
mod intro;
mod language;
mod main_page;
mod phase;

pub use app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
