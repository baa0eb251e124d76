//! Routes and the front-page phase switch.

use std::rc::Rc;

use choreography::Choice;
use desktop_runtime::{DesktopHost, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{WebClipboard, WebClock, WebDocumentStore};

use crate::intro::{
    BootScreen, ConfirmScreen, ErrorScreen, LoadingScreen, OffScreen, PauseScreen, ShutdownScreen,
};
use crate::language::Language;
use crate::main_page::MainPage;
use crate::phase::{Phase, PhaseFlow};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="superself" />
        <Meta name="description" content="superself: a retro-OS studio site." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomeRoute />
                    <Route path="/portfolio" view=PortfolioRoute />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Intro + main page, switched by the phase machine.
#[component]
fn HomeRoute() -> impl IntoView {
    let flow = create_rw_signal(PhaseFlow::new());
    let language = create_rw_signal(Language::default());

    let advance = Callback::new(move |_| flow.update(|f| f.advance_intro()));
    let resolve = Callback::new(move |choice: Choice| flow.update(|f| f.resolve(choice)));
    let power_off = Callback::new(move |_| flow.update(|f| f.power_off()));
    let reboot = Callback::new(move |_| flow.update(|f| f.reboot()));
    let shut_down = Callback::new(move |_| flow.update(|f| f.shut_down()));
    let crash = Callback::new(move |_| flow.update(|f| f.crash()));

    move || {
        let skip = flow.with(|f| f.skip());
        match flow.with(|f| f.phase()) {
            Phase::Boot => view! { <BootScreen skip on_done=advance /> }.into_view(),
            Phase::Loading => view! { <LoadingScreen skip on_done=advance /> }.into_view(),
            Phase::Pause => view! { <PauseScreen skip on_done=advance /> }.into_view(),
            Phase::Confirm => view! { <ConfirmScreen language on_resolve=resolve /> }.into_view(),
            Phase::Main => {
                view! { <MainPage language skip on_shutdown=shut_down on_crash=crash /> }
                    .into_view()
            }
            Phase::Shutdown => view! { <ShutdownScreen language on_done=power_off /> }.into_view(),
            Phase::Off => view! { <OffScreen language on_reboot=reboot /> }.into_view(),
            Phase::Error => view! { <ErrorScreen on_reboot=reboot /> }.into_view(),
        }
    }
}

/// The retro desktop, with browser adapters behind every host seam.
#[component]
fn PortfolioRoute() -> impl IntoView {
    let host = DesktopHost {
        documents: Rc::new(WebDocumentStore),
        clipboard: Rc::new(WebClipboard),
        clock: Rc::new(WebClock),
    };

    view! {
        <DesktopProvider host>
            <DesktopShell />
        </DesktopProvider>
    }
}
