//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the reducer container and dispatch callback. UI
//! composition stays in [`crate::components`].

use std::rc::Rc;

use leptos::*;
use platform_host::{Clock, DocumentStore, TextClipboard};

use crate::{
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone)]
/// Host adapter bundle assembled by the entry layer and shared with every
/// windowed app through its mount services.
pub struct DesktopHost {
    /// Document persistence backend.
    pub documents: Rc<dyn DocumentStore>,
    /// Plain-text clipboard backend.
    pub clipboard: Rc<dyn TextClipboard>,
    /// Millisecond wall clock.
    pub clock: Rc<dyn Clock>,
}

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`]s.
pub struct DesktopRuntimeContext {
    /// Host adapter bundle.
    pub host: StoredValue<DesktopHost>,
    /// Reactive window registry.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize state.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current wall-clock milliseconds from the injected host clock.
    pub fn now_ms(&self) -> u64 {
        self.host.with_value(|host| host.clock.now_ms())
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host: DesktopHost,
    children: Children,
) -> impl IntoView {
    let host = store_value(host);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());

    // Copy-on-write dispatch: reduce against clones, publish only on change.
    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui;

        reduce_desktop(&mut desktop, &mut ui, action);

        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
    });

    provide_context(DesktopRuntimeContext {
        host,
        state,
        interaction,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
