//! Plain-text notepad with a persistent single document.

use desktop_app_contract::{AppMountContext, AppServices};
use leptos::*;
use system_ui::prelude::*;

mod engine;

use engine::{load_blob, replace_range, split_selection, NotepadState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenMenu {
    File,
    Edit,
}

/// Mounts the notepad into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <NotepadApp services=context.services /> }.into_view()
}

#[component]
fn NotepadApp(services: AppServices) -> impl IntoView {
    let documents = services.documents();
    let clipboard = services.clipboard();
    let window = services.window;

    let initial = match load_blob(documents.as_ref()) {
        Ok(blob) => blob.unwrap_or_default(),
        Err(error) => {
            logging::warn!("notepad: stored document unusable, starting fresh: {error}");
            Default::default()
        }
    };
    let state = create_rw_signal(NotepadState::from_blob(initial));
    let status = create_rw_signal("Ready".to_string());
    let open_menu = create_rw_signal(None::<OpenMenu>);
    let confirm_new = create_rw_signal(false);
    let textarea = create_node_ref::<html::Textarea>();

    create_effect(move |_| {
        let (name, dirty) = state.with(|s| (s.file_name().to_string(), s.dirty()));
        let marker = if dirty { " *" } else { "" };
        window.set_title(format!("Notepad - {name}{marker}"));
    });

    // selectionStart/selectionEnd in UTF-16 units, collapsed cursor included.
    let selection_bounds = move || -> Option<(u32, u32)> {
        let node = textarea.get_untracked()?;
        let start = node.selection_start().ok().flatten()?;
        let end = node.selection_end().ok().flatten()?;
        Some((start, end))
    };

    let file_new = move || {
        state.update(|s| s.new_document());
        status.set("New document".to_string());
    };
    // Unsaved edits get a confirmation dialog before they are discarded.
    let request_new = move || {
        if state.with_untracked(|s| s.dirty()) {
            confirm_new.set(true);
        } else {
            file_new();
        }
    };
    let file_save = {
        let documents = documents.clone();
        move || {
            let result = state.try_update(|s| s.save_to(documents.as_ref()));
            match result {
                Some(Ok(())) => status.set("Saved".to_string()),
                Some(Err(error)) => status.set(error.to_string()),
                None => {}
            }
        }
    };

    let edit_copy = {
        let clipboard = clipboard.clone();
        move |cut: bool| {
            let Some((start, end)) = selection_bounds() else {
                return;
            };
            if start == end {
                return;
            }
            let (selected, remainder) =
                state.with_untracked(|s| split_selection(s.content(), start, end));
            if cut {
                state.update(|s| s.set_content(remainder));
            }
            let clipboard = clipboard.clone();
            spawn_local(async move {
                match clipboard.copy_text(&selected).await {
                    Ok(()) => status.set(if cut { "Cut" } else { "Copied" }.to_string()),
                    Err(error) => status.set(error.to_string()),
                }
            });
        }
    };
    let edit_paste = {
        let clipboard = clipboard.clone();
        move || {
            let Some((start, end)) = selection_bounds() else {
                return;
            };
            let clipboard = clipboard.clone();
            spawn_local(async move {
                match clipboard.read_text().await {
                    Ok(text) => {
                        state.update(|s| {
                            let next = replace_range(s.content(), start, end, &text);
                            s.set_content(next);
                        });
                        status.set("Pasted".to_string());
                    }
                    Err(error) => status.set(error.to_string()),
                }
            });
        }
    };

    let toggle_menu = move |menu: OpenMenu| {
        open_menu.update(|open| {
            *open = if *open == Some(menu) { None } else { Some(menu) };
        });
    };
    let menu_is_open = move |menu: OpenMenu| open_menu.get() == Some(menu);

    let edit_copy_for_cut = edit_copy.clone();
    let file_save_for_menu = file_save.clone();

    view! {
        <AppShell layout_class="app-notepad">
            <MenuBar aria_label="Notepad menu">
                <Button
                    ui_slot="menu-trigger"
                    aria_expanded=Signal::derive(move || menu_is_open(OpenMenu::File))
                    on_click=Callback::new(move |_| toggle_menu(OpenMenu::File))
                >
                    "File"
                </Button>
                <Button
                    ui_slot="menu-trigger"
                    aria_expanded=Signal::derive(move || menu_is_open(OpenMenu::Edit))
                    on_click=Callback::new(move |_| toggle_menu(OpenMenu::Edit))
                >
                    "Edit"
                </Button>
            </MenuBar>
            <Show when=move || menu_is_open(OpenMenu::File) fallback=|| () clone:file_save_for_menu>
                <MenuSurface aria_label="File menu" clone:file_save_for_menu>
                    <MenuItem on_click=Callback::new(move |_| {
                        open_menu.set(None);
                        request_new();
                    })>"New"</MenuItem>
                    <MenuItem on_click=Callback::new({
                        let file_save = file_save_for_menu.clone();
                        move |_| {
                            open_menu.set(None);
                            file_save();
                        }
                    })>"Save"</MenuItem>
                </MenuSurface>
            </Show>
            <Show
                when=move || menu_is_open(OpenMenu::Edit)
                fallback=|| ()
                clone:edit_copy_for_cut
                clone:edit_copy
                clone:edit_paste
            >
                <MenuSurface
                    aria_label="Edit menu"
                    clone:edit_copy_for_cut
                    clone:edit_copy
                    clone:edit_paste
                >
                    <MenuItem on_click=Callback::new({
                        let edit_copy = edit_copy_for_cut.clone();
                        move |_| {
                            open_menu.set(None);
                            edit_copy(true);
                        }
                    })>"Cut"</MenuItem>
                    <MenuItem on_click=Callback::new({
                        let edit_copy = edit_copy.clone();
                        move |_| {
                            open_menu.set(None);
                            edit_copy(false);
                        }
                    })>"Copy"</MenuItem>
                    <MenuItem on_click=Callback::new({
                        let edit_paste = edit_paste.clone();
                        move |_| {
                            open_menu.set(None);
                            edit_paste();
                        }
                    })>"Paste"</MenuItem>
                </MenuSurface>
            </Show>
            <TextArea
                layout_class="notepad-editor"
                aria_label="Document text"
                spellcheck=false
                node_ref=textarea
                value=Signal::derive(move || state.with(|s| s.content().to_string()))
                on_input=Callback::new(move |ev: web_sys::Event| {
                    state.update(|s| s.set_content(event_target_value(&ev)));
                })
            />
            <Show when=move || confirm_new.get() fallback=|| ()>
                <Modal
                    aria_label="Discard changes"
                    on_backdrop_click=Callback::new(move |_| confirm_new.set(false))
                >
                    <p>"The document has unsaved changes. Discard them?"</p>
                    <div class="notepad-confirm-actions">
                        <Button
                            ui_slot="confirm-discard"
                            on_click=Callback::new(move |_| {
                                confirm_new.set(false);
                                file_new();
                            })
                        >
                            "Discard"
                        </Button>
                        <Button
                            ui_slot="confirm-cancel"
                            on_click=Callback::new(move |_| confirm_new.set(false))
                        >
                            "Cancel"
                        </Button>
                    </div>
                </Modal>
            </Show>
            <StatusBar>
                <StatusBarItem>
                    {move || {
                        state
                            .with(|s| {
                                let marker = if s.dirty() { " *" } else { "" };
                                format!("{}{marker}", s.file_name())
                            })
                    }}
                </StatusBarItem>
                <StatusBarItem>
                    {move || format!("{} chars", state.with(|s| s.char_count()))}
                </StatusBarItem>
                <StatusBarItem>{move || status.get()}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}
