//! Reducer actions and transition logic for the desktop window registry.

use crate::model::{
    AppId, DesktopState, DragSession, InteractionState, PointerPosition, ResizeEdge,
    ResizeSession, WindowRecord,
};
use crate::window_manager::{cascade_rect, clamp_position, resize_rect};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, or restore/raise it when it already exists.
    OpenWindow {
        /// App to open.
        app_id: AppId,
    },
    /// Close an app window; no-op when absent.
    CloseWindow {
        /// App to close.
        app_id: AppId,
    },
    /// Raise a window; no-op while minimized or absent.
    FocusWindow {
        /// App to focus.
        app_id: AppId,
    },
    /// Minimize a window, stamping the tray-ordering timestamp.
    MinimizeWindow {
        /// App to minimize.
        app_id: AppId,
        /// Millisecond timestamp from the injected clock.
        at_ms: u64,
    },
    /// Maximize a window and raise it. Geometry is preserved underneath.
    MaximizeWindow {
        /// App to maximize.
        app_id: AppId,
    },
    /// Clear minimized and maximized flags and raise the window.
    RestoreWindow {
        /// App to restore.
        app_id: AppId,
    },
    /// Replace a window's title bar text.
    SetWindowTitle {
        /// App whose title changes.
        app_id: AppId,
        /// New title text.
        title: String,
    },
    /// Unconditionally move a window's top-left corner (clamped non-negative).
    MoveWindow {
        /// App to move.
        app_id: AppId,
        /// New top-left position.
        position: PointerPosition,
    },
    /// Unconditionally resize a window (clamped to minimums).
    ResizeWindow {
        /// App to resize.
        app_id: AppId,
        /// New width.
        w: i32,
        /// New height.
        h: i32,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
}

/// Applies a [`DesktopAction`] to the desktop registry.
///
/// This is the authoritative transition engine for window management. Actions
/// referencing an unknown app are no-ops, never errors.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) {
    match action {
        DesktopAction::OpenWindow { app_id } => {
            if state.window(app_id).is_some() {
                restore_window(state, app_id);
                return;
            }
            let rect = cascade_rect(state.open_windows().len());
            let z_index = next_z(state);
            state.windows.push(WindowRecord {
                app_id,
                title: app_id.title().to_string(),
                rect,
                z_index,
                minimized: false,
                maximized: false,
                minimized_at: None,
            });
        }
        DesktopAction::CloseWindow { app_id } => {
            state.windows.retain(|w| w.app_id != app_id);
        }
        DesktopAction::FocusWindow { app_id } => {
            let Some(window) = state.window(app_id) else {
                return;
            };
            if window.minimized {
                return;
            }
            raise_window(state, app_id);
        }
        DesktopAction::MinimizeWindow { app_id, at_ms } => {
            if let Some(window) = find_window_mut(state, app_id) {
                window.minimized = true;
                window.minimized_at = Some(at_ms);
            }
        }
        DesktopAction::MaximizeWindow { app_id } => {
            if let Some(window) = find_window_mut(state, app_id) {
                window.maximized = true;
                window.minimized = false;
                window.minimized_at = None;
                raise_window(state, app_id);
            }
        }
        DesktopAction::RestoreWindow { app_id } => {
            if let Some(window) = find_window_mut(state, app_id) {
                window.maximized = false;
                restore_window(state, app_id);
            }
        }
        DesktopAction::SetWindowTitle { app_id, title } => {
            if let Some(window) = find_window_mut(state, app_id) {
                window.title = title;
            }
        }
        DesktopAction::MoveWindow { app_id, position } => {
            if let Some(window) = find_window_mut(state, app_id) {
                let position = clamp_position(position);
                window.rect.x = position.x;
                window.rect.y = position.y;
            }
        }
        DesktopAction::ResizeWindow { app_id, w, h } => {
            if let Some(window) = find_window_mut(state, app_id) {
                window.rect.w = w.max(crate::window_manager::MIN_WINDOW_WIDTH);
                window.rect.h = h.max(crate::window_manager::MIN_WINDOW_HEIGHT);
            }
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let Some(window) = state.window(app_id) else {
                return;
            };
            let rect_start = window.rect;
            raise_window(state, app_id);
            interaction.dragging = Some(DragSession {
                app_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.app_id) {
                    if !window.maximized {
                        let moved = session.rect_start.offset(dx, dy);
                        let clamped = clamp_position(PointerPosition {
                            x: moved.x,
                            y: moved.y,
                        });
                        window.rect.x = clamped.x;
                        window.rect.y = clamped.y;
                    }
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.window(app_id) else {
                return;
            };
            let rect_start = window.rect;
            raise_window(state, app_id);
            interaction.resizing = Some(ResizeSession {
                app_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.app_id) {
                    if !window.maximized {
                        window.rect = resize_rect(session.rect_start, session.edge, dx, dy);
                    }
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
    }
}

fn next_z(state: &mut DesktopState) -> u32 {
    state.top_z = state.top_z.saturating_add(1);
    state.top_z
}

fn raise_window(state: &mut DesktopState, app_id: AppId) {
    let z_index = next_z(state);
    if let Some(window) = find_window_mut(state, app_id) {
        window.z_index = z_index;
    }
}

fn restore_window(state: &mut DesktopState, app_id: AppId) {
    if let Some(window) = find_window_mut(state, app_id) {
        window.minimized = false;
        window.minimized_at = None;
        raise_window(state, app_id);
    }
}

fn find_window_mut(state: &mut DesktopState, app_id: AppId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.app_id == app_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRect, BASE_Z_INDEX, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        reduce_desktop(state, interaction, DesktopAction::OpenWindow { app_id });
    }

    fn rect_of(state: &DesktopState, app_id: AppId) -> WindowRect {
        state.window(app_id).expect("window").rect
    }

    #[test]
    fn open_creates_with_cascaded_defaults_and_top_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Notepad);
        open(&mut state, &mut interaction, AppId::Calculator);

        let first = state.window(AppId::Notepad).unwrap();
        let second = state.window(AppId::Calculator).unwrap();
        assert_eq!(
            first.rect,
            WindowRect {
                x: 50,
                y: 50,
                w: DEFAULT_WINDOW_WIDTH,
                h: DEFAULT_WINDOW_HEIGHT
            }
        );
        assert_eq!((second.rect.x, second.rect.y), (80, 80));
        assert_eq!(first.z_index, BASE_Z_INDEX + 1);
        assert_eq!(second.z_index, BASE_Z_INDEX + 2);
        assert_eq!(state.active_window(), Some(AppId::Calculator));
    }

    #[test]
    fn open_on_open_window_preserves_geometry_and_raises() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Paint);
        open(&mut state, &mut interaction, AppId::Clock);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                app_id: AppId::Paint,
                position: PointerPosition { x: 220, y: 140 },
            },
        );

        open(&mut state, &mut interaction, AppId::Paint);

        let paint = state.window(AppId::Paint).unwrap();
        assert_eq!((paint.rect.x, paint.rect.y), (220, 140));
        assert_eq!(state.active_window(), Some(AppId::Paint));
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn close_then_open_recreates_with_defaults() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Minesweeper);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                app_id: AppId::Minesweeper,
                position: PointerPosition { x: 300, y: 200 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Minesweeper,
            },
        );
        assert!(state.windows.is_empty());

        open(&mut state, &mut interaction, AppId::Minesweeper);
        assert_eq!(rect_of(&state, AppId::Minesweeper), WindowRect::default());
    }

    #[test]
    fn close_on_absent_window_is_a_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Solitaire,
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn focus_skips_minimized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Notepad);
        open(&mut state, &mut interaction, AppId::Clock);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Notepad,
                at_ms: 1_000,
            },
        );
        let z_before = state.window(AppId::Notepad).unwrap().z_index;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::Notepad,
            },
        );

        let notepad = state.window(AppId::Notepad).unwrap();
        assert!(notepad.minimized);
        assert_eq!(notepad.z_index, z_before);
        assert_eq!(state.active_window(), Some(AppId::Clock));
    }

    #[test]
    fn top_most_invariant_holds_under_arbitrary_sequences() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Projects);
        open(&mut state, &mut interaction, AppId::Calculator);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::About,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Projects,
                at_ms: 5,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Calculator,
            },
        );

        assert_eq!(state.active_window(), Some(AppId::Calculator));
        let top = state.window(AppId::Calculator).unwrap().z_index;
        for window in state.open_windows() {
            if window.app_id != AppId::Calculator {
                assert!(window.z_index < top);
            }
        }
    }

    #[test]
    fn tray_orders_by_minimize_time_and_is_stable_on_collisions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Notepad);
        open(&mut state, &mut interaction, AppId::Clock);
        open(&mut state, &mut interaction, AppId::Paint);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Clock,
                at_ms: 200,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Notepad,
                at_ms: 100,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Paint,
                at_ms: 100,
            },
        );

        let tray: Vec<AppId> = state
            .minimized_windows()
            .iter()
            .map(|w| w.app_id)
            .collect();
        // Notepad and Paint collide at 100ms; registry order breaks the tie.
        assert_eq!(tray, vec![AppId::Notepad, AppId::Paint, AppId::Clock]);
    }

    #[test]
    fn restore_clears_both_flags_and_raises() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Solitaire);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Solitaire,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Solitaire,
                at_ms: 42,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                app_id: AppId::Solitaire,
            },
        );

        let window = state.window(AppId::Solitaire).unwrap();
        assert!(!window.minimized);
        assert!(!window.maximized);
        assert_eq!(window.minimized_at, None);
        assert_eq!(state.active_window(), Some(AppId::Solitaire));
    }

    #[test]
    fn cascade_counts_only_open_non_minimized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Notepad);
        open(&mut state, &mut interaction, AppId::Clock);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Clock,
                at_ms: 1,
            },
        );

        open(&mut state, &mut interaction, AppId::Paint);
        // One open window (Notepad) at creation time, so Paint lands one step in.
        assert_eq!(rect_of(&state, AppId::Paint).x, 80);
        assert_eq!(rect_of(&state, AppId::Paint).y, 80);
    }

    #[test]
    fn drag_session_moves_window_and_clamps_to_desktop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::About);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::About,
                pointer: PointerPosition { x: 60, y: 60 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 90, y: 10 },
            },
        );

        let rect = rect_of(&state, AppId::About);
        assert_eq!(rect.x, 80);
        assert_eq!(rect.y, 0);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_session_respects_minimums() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Projects);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Projects,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -1_000, y: -1_000 },
            },
        );

        let rect = rect_of(&state, AppId::Projects);
        assert_eq!(rect.w, crate::window_manager::MIN_WINDOW_WIDTH);
        assert_eq!(rect.h, crate::window_manager::MIN_WINDOW_HEIGHT);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn maximize_preserves_geometry_underneath() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Calculator);
        let before = rect_of(&state, AppId::Calculator);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Calculator,
            },
        );
        assert!(state.window(AppId::Calculator).unwrap().maximized);
        assert_eq!(rect_of(&state, AppId::Calculator), before);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                app_id: AppId::Calculator,
            },
        );
        assert_eq!(rect_of(&state, AppId::Calculator), before);
    }
}
