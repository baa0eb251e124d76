//! Desktop shell UI composition over the shared `system_ui` primitives.

use leptos::*;

use crate::model::{PointerPosition, ResizeEdge};

mod desktop;
mod tray;
mod window;

pub use desktop::DesktopShell;

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub(crate) fn resize_edge_token(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "n",
        ResizeEdge::South => "s",
        ResizeEdge::East => "e",
        ResizeEdge::West => "w",
        ResizeEdge::NorthEast => "ne",
        ResizeEdge::NorthWest => "nw",
        ResizeEdge::SouthEast => "se",
        ResizeEdge::SouthWest => "sw",
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Accepts primary-button mouse presses and primary touch/pen contacts only.
pub(crate) fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resize_edge_tokens_cover_all_compass_points() {
        let tokens: Vec<&str> = [
            ResizeEdge::North,
            ResizeEdge::South,
            ResizeEdge::East,
            ResizeEdge::West,
            ResizeEdge::NorthEast,
            ResizeEdge::NorthWest,
            ResizeEdge::SouthEast,
            ResizeEdge::SouthWest,
        ]
        .into_iter()
        .map(resize_edge_token)
        .collect();
        assert_eq!(tokens, vec!["n", "s", "e", "w", "ne", "nw", "se", "sw"]);
    }
}
