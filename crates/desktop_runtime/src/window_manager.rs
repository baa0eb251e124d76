//! Shared window-manager geometry helpers used by the desktop reducer.

use crate::model::{
    PointerPosition, ResizeEdge, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 100;

/// Cascade origin for the first window.
const BASE_X: i32 = 50;
const BASE_Y: i32 = 50;
/// Per-window cascade step, cycling inside a 200x150 band.
const CASCADE_STEP: i32 = 30;

/// Initial rect for a freshly created window when `open_count` open,
/// non-minimized windows already exist.
pub fn cascade_rect(open_count: usize) -> WindowRect {
    let shift = open_count as i32 * CASCADE_STEP;
    WindowRect {
        x: BASE_X + shift % 200,
        y: BASE_Y + shift % 150,
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

/// Keeps a dragged window's top-left corner on the desktop.
pub fn clamp_position(position: PointerPosition) -> PointerPosition {
    PointerPosition {
        x: position.x.max(0),
        y: position.y.max(0),
    }
}

/// Applies resize deltas for a given edge/corner drag.
///
/// Width and height clamp to the minimums; west/north arms re-anchor the
/// moving edge so the opposite edge never drifts while clamped.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let east_w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    let south_h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    let west_w = (start.w - dx).max(MIN_WINDOW_WIDTH);
    let west_x = start.x + start.w - west_w;
    let north_h = (start.h - dy).max(MIN_WINDOW_HEIGHT);
    let north_y = start.y + start.h - north_h;

    match edge {
        ResizeEdge::East => WindowRect { w: east_w, ..start },
        ResizeEdge::West => WindowRect {
            x: west_x,
            w: west_w,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: south_h,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: north_y,
            h: north_h,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: north_y,
            h: north_h,
            w: east_w,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: west_x,
            y: north_y,
            w: west_w,
            h: north_h,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: east_w,
            h: south_h,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: west_x,
            w: west_w,
            h: south_h,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cascade_positions_cycle_inside_the_band() {
        assert_eq!(cascade_rect(0).x, 50);
        assert_eq!(cascade_rect(0).y, 50);
        assert_eq!(cascade_rect(3).x, 50 + 90);
        assert_eq!(cascade_rect(3).y, 50 + 90);
        // 7 * 30 = 210 wraps x (210 % 200 = 10) and y (210 % 150 = 60).
        assert_eq!(cascade_rect(7).x, 60);
        assert_eq!(cascade_rect(7).y, 110);
    }

    #[test]
    fn west_resize_clamps_without_drifting_the_east_edge() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 200,
        };

        let shrunk = resize_rect(start, ResizeEdge::West, 250, 0);
        assert_eq!(shrunk.w, MIN_WINDOW_WIDTH);
        assert_eq!(shrunk.x + shrunk.w, start.x + start.w);

        let grown = resize_rect(start, ResizeEdge::West, -40, 0);
        assert_eq!(grown.x, 60);
        assert_eq!(grown.w, 340);
    }

    #[test]
    fn corner_resize_moves_both_axes() {
        let start = WindowRect {
            x: 10,
            y: 20,
            w: 400,
            h: 300,
        };

        let resized = resize_rect(start, ResizeEdge::SouthEast, 25, -30);
        assert_eq!(resized, WindowRect { x: 10, y: 20, w: 425, h: 270 });

        let resized = resize_rect(start, ResizeEdge::NorthWest, 15, 35);
        assert_eq!(
            resized,
            WindowRect {
                x: 25,
                y: 55,
                w: 385,
                h: 265
            }
        );
    }

    #[test]
    fn position_clamp_is_non_negative() {
        let clamped = clamp_position(PointerPosition { x: -12, y: 4 });
        assert_eq!(clamped, PointerPosition { x: 0, y: 4 });
    }
}
