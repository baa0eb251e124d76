//! Pixel canvas, tool geometry, and the flood fill behind the paint view.

use rand::{Rng, RngCore};

pub(crate) const CANVAS_COLS: usize = 48;
pub(crate) const CANVAS_ROWS: usize = 36;

/// Classic 16-color system palette. Index 8 is white, the canvas background.
pub(crate) const PALETTE: [&str; 16] = [
    "#000000", "#808080", "#800000", "#808000", "#008000", "#008080", "#000080", "#800080",
    "#ffffff", "#c0c0c0", "#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff",
];

pub(crate) const WHITE: u8 = 8;
pub(crate) const BLACK: u8 = 0;

const SPRAY_RADIUS: i32 = 3;
const SPRAY_DOTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tool {
    Pencil,
    Brush,
    Eraser,
    Fill,
    Line,
    Rect,
    Ellipse,
    Spray,
    Picker,
}

impl Tool {
    pub(crate) const ALL: [Tool; 9] = [
        Tool::Pencil,
        Tool::Brush,
        Tool::Eraser,
        Tool::Fill,
        Tool::Line,
        Tool::Rect,
        Tool::Ellipse,
        Tool::Spray,
        Tool::Picker,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
            Self::Line => "Line",
            Self::Rect => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Spray => "Spray",
            Self::Picker => "Pick color",
        }
    }

    fn is_shape(self) -> bool {
        matches!(self, Self::Line | Self::Rect | Self::Ellipse)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PaintState {
    pub(crate) pixels: Vec<u8>,
    pub(crate) preview: Vec<(usize, u8)>,
    pub(crate) tool: Tool,
    pub(crate) color: u8,
    anchor: Option<(i32, i32)>,
    last: Option<(i32, i32)>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            pixels: vec![WHITE; CANVAS_COLS * CANVAS_ROWS],
            preview: Vec::new(),
            tool: Tool::Pencil,
            color: BLACK,
            anchor: None,
            last: None,
        }
    }
}

impl PaintState {
    pub(crate) fn clear(&mut self) {
        self.pixels.fill(WHITE);
        self.preview.clear();
        self.anchor = None;
        self.last = None;
    }

    /// Color shown at a cell: in-flight shape preview wins over the canvas.
    pub(crate) fn visible_color(&self, index: usize) -> u8 {
        self.preview
            .iter()
            .rev()
            .find(|(i, _)| *i == index)
            .map(|(_, color)| *color)
            .unwrap_or(self.pixels[index])
    }

    pub(crate) fn pointer_down(&mut self, x: i32, y: i32, rng: &mut dyn RngCore) {
        match self.tool {
            Tool::Fill => {
                if let Some(index) = cell_index(x, y) {
                    flood_fill(&mut self.pixels, index, self.color);
                }
            }
            Tool::Picker => {
                if let Some(index) = cell_index(x, y) {
                    self.color = self.pixels[index];
                }
            }
            tool if tool.is_shape() => {
                self.anchor = Some((x, y));
                self.preview = self.shape_cells((x, y), (x, y));
            }
            _ => {
                self.stamp(x, y, rng);
                self.last = Some((x, y));
            }
        }
    }

    pub(crate) fn pointer_move(&mut self, x: i32, y: i32, rng: &mut dyn RngCore) {
        if let Some(anchor) = self.anchor {
            self.preview = self.shape_cells(anchor, (x, y));
            return;
        }
        let Some(last) = self.last else {
            return;
        };
        // Connect fast pointer moves so freehand strokes stay unbroken.
        for (px, py) in line_points(last.0, last.1, x, y) {
            self.stamp(px, py, rng);
        }
        self.last = Some((x, y));
    }

    pub(crate) fn pointer_up(&mut self) {
        if self.anchor.take().is_some() {
            let committed = std::mem::take(&mut self.preview);
            for (index, color) in committed {
                self.pixels[index] = color;
            }
        }
        self.last = None;
    }

    fn shape_cells(&self, from: (i32, i32), to: (i32, i32)) -> Vec<(usize, u8)> {
        let points = match self.tool {
            Tool::Line => line_points(from.0, from.1, to.0, to.1),
            Tool::Rect => rect_outline_points(from.0, from.1, to.0, to.1),
            Tool::Ellipse => ellipse_points(from.0, from.1, to.0, to.1),
            _ => Vec::new(),
        };
        points
            .into_iter()
            .filter_map(|(x, y)| cell_index(x, y))
            .map(|index| (index, self.color))
            .collect()
    }

    fn stamp(&mut self, x: i32, y: i32, rng: &mut dyn RngCore) {
        match self.tool {
            Tool::Brush => {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        self.plot(x + dx, y + dy, self.color);
                    }
                }
            }
            Tool::Eraser => {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        self.plot(x + dx, y + dy, WHITE);
                    }
                }
            }
            Tool::Spray => {
                for _ in 0..SPRAY_DOTS {
                    let dx = rng.gen_range(-SPRAY_RADIUS..=SPRAY_RADIUS);
                    let dy = rng.gen_range(-SPRAY_RADIUS..=SPRAY_RADIUS);
                    if dx * dx + dy * dy <= SPRAY_RADIUS * SPRAY_RADIUS {
                        self.plot(x + dx, y + dy, self.color);
                    }
                }
            }
            _ => self.plot(x, y, self.color),
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: u8) {
        if let Some(index) = cell_index(x, y) {
            self.pixels[index] = color;
        }
    }
}

pub(crate) fn cell_index(x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x >= CANVAS_COLS as i32 || y >= CANVAS_ROWS as i32 {
        return None;
    }
    Some(y as usize * CANVAS_COLS + x as usize)
}

/// Bresenham line, endpoints included.
pub(crate) fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

pub(crate) fn rect_outline_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    let mut points = Vec::new();
    for x in left..=right {
        points.push((x, top));
        if bottom != top {
            points.push((x, bottom));
        }
    }
    for y in top + 1..bottom {
        points.push((left, y));
        if right != left {
            points.push((right, y));
        }
    }
    points
}

/// Axis-aligned ellipse outline inscribed in the drag rectangle.
pub(crate) fn ellipse_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let (left, right) = (x0.min(x1), x0.max(x1));
    let (top, bottom) = (y0.min(y1), y0.max(y1));
    let rx = f64::from(right - left) / 2.0;
    let ry = f64::from(bottom - top) / 2.0;
    let cx = f64::from(left) + rx;
    let cy = f64::from(top) + ry;

    if rx < 0.5 || ry < 0.5 {
        return line_points(left, top, right, bottom);
    }

    let steps = (8.0 * (rx + ry)).ceil() as usize;
    let mut points = Vec::with_capacity(steps);
    for step in 0..steps {
        let angle = std::f64::consts::TAU * step as f64 / steps as f64;
        let x = (cx + rx * angle.cos()).round() as i32;
        let y = (cy + ry * angle.sin()).round() as i32;
        if points.last() != Some(&(x, y)) {
            points.push((x, y));
        }
    }
    points.dedup();
    points
}

/// Iterative four-way flood fill over matching palette indices.
pub(crate) fn flood_fill(pixels: &mut [u8], start: usize, color: u8) {
    let target = pixels[start];
    if target == color {
        return;
    }
    let mut stack = vec![start];
    while let Some(index) = stack.pop() {
        if pixels[index] != target {
            continue;
        }
        pixels[index] = color;
        let x = index % CANVAS_COLS;
        let y = index / CANVAS_COLS;
        if x > 0 {
            stack.push(index - 1);
        }
        if x + 1 < CANVAS_COLS {
            stack.push(index + 1);
        }
        if y > 0 {
            stack.push(index - CANVAS_COLS);
        }
        if y + 1 < CANVAS_ROWS {
            stack.push(index + CANVAS_COLS);
        }
    }
}
