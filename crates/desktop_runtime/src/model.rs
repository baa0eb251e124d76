pub const DEFAULT_WINDOW_WIDTH: i32 = 400;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;
pub const BASE_Z_INDEX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    About,
    Projects,
    Notepad,
    Calculator,
    Clock,
    Paint,
    Minesweeper,
    Solitaire,
}

impl AppId {
    /// Every launchable app, in desktop icon-column order.
    pub const ALL: [AppId; 8] = [
        Self::About,
        Self::Projects,
        Self::Notepad,
        Self::Calculator,
        Self::Clock,
        Self::Paint,
        Self::Minesweeper,
        Self::Solitaire,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Notepad => "Notepad",
            Self::Calculator => "Calculator",
            Self::Clock => "Clock",
            Self::Paint => "Paint",
            Self::Minesweeper => "Minesweeper",
            Self::Solitaire => "Solitaire",
        }
    }

    pub fn icon_glyph(self) -> &'static str {
        match self {
            Self::About => "\u{24D8}",
            Self::Projects => "\u{25A4}",
            Self::Notepad => "\u{1F4C4}",
            Self::Calculator => "\u{1F5A9}",
            Self::Clock => "\u{1F550}",
            Self::Paint => "\u{1F58C}",
            Self::Minesweeper => "\u{1F4A3}",
            Self::Solitaire => "\u{1F0A1}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 50,
            y: 50,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Presentation state for one managed window. Geometry is preserved (but
/// ignored by the renderer) while `maximized` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub minimized_at: Option<u64>,
}

/// Authoritative window registry. One window per app; z comes from a
/// monotonically increasing counter so the most recently raised window always
/// holds the strictly highest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub top_z: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            top_z: BASE_Z_INDEX,
        }
    }
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Open, non-minimized windows in registry order; the renderer sorts by z.
    pub fn open_windows(&self) -> Vec<&WindowRecord> {
        self.windows.iter().filter(|w| !w.minimized).collect()
    }

    /// Minimized windows, oldest minimize first. The sort is stable so
    /// colliding timestamps keep registry order.
    pub fn minimized_windows(&self) -> Vec<&WindowRecord> {
        let mut tray: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| w.minimized).collect();
        tray.sort_by_key(|w| w.minimized_at);
        tray
    }

    /// Highest-z open, non-minimized window.
    pub fn active_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.app_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
