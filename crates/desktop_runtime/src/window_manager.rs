//! Window-manager geometry shared by the frame, taskbar and window layer views.
//!
//! Drag and resize feedback lives here as ephemeral sessions; only the final
//! [`FrameCommit`] reaches the [`SessionStore`].

use crate::{
    config::SessionConfig,
    model::{
        Dimension, SessionState, WindowId, WindowPosition, WindowRecord, WindowSize, WindowState,
    },
    store::SessionStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether frames float freely or fill the viewport.
pub enum LayoutMode {
    Desktop,
    /// Narrow viewport: every visible window fills the container and cannot be dragged.
    Compact,
}

impl LayoutMode {
    pub fn for_viewport_width(width: f64, config: &SessionConfig) -> Self {
        if width < config.compact_breakpoint_px {
            Self::Compact
        } else {
            Self::Desktop
        }
    }
}

/// Windows the window layer and taskbar render: current desktop, insertion order.
pub fn managed_windows(state: &SessionState) -> Vec<&WindowRecord> {
    state.windows_on_current_desktop().collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum FramePresentation {
    Hidden,
    Floating {
        position: WindowPosition,
        size: WindowSize,
        draggable: bool,
        resizable: bool,
    },
    /// Full container bounds, no drag or resize.
    Filled,
}

pub fn frame_presentation(window: &WindowRecord, mode: LayoutMode) -> FramePresentation {
    match (window.state, mode) {
        (WindowState::Minimized, _) => FramePresentation::Hidden,
        (WindowState::Maximized, _) | (_, LayoutMode::Compact) => FramePresentation::Filled,
        (WindowState::Normal, LayoutMode::Desktop) => FramePresentation::Floating {
            position: window.position,
            size: window.size.clone(),
            draggable: true,
            resizable: true,
        },
    }
}

/// State the maximize button switches to.
pub fn maximize_toggle_target(current: WindowState) -> WindowState {
    match current {
        WindowState::Maximized => WindowState::Normal,
        WindowState::Normal | WindowState::Minimized => WindowState::Maximized,
    }
}

/// Title-bar double click toggles maximize; it does nothing in the compact layout.
pub fn title_bar_double_click(window: &WindowRecord, mode: LayoutMode) -> Option<WindowState> {
    if mode == LayoutMode::Compact || window.is_minimized() {
        return None;
    }
    Some(maximize_toggle_target(window.state))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon_id: String,
    pub active: bool,
    /// Shown for every window that is not minimized.
    pub running: bool,
}

pub fn taskbar_entries(state: &SessionState) -> Vec<TaskbarEntry> {
    managed_windows(state)
        .into_iter()
        .map(|window| TaskbarEntry {
            window_id: window.id,
            title: window.title.clone(),
            icon_id: window.icon_id.clone(),
            active: state.is_active(window.id),
            running: !window.is_minimized(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Pixel size of the element frames are clamped to.
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    /// Resolves a window's stored geometry against its container. CSS lengths the
    /// shell cannot evaluate take the full container length.
    pub fn of_window(window: &WindowRecord, bounds: Bounds) -> Self {
        Self {
            x: window.position.x,
            y: window.position.y,
            width: window.size.width.resolve_px(bounds.width).unwrap_or(bounds.width),
            height: window
                .size
                .height
                .resolve_px(bounds.height)
                .unwrap_or(bounds.height),
        }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn position(&self) -> WindowPosition {
        WindowPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> WindowSize {
        WindowSize {
            width: Dimension::Px(self.width),
            height: Dimension::Px(self.height),
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.width, self.height
        )
    }
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

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Geometry change produced when a drag or resize gesture ends.
pub enum FrameCommit {
    Move {
        window_id: WindowId,
        position: WindowPosition,
    },
    Resize {
        window_id: WindowId,
        position: WindowPosition,
        size: WindowSize,
    },
}

impl FrameCommit {
    pub fn apply(self, store: &SessionStore) {
        match self {
            Self::Move {
                window_id,
                position,
            } => store.update_window_position(window_id, position),
            Self::Resize {
                window_id,
                position,
                size,
            } => {
                store.update_window_size(window_id, size);
                store.update_window_position(window_id, position);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: FrameRect,
}

impl DragSession {
    /// Frame position for `pointer`, kept fully inside `bounds` where it fits.
    pub fn preview(&self, pointer: PointerPosition, bounds: Bounds) -> FrameRect {
        let start = self.rect_start;
        let max_x = (bounds.width - start.width).max(0.0);
        let max_y = (bounds.height - start.height).max(0.0);
        FrameRect {
            x: (start.x + pointer.x - self.pointer_start.x)
                .min(max_x)
                .max(0.0),
            y: (start.y + pointer.y - self.pointer_start.y)
                .min(max_y)
                .max(0.0),
            ..start
        }
    }

    pub fn finish(&self, pointer: PointerPosition, bounds: Bounds) -> FrameCommit {
        FrameCommit::Move {
            window_id: self.window_id,
            position: self.preview(pointer, bounds).position(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: FrameRect,
}

impl ResizeSession {
    /// Frame for `pointer`. The edge opposite the dragged one stays put, the dragged
    /// edge stops at `bounds`, and the minimum frame size wins over both.
    pub fn preview(
        &self,
        pointer: PointerPosition,
        bounds: Bounds,
        config: &SessionConfig,
    ) -> FrameRect {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        let start = self.rect_start;
        let (mut left, mut top) = (start.x, start.y);
        let (mut right, mut bottom) = (start.right(), start.bottom());

        if self.edge.moves_west() {
            left = (left + dx).max(0.0).min(right - config.min_frame_width);
        }
        if self.edge.moves_east() {
            right = (right + dx)
                .min(bounds.width)
                .max(left + config.min_frame_width);
        }
        if self.edge.moves_north() {
            top = (top + dy).max(0.0).min(bottom - config.min_frame_height);
        }
        if self.edge.moves_south() {
            bottom = (bottom + dy)
                .min(bounds.height)
                .max(top + config.min_frame_height);
        }

        FrameRect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn finish(
        &self,
        pointer: PointerPosition,
        bounds: Bounds,
        config: &SessionConfig,
    ) -> FrameCommit {
        let rect = self.preview(pointer, bounds, config);
        FrameCommit::Resize {
            window_id: self.window_id,
            position: rect.position(),
            size: rect.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, DesktopId};

    const BOUNDS: Bounds = Bounds {
        width: 1280.0,
        height: 720.0,
    };

    fn window(id: u64, state: WindowState) -> WindowRecord {
        WindowRecord {
            id: WindowId(id),
            app_id: AppId::from("operations"),
            title: "Operations".to_string(),
            icon_id: "truck".to_string(),
            position: WindowPosition { x: 120.0, y: 80.0 },
            size: WindowSize::px(800.0, 600.0),
            z_index: 100,
            state,
            desktop_id: DesktopId(1),
        }
    }

    fn rect() -> FrameRect {
        FrameRect {
            x: 100.0,
            y: 100.0,
            width: 400.0,
            height: 300.0,
        }
    }

    fn resize(edge: ResizeEdge) -> ResizeSession {
        ResizeSession {
            window_id: WindowId(1),
            edge,
            pointer_start: PointerPosition { x: 0.0, y: 0.0 },
            rect_start: rect(),
        }
    }

    #[test]
    fn layout_mode_switches_below_breakpoint() {
        let config = SessionConfig::default();
        assert_eq!(LayoutMode::for_viewport_width(767.0, &config), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_viewport_width(768.0, &config), LayoutMode::Desktop);
    }

    #[test]
    fn presentation_follows_state_and_layout() {
        assert_eq!(
            frame_presentation(&window(1, WindowState::Minimized), LayoutMode::Desktop),
            FramePresentation::Hidden
        );
        assert_eq!(
            frame_presentation(&window(1, WindowState::Maximized), LayoutMode::Desktop),
            FramePresentation::Filled
        );
        assert_eq!(
            frame_presentation(&window(1, WindowState::Normal), LayoutMode::Compact),
            FramePresentation::Filled
        );
        assert_eq!(
            frame_presentation(&window(1, WindowState::Normal), LayoutMode::Desktop),
            FramePresentation::Floating {
                position: WindowPosition { x: 120.0, y: 80.0 },
                size: WindowSize::px(800.0, 600.0),
                draggable: true,
                resizable: true,
            }
        );
    }

    #[test]
    fn title_bar_double_click_toggles_maximize_on_desktop_only() {
        let normal = window(1, WindowState::Normal);
        let maximized = window(1, WindowState::Maximized);

        assert_eq!(
            title_bar_double_click(&normal, LayoutMode::Desktop),
            Some(WindowState::Maximized)
        );
        assert_eq!(
            title_bar_double_click(&maximized, LayoutMode::Desktop),
            Some(WindowState::Normal)
        );
        assert_eq!(title_bar_double_click(&normal, LayoutMode::Compact), None);
    }

    #[test]
    fn taskbar_entries_mark_active_and_running() {
        let mut state = SessionState::default();
        state.windows = vec![
            window(1, WindowState::Normal),
            window(2, WindowState::Minimized),
            WindowRecord {
                desktop_id: DesktopId(2),
                ..window(3, WindowState::Normal)
            },
        ];
        state.active_window_id = Some(WindowId(1));

        let entries = taskbar_entries(&state);

        assert_eq!(
            entries
                .iter()
                .map(|e| (e.window_id, e.active, e.running))
                .collect::<Vec<_>>(),
            vec![(WindowId(1), true, true), (WindowId(2), false, false)]
        );
    }

    #[test]
    fn drag_preview_moves_with_pointer_and_stays_in_bounds() {
        let drag = DragSession {
            window_id: WindowId(1),
            pointer_start: PointerPosition { x: 10.0, y: 10.0 },
            rect_start: rect(),
        };

        let moved = drag.preview(PointerPosition { x: 60.0, y: 30.0 }, BOUNDS);
        assert_eq!((moved.x, moved.y), (150.0, 120.0));

        let pushed = drag.preview(PointerPosition { x: 5000.0, y: -5000.0 }, BOUNDS);
        assert_eq!((pushed.x, pushed.y), (880.0, 0.0));
        assert_eq!((pushed.width, pushed.height), (400.0, 300.0));
    }

    #[test]
    fn drag_finish_commits_position_only() {
        let drag = DragSession {
            window_id: WindowId(4),
            pointer_start: PointerPosition { x: 0.0, y: 0.0 },
            rect_start: rect(),
        };

        assert_eq!(
            drag.finish(PointerPosition { x: 20.0, y: 40.0 }, BOUNDS),
            FrameCommit::Move {
                window_id: WindowId(4),
                position: WindowPosition { x: 120.0, y: 140.0 },
            }
        );
    }

    #[test]
    fn resize_south_east_grows_and_clamps_to_bounds() {
        let config = SessionConfig::default();
        let grown = resize(ResizeEdge::SouthEast).preview(
            PointerPosition { x: 100.0, y: 50.0 },
            BOUNDS,
            &config,
        );
        assert_eq!(grown, FrameRect { width: 500.0, height: 350.0, ..rect() });

        let clamped = resize(ResizeEdge::SouthEast).preview(
            PointerPosition { x: 9000.0, y: 9000.0 },
            BOUNDS,
            &config,
        );
        assert_eq!((clamped.width, clamped.height), (1180.0, 620.0));
    }

    #[test]
    fn resize_respects_minimum_frame_and_anchors_opposite_edge() {
        let config = SessionConfig::default();
        let shrunk = resize(ResizeEdge::NorthWest).preview(
            PointerPosition { x: 390.0, y: 290.0 },
            BOUNDS,
            &config,
        );

        assert_eq!(
            shrunk,
            FrameRect {
                x: 200.0,
                y: 200.0,
                width: 300.0,
                height: 200.0,
            }
        );
    }

    #[test]
    fn resize_west_stops_at_container_edge() {
        let config = SessionConfig::default();
        let widened = resize(ResizeEdge::West).preview(
            PointerPosition { x: -500.0, y: 0.0 },
            BOUNDS,
            &config,
        );

        assert_eq!(widened, FrameRect { x: 0.0, width: 500.0, ..rect() });
    }

    #[test]
    fn css_sizes_resolve_against_container() {
        let mut win = window(1, WindowState::Normal);
        win.size = WindowSize {
            width: Dimension::Css("50%".to_string()),
            height: Dimension::Css("calc(100% - 2rem)".to_string()),
        };

        let frame = FrameRect::of_window(&win, BOUNDS);
        assert_eq!((frame.width, frame.height), (640.0, 720.0));
    }

    #[test]
    fn drag_and_resize_commits_update_the_stored_window() {
        let store = SessionStore::with_seed(SessionConfig::default(), 3);
        let config = store.config().clone();
        store.open_app("operations", None);
        let window_id = store.with_state(|state| state.windows[0].id);
        store.update_window_position(window_id, WindowPosition { x: 100.0, y: 40.0 });

        let win = store.with_state(|state| state.window(window_id).cloned()).unwrap();
        let drag = DragSession {
            window_id,
            pointer_start: PointerPosition { x: 10.0, y: 10.0 },
            rect_start: FrameRect::of_window(&win, BOUNDS),
        };
        drag.finish(PointerPosition { x: 50.0, y: 30.0 }, BOUNDS).apply(&store);

        let moved = store.with_state(|state| state.window(window_id).cloned()).unwrap();
        assert_eq!(moved.position, WindowPosition { x: 140.0, y: 60.0 });
        assert_eq!(moved.size, WindowSize::px(800.0, 600.0));

        let resize = ResizeSession {
            window_id,
            edge: ResizeEdge::NorthWest,
            pointer_start: PointerPosition { x: 140.0, y: 60.0 },
            rect_start: FrameRect::of_window(&moved, BOUNDS),
        };
        resize
            .finish(PointerPosition { x: 240.0, y: 90.0 }, BOUNDS, &config)
            .apply(&store);

        let resized = store.with_state(|state| state.window(window_id).cloned()).unwrap();
        assert_eq!(resized.position, WindowPosition { x: 240.0, y: 90.0 });
        assert_eq!(resized.size, WindowSize::px(700.0, 570.0));
    }
}
