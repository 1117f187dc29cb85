//! Tunables for the session store and the window frame.

use serde::{Deserialize, Serialize};

use crate::model::{Dimension, WindowSize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Session-wide configuration injected into [`crate::SessionStore`].
pub struct SessionConfig {
    /// First z-index handed out; every later raise is strictly greater.
    pub initial_z_index: u32,
    /// Size of newly opened windows.
    pub default_window_size: WindowSize,
    /// Horizontal range `[start, end)` of the random placement offset.
    pub placement_x: (f64, f64),
    /// Vertical range `[start, end)` of the random placement offset.
    pub placement_y: (f64, f64),
    /// Maximum retained notifications, newest first.
    pub notification_limit: usize,
    /// Icon id recorded when neither the caller nor the registry supplies one.
    pub fallback_icon_id: String,
    /// Viewport width below which the compact layout applies.
    pub compact_breakpoint_px: f64,
    /// Smallest width a frame can be resized to.
    pub min_frame_width: f64,
    /// Smallest height a frame can be resized to.
    pub min_frame_height: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_z_index: 100,
            default_window_size: WindowSize {
                width: Dimension::Px(800.0),
                height: Dimension::Px(600.0),
            },
            placement_x: (50.0, 250.0),
            placement_y: (50.0, 150.0),
            notification_limit: 20,
            fallback_icon_id: "app-generic".to_string(),
            compact_breakpoint_px: 768.0,
            min_frame_width: 300.0,
            min_frame_height: 200.0,
        }
    }
}
