use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DesktopId(pub u32);

impl fmt::Display for DesktopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// Registry key of a hosted application. Unknown keys are stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
}

impl WindowPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One frame dimension: a pixel count or a CSS length kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl Dimension {
    /// Parses a CSS length, collapsing `"<n>px"` to [`Dimension::Px`].
    pub fn parse_css(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .strip_suffix("px")
            .and_then(|number| number.trim().parse::<f64>().ok())
            .or_else(|| trimmed.parse::<f64>().ok())
            .map(Self::Px)
            .unwrap_or_else(|| Self::Css(trimmed.to_string()))
    }

    /// Resolves to pixels against `container` length; `None` for lengths the shell cannot evaluate.
    pub fn resolve_px(&self, container: f64) -> Option<f64> {
        match self {
            Self::Px(px) => Some(*px),
            Self::Css(raw) => {
                let raw = raw.trim();
                if let Some(percent) = raw.strip_suffix('%') {
                    return percent.trim().parse::<f64>().ok().map(|p| container * p / 100.0);
                }
                match Self::parse_css(raw) {
                    Self::Px(px) => Some(px),
                    Self::Css(_) => None,
                }
            }
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Css(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl WindowSize {
    pub fn px(width: f64, height: f64) -> Self {
        Self {
            width: Dimension::Px(width),
            height: Dimension::Px(height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
    pub state: WindowState,
    pub desktop_id: DesktopId,
}

impl WindowRecord {
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desktop {
    pub id: DesktopId,
    /// Label key, resolved for display by the desktop switcher.
    pub name: String,
}

impl Desktop {
    pub fn numbered(id: DesktopId) -> Self {
        Self {
            id,
            name: format!("os.desktop.{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub app_id: AppId,
    pub icon_id: String,
    pub title: String,
    pub message: String,
    pub timestamp_ms: u64,
}

/// Caller-supplied part of a [`Notification`]; id and timestamp are synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub app_id: AppId,
    pub icon_id: String,
    pub title: String,
    pub message: String,
}

/// Optional display metadata for `open_app`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowMeta {
    pub title: Option<String>,
    pub icon_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Insertion order, not stacking order.
    pub windows: Vec<WindowRecord>,
    pub desktops: Vec<Desktop>,
    pub current_desktop_id: DesktopId,
    pub active_window_id: Option<WindowId>,
    pub next_z_index: u32,
    pub next_desktop_id: u32,
    pub next_window_id: u64,
    pub next_notification_id: u64,
    /// Newest first.
    pub notifications: Vec<Notification>,
    /// Empty means the generated background.
    pub wallpaper: String,
    pub apps_state: BTreeMap<String, Value>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        let first = DesktopId(1);
        Self {
            windows: Vec::new(),
            desktops: vec![Desktop::numbered(first)],
            current_desktop_id: first,
            active_window_id: None,
            next_z_index: config.initial_z_index,
            next_desktop_id: 2,
            next_window_id: 1,
            next_notification_id: 1,
            notifications: Vec::new(),
            wallpaper: String::new(),
            apps_state: BTreeMap::new(),
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active_window_id.and_then(|id| self.window(id))
    }

    pub fn windows_on_current_desktop(&self) -> impl Iterator<Item = &WindowRecord> {
        let current = self.current_desktop_id;
        self.windows.iter().filter(move |w| w.desktop_id == current)
    }

    /// Highest-stacked visible window on the current desktop.
    pub fn topmost_window_on_current_desktop(&self) -> Option<&WindowRecord> {
        self.windows_on_current_desktop()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_index)
    }

    pub fn window_for_app_on_current_desktop(&self, app_id: &AppId) -> Option<&WindowRecord> {
        self.windows_on_current_desktop()
            .find(|w| &w.app_id == app_id)
    }

    pub fn desktop(&self, desktop_id: DesktopId) -> Option<&Desktop> {
        self.desktops.iter().find(|d| d.id == desktop_id)
    }

    pub fn current_desktop(&self) -> Option<&Desktop> {
        self.desktop(self.current_desktop_id)
    }

    pub fn app_state(&self, app_id: &AppId) -> Option<&Value> {
        self.apps_state.get(app_id.as_str())
    }

    /// Whether `window_id` is the window holding input focus right now.
    pub fn is_active(&self, window_id: WindowId) -> bool {
        self.active_window_id == Some(window_id)
            && self.window(window_id).is_some_and(|w| !w.is_minimized())
    }

    /// Whether `window_id` already holds the highest z-index ever handed out.
    pub fn is_topmost(&self, window_id: WindowId) -> bool {
        self.window(window_id)
            .is_some_and(|w| w.z_index.saturating_add(1) == self.next_z_index)
    }
}
