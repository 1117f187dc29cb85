//! Session actions, side-effect intents, and the transition logic behind every store operation.

use serde_json::Value;
use thiserror::Error;

use crate::{
    config::SessionConfig,
    model::{
        AppId, Desktop, DesktopId, Notification, NotificationDraft, NotificationId, SessionState,
        WindowId, WindowMeta, WindowPosition, WindowRecord, WindowSize, WindowState,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`].
pub enum SessionAction {
    /// Focus the app's window on the current desktop, or open a new one.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Display metadata; missing fields fall back to the app id and a generic icon.
        meta: WindowMeta,
        /// Initial position used only when a new window is created.
        placement: WindowPosition,
    },
    /// Close a window.
    CloseApp {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window and make it active.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window between normal, minimized and maximized.
    SetWindowState {
        /// Target window.
        window_id: WindowId,
        /// New lifecycle state.
        state: WindowState,
    },
    /// Commit a dragged position.
    UpdateWindowPosition {
        /// Target window.
        window_id: WindowId,
        /// New frame origin, stored verbatim.
        position: WindowPosition,
    },
    /// Commit a resized frame.
    UpdateWindowSize {
        /// Target window.
        window_id: WindowId,
        /// New frame size, stored verbatim.
        size: WindowSize,
    },
    /// Taskbar button click: minimize the active window, otherwise restore and focus.
    ToggleTaskbarWindow {
        /// Window bound to the taskbar button.
        window_id: WindowId,
    },
    /// Prepend a notification.
    AddNotification {
        /// Caller-supplied content.
        draft: NotificationDraft,
        /// Creation time in unix milliseconds.
        timestamp_ms: u64,
    },
    /// Dismiss one notification.
    RemoveNotification {
        /// Notification to drop.
        notification_id: NotificationId,
    },
    /// Dismiss every notification.
    ClearNotifications,
    /// Replace the wallpaper URL; empty selects the generated background.
    SetWallpaper {
        /// Wallpaper URL.
        wallpaper: String,
    },
    /// Create a desktop and switch to it.
    AddDesktop,
    /// Remove a desktop, moving its windows to the first remaining one.
    RemoveDesktop {
        /// Desktop to remove.
        desktop_id: DesktopId,
    },
    /// Switch the visible desktop.
    SetCurrentDesktop {
        /// Desktop to show.
        desktop_id: DesktopId,
    },
    /// Shallow-merge data into an app's opaque state blob.
    UpdateAppState {
        /// Owning app.
        app_id: AppId,
        /// Partial data; objects merge key-by-key, anything else replaces the entry.
        partial: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_session`] for the view layer.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly active window.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action was refused. A refused action leaves the state untouched.
pub enum ReducerError {
    /// The target window id is not in the session.
    #[error("window {0:?} not found")]
    WindowNotFound(WindowId),
    /// The window is minimized or lives on another desktop.
    #[error("window {0:?} is not visible on the current desktop")]
    WindowNotFocusable(WindowId),
    /// The target desktop id is not in the session.
    #[error("desktop {0} not found")]
    DesktopNotFound(DesktopId),
    /// Removing the desktop would leave the session with none.
    #[error("cannot remove the last desktop")]
    LastDesktop,
    /// The target notification id is not in the session.
    #[error("notification {0:?} not found")]
    NotificationNotFound(NotificationId),
}

/// Applies `action` to `state` and returns the resulting view-layer effects.
///
/// Every action either fully applies or returns an error before touching `state`, so a caller
/// can treat errors as silent no-ops.
///
/// # Errors
///
/// Returns a [`ReducerError`] when the action names an unknown window, desktop or notification,
/// or would break a session invariant.
pub fn reduce_session(
    state: &mut SessionState,
    config: &SessionConfig,
    action: SessionAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        SessionAction::OpenApp {
            app_id,
            meta,
            placement,
        } => {
            let existing = state
                .window_for_app_on_current_desktop(&app_id)
                .map(|w| w.id);
            let window_id = match existing {
                Some(window_id) => {
                    let window = find_window_mut(state, window_id)?;
                    if window.state == WindowState::Minimized {
                        window.state = WindowState::Normal;
                    }
                    raise_window(state, window_id)?;
                    window_id
                }
                None => {
                    let window_id = next_window_id(state);
                    let z_index = next_z_index(state);
                    state.windows.push(WindowRecord {
                        id: window_id,
                        title: meta.title.unwrap_or_else(|| app_id.to_string()),
                        icon_id: meta
                            .icon_id
                            .unwrap_or_else(|| config.fallback_icon_id.clone()),
                        app_id,
                        position: placement,
                        size: config.default_window_size.clone(),
                        z_index,
                        state: WindowState::Normal,
                        desktop_id: state.current_desktop_id,
                    });
                    window_id
                }
            };
            state.active_window_id = Some(window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        SessionAction::CloseApp { window_id } => {
            let index = state
                .windows
                .iter()
                .position(|w| w.id == window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            state.windows.remove(index);
            if state.active_window_id == Some(window_id) {
                state.active_window_id = state.topmost_window_on_current_desktop().map(|w| w.id);
                if let Some(next) = state.active_window_id {
                    effects.push(RuntimeEffect::FocusWindowInput(next));
                }
            }
        }
        SessionAction::FocusWindow { window_id } => {
            let window = find_window(state, window_id)?;
            if window.is_minimized() || window.desktop_id != state.current_desktop_id {
                return Err(ReducerError::WindowNotFocusable(window_id));
            }
            raise_window(state, window_id)?;
            state.active_window_id = Some(window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        SessionAction::SetWindowState {
            window_id,
            state: window_state,
        } => {
            let current_desktop_id = state.current_desktop_id;
            let window = find_window_mut(state, window_id)?;
            window.state = window_state;
            let on_current_desktop = window.desktop_id == current_desktop_id;
            if window_state == WindowState::Minimized {
                if state.active_window_id == Some(window_id) {
                    state.active_window_id = None;
                }
            } else if on_current_desktop {
                raise_window(state, window_id)?;
                state.active_window_id = Some(window_id);
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        SessionAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            find_window_mut(state, window_id)?.position = position;
        }
        SessionAction::UpdateWindowSize { window_id, size } => {
            find_window_mut(state, window_id)?.size = size;
        }
        SessionAction::ToggleTaskbarWindow { window_id } => {
            if state.is_active(window_id) {
                find_window_mut(state, window_id)?.state = WindowState::Minimized;
                state.active_window_id = None;
            } else {
                let current_desktop_id = state.current_desktop_id;
                let window = find_window_mut(state, window_id)?;
                if window.state == WindowState::Minimized {
                    window.state = WindowState::Normal;
                }
                let on_current_desktop = window.desktop_id == current_desktop_id;
                raise_window(state, window_id)?;
                if on_current_desktop {
                    state.active_window_id = Some(window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
            }
        }
        SessionAction::AddNotification {
            draft,
            timestamp_ms,
        } => {
            let id = NotificationId(state.next_notification_id);
            state.next_notification_id = state.next_notification_id.saturating_add(1);
            state.notifications.insert(
                0,
                Notification {
                    id,
                    app_id: draft.app_id,
                    icon_id: draft.icon_id,
                    title: draft.title,
                    message: draft.message,
                    timestamp_ms,
                },
            );
            state.notifications.truncate(config.notification_limit);
        }
        SessionAction::RemoveNotification { notification_id } => {
            let before = state.notifications.len();
            state.notifications.retain(|n| n.id != notification_id);
            if state.notifications.len() == before {
                return Err(ReducerError::NotificationNotFound(notification_id));
            }
        }
        SessionAction::ClearNotifications => {
            state.notifications.clear();
        }
        SessionAction::SetWallpaper { wallpaper } => {
            state.wallpaper = wallpaper;
        }
        SessionAction::AddDesktop => {
            let desktop_id = DesktopId(state.next_desktop_id);
            state.desktops.push(Desktop::numbered(desktop_id));
            state.next_desktop_id = state.next_desktop_id.saturating_add(1);
            state.current_desktop_id = desktop_id;
            state.active_window_id = None;
        }
        SessionAction::RemoveDesktop { desktop_id } => {
            if state.desktops.len() <= 1 {
                return Err(ReducerError::LastDesktop);
            }
            if state.desktop(desktop_id).is_none() {
                return Err(ReducerError::DesktopNotFound(desktop_id));
            }
            state.desktops.retain(|d| d.id != desktop_id);
            let fallback = state.desktops[0].id;
            for window in state
                .windows
                .iter_mut()
                .filter(|w| w.desktop_id == desktop_id)
            {
                window.desktop_id = fallback;
            }
            if state.current_desktop_id == desktop_id {
                state.current_desktop_id = fallback;
            }
        }
        SessionAction::SetCurrentDesktop { desktop_id } => {
            if state.desktop(desktop_id).is_none() {
                return Err(ReducerError::DesktopNotFound(desktop_id));
            }
            state.current_desktop_id = desktop_id;
            state.active_window_id = None;
        }
        SessionAction::UpdateAppState { app_id, partial } => {
            let entry = state
                .apps_state
                .entry(app_id.0)
                .or_insert_with(|| Value::Object(Default::default()));
            merge_app_state(entry, partial);
        }
    }

    Ok(effects)
}

fn merge_app_state(entry: &mut Value, partial: Value) {
    match (entry, partial) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (entry, partial) => *entry = partial,
    }
}

fn next_window_id(state: &mut SessionState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn next_z_index(state: &mut SessionState) -> u32 {
    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    z_index
}

/// Gives `window_id` a fresh top z-index unless it already holds the latest one.
fn raise_window(state: &mut SessionState, window_id: WindowId) -> Result<(), ReducerError> {
    if state.is_topmost(window_id) {
        return Ok(());
    }
    let z_index = state.next_z_index;
    find_window_mut(state, window_id)?.z_index = z_index;
    state.next_z_index = z_index.saturating_add(1);
    Ok(())
}

fn find_window(state: &SessionState, window_id: WindowId) -> Result<&WindowRecord, ReducerError> {
    state
        .window(window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}

fn find_window_mut(
    state: &mut SessionState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound(window_id))
}
