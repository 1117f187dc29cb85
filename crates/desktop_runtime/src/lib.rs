pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod store;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell, use_desktop_runtime};
pub use config::SessionConfig;
pub use model::*;
pub use reducer::{reduce_session, ReducerError, RuntimeEffect, SessionAction};
pub use store::{SessionStore, SubscriptionId};
pub use window_manager::{
    frame_presentation, managed_windows, taskbar_entries, Bounds, DragSession, FrameCommit,
    FramePresentation, FrameRect, LayoutMode, PointerPosition, ResizeEdge, ResizeSession,
    TaskbarEntry,
};
