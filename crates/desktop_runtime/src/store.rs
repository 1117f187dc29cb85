//! The session store: single owner of [`SessionState`] and the only way to mutate it.
//!
//! Each operation clones the current state, runs [`reduce_session`] on the copy, and commits the
//! copy only when the reducer accepted the action and something changed. Subscribers are called
//! once per committed operation, after the state borrow is released. Operations a subscriber
//! starts are queued until the current round of notifications has finished.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use leptos::logging;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::Value;

use crate::{
    config::SessionConfig,
    model::{
        AppId, DesktopId, NotificationDraft, NotificationId, SessionState, WindowId, WindowMeta,
        WindowPosition, WindowSize, WindowState,
    },
    reducer::{reduce_session, RuntimeEffect, SessionAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`SessionStore::subscribe`].
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SessionState, &[RuntimeEffect])>;
type Clock = Box<dyn Fn() -> u64>;

struct StoreInner {
    config: SessionConfig,
    state: RefCell<SessionState>,
    placement_rng: RefCell<SmallRng>,
    clock: Clock,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    pending: RefCell<VecDeque<SessionAction>>,
    draining: Cell<bool>,
}

#[derive(Clone)]
/// Shared handle to one desktop session. Clones refer to the same session.
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

impl SessionStore {
    /// Creates a session with one desktop and no windows.
    pub fn new(config: SessionConfig) -> Self {
        let seed = platform_host::unix_time_ms_now();
        Self::with_seed(config, seed)
    }

    /// Creates a session whose window placement sequence is reproducible.
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_clock(config, seed, platform_host::next_monotonic_timestamp_ms)
    }

    /// Creates a session with an explicit notification clock.
    pub fn with_clock(config: SessionConfig, seed: u64, clock: impl Fn() -> u64 + 'static) -> Self {
        let state = SessionState::new(&config);
        Self {
            inner: Rc::new(StoreInner {
                config,
                state: RefCell::new(state),
                placement_rng: RefCell::new(SmallRng::seed_from_u64(seed)),
                clock: Box::new(clock),
                listeners: RefCell::new(Vec::new()),
                next_subscription: Cell::new(1),
                pending: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Reads the current state without copying it.
    pub fn with_state<R>(&self, read: impl FnOnce(&SessionState) -> R) -> R {
        read(&self.inner.state.borrow())
    }

    /// Registers `listener`, called after every operation that changed the state.
    pub fn subscribe(
        &self,
        listener: impl Fn(&SessionState, &[RuntimeEffect]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Drops every subscriber. The session itself stays usable.
    pub fn dispose(&self) {
        self.inner.listeners.borrow_mut().clear();
    }

    /// Applies one action atomically and notifies subscribers when the state changed.
    ///
    /// Refused actions are dropped with a debug log. An action dispatched by a subscriber is
    /// queued and applied once every subscriber has seen the current change, so all of them
    /// observe changes in dispatch order.
    pub fn dispatch(&self, action: SessionAction) {
        self.inner.pending.borrow_mut().push_back(action);
        if self.inner.draining.replace(true) {
            return;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            if let Some((state, effects)) = self.commit(action) {
                self.notify(&state, &effects);
            }
        }
        self.inner.draining.set(false);
    }

    fn commit(&self, action: SessionAction) -> Option<(SessionState, Vec<RuntimeEffect>)> {
        let mut current = self.inner.state.borrow_mut();
        let mut next = current.clone();
        match reduce_session(&mut next, &self.inner.config, action) {
            Ok(effects) if next != *current => {
                *current = next.clone();
                Some((next, effects))
            }
            Ok(_) => None,
            Err(err) => {
                logging::debug_warn!("session action ignored: {err}");
                None
            }
        }
    }

    fn notify(&self, state: &SessionState, effects: &[RuntimeEffect]) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(state, effects);
        }
    }

    /// Focuses the app's window on the current desktop, or opens a new one.
    pub fn open_app(&self, app_id: impl Into<AppId>, meta: Option<WindowMeta>) {
        let placement = self.next_placement();
        self.dispatch(SessionAction::OpenApp {
            app_id: app_id.into(),
            meta: meta.unwrap_or_default(),
            placement,
        });
    }

    pub fn close_app(&self, window_id: WindowId) {
        self.dispatch(SessionAction::CloseApp { window_id });
    }

    pub fn focus_window(&self, window_id: WindowId) {
        self.dispatch(SessionAction::FocusWindow { window_id });
    }

    pub fn set_window_state(&self, window_id: WindowId, state: WindowState) {
        self.dispatch(SessionAction::SetWindowState { window_id, state });
    }

    pub fn update_window_position(&self, window_id: WindowId, position: WindowPosition) {
        self.dispatch(SessionAction::UpdateWindowPosition {
            window_id,
            position,
        });
    }

    pub fn update_window_size(&self, window_id: WindowId, size: WindowSize) {
        self.dispatch(SessionAction::UpdateWindowSize { window_id, size });
    }

    pub fn toggle_taskbar_window(&self, window_id: WindowId) {
        self.dispatch(SessionAction::ToggleTaskbarWindow { window_id });
    }

    pub fn add_notification(&self, draft: NotificationDraft) {
        let timestamp_ms = (self.inner.clock)();
        self.dispatch(SessionAction::AddNotification {
            draft,
            timestamp_ms,
        });
    }

    pub fn remove_notification(&self, notification_id: NotificationId) {
        self.dispatch(SessionAction::RemoveNotification { notification_id });
    }

    pub fn clear_notifications(&self) {
        self.dispatch(SessionAction::ClearNotifications);
    }

    pub fn set_wallpaper(&self, wallpaper: impl Into<String>) {
        self.dispatch(SessionAction::SetWallpaper {
            wallpaper: wallpaper.into(),
        });
    }

    pub fn add_desktop(&self) {
        self.dispatch(SessionAction::AddDesktop);
    }

    pub fn remove_desktop(&self, desktop_id: DesktopId) {
        self.dispatch(SessionAction::RemoveDesktop { desktop_id });
    }

    pub fn set_current_desktop(&self, desktop_id: DesktopId) {
        self.dispatch(SessionAction::SetCurrentDesktop { desktop_id });
    }

    pub fn update_app_state(&self, app_id: impl Into<AppId>, partial: Value) {
        self.dispatch(SessionAction::UpdateAppState {
            app_id: app_id.into(),
            partial,
        });
    }

    fn next_placement(&self) -> WindowPosition {
        let mut rng = self.inner.placement_rng.borrow_mut();
        let config = &self.inner.config;
        WindowPosition {
            x: sample_range(&mut rng, config.placement_x),
            y: sample_range(&mut rng, config.placement_y),
        }
    }
}

fn sample_range(rng: &mut SmallRng, (start, end): (f64, f64)) -> f64 {
    if end > start {
        rng.gen_range(start..end)
    } else {
        start
    }
}
