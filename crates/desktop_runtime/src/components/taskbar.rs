use std::time::Duration;

use leptos::*;

use super::{
    desktop_switcher::DesktopSwitcher,
    notification_center::{unread_badge, NotificationCenter},
    start_menu::{launch_app, StartMenu, START_MENU_ID},
    use_desktop_runtime,
};
use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
    window_manager::taskbar_entries,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn date_label(self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_open = create_rw_signal(false);
    let notifications_open = create_rw_signal(false);
    let clock = create_rw_signal(ClockReading::now());
    let now_ms = create_rw_signal(platform_host::unix_time_ms_now());
    let entries = create_memo(move |_| taskbar_entries(&state.get()));
    let badge = create_memo(move |_| unread_badge(state.get().notifications.len()));

    if let Ok(interval) = set_interval_with_handle(
        move || {
            clock.set(ClockReading::now());
            now_ms.set(platform_host::unix_time_ms_now());
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let close_start_menu = Callback::new(move |_| start_open.set(false));

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-left">
                <button
                    type="button"
                    class="taskbar-start-button"
                    aria-label="Start"
                    aria-haspopup="menu"
                    aria-controls=START_MENU_ID
                    aria-expanded=move || start_open.get().to_string()
                    on:click=move |_| {
                        notifications_open.set(false);
                        start_open.update(|open| *open = !*open);
                    }
                >
                    <ShellIcon icon=IconName::Launcher size=IconSize::Md />
                </button>
                <Show when=move || start_open.get() fallback=|| ()>
                    <StartMenu on_close=close_start_menu />
                </Show>

                <div class="taskbar-pins" role="group" aria-label="Pinned apps">
                    {apps::pinned_apps()
                        .into_iter()
                        .map(|app| {
                            let app_id = app.app_id.clone();
                            view! {
                                <button
                                    type="button"
                                    class="taskbar-pin"
                                    title=app.title.clone()
                                    aria-label=format!("Open {}", app.title)
                                    on:click=move |_| launch_app(runtime, &app_id)
                                >
                                    <ShellIcon icon=IconName::from_icon_id(&app.icon_id) size=IconSize::Md />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="taskbar-windows" role="group" aria-label="Open windows">
                    <For
                        each=move || entries.get()
                        key=|entry| (entry.window_id.0, entry.active, entry.running)
                        let:entry
                    >
                        {
                            let window_id = entry.window_id;
                            view! {
                                <button
                                    type="button"
                                    class="taskbar-window"
                                    class:active=entry.active
                                    class:running=entry.running
                                    title=entry.title.clone()
                                    aria-pressed=entry.active.to_string()
                                    on:click=move |_| runtime.store().toggle_taskbar_window(window_id)
                                >
                                    <ShellIcon icon=IconName::from_icon_id(&entry.icon_id) size=IconSize::Md />
                                    <span class="taskbar-window-title">{entry.title.clone()}</span>
                                    <span class="taskbar-running-indicator" aria-hidden="true"></span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </div>

            <div class="taskbar-right">
                <DesktopSwitcher />
                <div class="taskbar-clock" aria-live="off">
                    <div>{move || clock.get().time_label()}</div>
                    <div class="taskbar-date">{move || clock.get().date_label()}</div>
                </div>
                <button
                    type="button"
                    class="taskbar-tray-button"
                    aria-label="Notifications"
                    aria-expanded=move || notifications_open.get().to_string()
                    on:click=move |_| {
                        start_open.set(false);
                        notifications_open.update(|open| *open = !*open);
                    }
                >
                    <ShellIcon icon=IconName::Bell size=IconSize::Md />
                    {move || badge.get().map(|count| view! { <span class="taskbar-badge">{count}</span> })}
                </button>
                <Show when=move || notifications_open.get() fallback=|| ()>
                    <div class="taskbar-popover">
                        <NotificationCenter now_ms=now_ms.into() />
                    </div>
                </Show>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_labels_are_zero_padded() {
        let reading = ClockReading {
            year: 2024,
            month: 3,
            day: 7,
            hour: 9,
            minute: 5,
        };
        assert_eq!(reading.time_label(), "09:05");
        assert_eq!(reading.date_label(), "2024/03/07");
    }
}
