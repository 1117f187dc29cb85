use leptos::*;

use super::use_desktop_runtime;
use crate::icons::{IconName, IconSize, ShellIcon};

const MINUTE_MS: u64 = 60_000;
const MINUTES_PER_DAY: u64 = 1_440;
const MINUTES_PER_MONTH: u64 = 43_200;
const MINUTES_PER_YEAR: u64 = 525_600;

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human age of a notification, e.g. `"5 minutes ago"`.
///
/// Timestamps in the future read as just now.
pub fn format_relative_age(now_ms: u64, timestamp_ms: u64) -> String {
    let elapsed_ms = now_ms.saturating_sub(timestamp_ms);
    let minutes = (elapsed_ms + MINUTE_MS / 2) / MINUTE_MS;

    let distance = match minutes {
        0 => return "less than a minute ago".to_string(),
        1..=44 => plural(minutes, "minute"),
        45..=89 => "about 1 hour".to_string(),
        90..=1_439 => format!("about {}", plural((minutes + 30) / 60, "hour")),
        1_440..=2_519 => "1 day".to_string(),
        2_520..=43_199 => plural((minutes + MINUTES_PER_DAY / 2) / MINUTES_PER_DAY, "day"),
        43_200..=86_399 => format!(
            "about {}",
            plural((minutes + MINUTES_PER_MONTH / 2) / MINUTES_PER_MONTH, "month")
        ),
        86_400..=525_599 => plural(minutes / MINUTES_PER_MONTH, "month"),
        _ => format!("about {}", plural(minutes / MINUTES_PER_YEAR, "year")),
    };
    format!("{distance} ago")
}

/// Tray badge text; `None` hides the badge.
pub fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[component]
pub(super) fn NotificationCenter(now_ms: Signal<u64>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let notifications = create_memo(move |_| runtime.state.get().notifications);
    let has_notifications = move || !notifications.get().is_empty();

    view! {
        <section class="notification-center" role="region" aria-label="Notifications">
            <header class="notification-center-header">
                <h3>"Notifications"</h3>
                <Show when=has_notifications fallback=|| ()>
                    <button
                        type="button"
                        class="notification-clear-all"
                        on:click=move |_| runtime.store().clear_notifications()
                    >
                        "Clear all"
                    </button>
                </Show>
            </header>
            <Show
                when=has_notifications
                fallback=|| view! { <p class="notification-empty">"No new notifications"</p> }
            >
                <ul class="notification-list">
                    <For
                        each=move || notifications.get()
                        key=|notification| notification.id
                        let:notification
                    >
                        {
                            let notification_id = notification.id;
                            let timestamp_ms = notification.timestamp_ms;
                            view! {
                                <li class="notification-item">
                                    <span class="notification-icon" aria-hidden="true">
                                        <ShellIcon
                                            icon=IconName::from_icon_id(&notification.icon_id)
                                            size=IconSize::Sm
                                        />
                                    </span>
                                    <div class="notification-text">
                                        <p class="notification-title">{notification.title.clone()}</p>
                                        <p class="notification-message">{notification.message.clone()}</p>
                                        <p class="notification-age">
                                            {move || format_relative_age(now_ms.get(), timestamp_ms)}
                                        </p>
                                    </div>
                                    <button
                                        type="button"
                                        class="notification-dismiss"
                                        aria-label="Dismiss notification"
                                        on:click=move |_| {
                                            runtime.store().remove_notification(notification_id)
                                        }
                                    >
                                        <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    fn age(elapsed_ms: u64) -> String {
        format_relative_age(NOW, NOW - elapsed_ms)
    }

    #[test]
    fn recent_notifications_read_as_minutes() {
        assert_eq!(age(0), "less than a minute ago");
        assert_eq!(age(29_000), "less than a minute ago");
        assert_eq!(age(45_000), "1 minute ago");
        assert_eq!(age(5 * MINUTE_MS), "5 minutes ago");
        assert_eq!(age(44 * MINUTE_MS), "44 minutes ago");
    }

    #[test]
    fn older_notifications_read_as_hours_and_days() {
        assert_eq!(age(50 * MINUTE_MS), "about 1 hour ago");
        assert_eq!(age(3 * 60 * MINUTE_MS), "about 3 hours ago");
        assert_eq!(age(30 * 60 * MINUTE_MS), "1 day ago");
        assert_eq!(age(4 * MINUTES_PER_DAY * MINUTE_MS), "4 days ago");
        assert_eq!(age(40 * MINUTES_PER_DAY * MINUTE_MS), "about 1 month ago");
        assert_eq!(age(800 * MINUTES_PER_DAY * MINUTE_MS), "about 2 years ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_relative_age(NOW, NOW + 90_000), "less than a minute ago");
    }

    #[test]
    fn badge_hides_when_empty_and_caps_large_counts() {
        assert_eq!(unread_badge(0), None);
        assert_eq!(unread_badge(3), Some("3".to_string()));
        assert_eq!(unread_badge(120), Some("99+".to_string()));
    }
}
