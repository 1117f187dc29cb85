//! Placeholder business apps. They hold no backend connection and only talk to the session
//! through the runtime context: app state blobs, notifications and the wallpaper.

use leptos::*;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    model::{AppId, NotificationDraft, SessionState},
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

/// Reads `field` from the app's state blob, falling back to the type's default.
fn app_state_field<T: DeserializeOwned + Default>(
    state: &SessionState,
    app_id: &str,
    field: &str,
) -> T {
    state
        .app_state(&AppId::from(app_id))
        .and_then(|blob| blob.get(field))
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

fn notify(runtime: DesktopRuntimeContext, app_id: &str, icon_id: &str, title: &str, message: String) {
    runtime.store().add_notification(NotificationDraft {
        app_id: AppId::from(app_id),
        icon_id: icon_id.to_string(),
        title: title.to_string(),
        message,
    });
}

#[component]
fn AppHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>{title}</h1>
            <p class="app-subtitle">{subtitle}</p>
        </header>
    }
}

pub(super) fn mount_dashboard() -> View {
    view! { <DashboardApp /> }.into_view()
}

pub(super) fn mount_operations() -> View {
    view! { <OperationsApp /> }.into_view()
}

pub(super) fn mount_compliance() -> View {
    view! { <ComplianceApp /> }.into_view()
}

pub(super) fn mount_payments() -> View {
    view! { <PaymentsApp /> }.into_view()
}

pub(super) fn mount_marketplace() -> View {
    view! { <MarketplaceApp /> }.into_view()
}

pub(super) fn mount_training() -> View {
    view! { <TrainingApp /> }.into_view()
}

pub(super) fn mount_assistant() -> View {
    view! { <AssistantApp /> }.into_view()
}

pub(super) fn mount_settings() -> View {
    view! { <SettingsApp /> }.into_view()
}

const KPIS: [(&str, &str, &str); 3] = [
    ("Waste Collected (Tons)", "1,280", "+12.5%"),
    ("Routes Completed", "312", "+5.2%"),
    ("Recycling Rate", "68%", "+2.1%"),
];

const COLLECTION_TREND: [(&str, u32); 6] = [
    ("Jan", 400),
    ("Feb", 300),
    ("Mar", 500),
    ("Apr", 450),
    ("May", 600),
    ("Jun", 580),
];

#[component]
fn DashboardApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let peak = COLLECTION_TREND.iter().map(|(_, tons)| *tons).max().unwrap_or(1);

    view! {
        <div class="app-shell app-dashboard">
            <AppHeader title="Dashboard" subtitle="Collection performance at a glance." />
            <div class="app-kpi-grid">
                {KPIS
                    .iter()
                    .map(|(title, value, change)| {
                        view! {
                            <div class="app-card app-kpi">
                                <span class="app-kpi-title">{*title}</span>
                                <strong class="app-kpi-value">{*value}</strong>
                                <span class="app-kpi-change">{format!("{change} from last month")}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="app-card">
                <h2>"Collection Trend"</h2>
                <ul class="app-bar-chart">
                    {COLLECTION_TREND
                        .iter()
                        .map(|(month, tons)| {
                            let width = format!("width:{}%;", tons * 100 / peak);
                            view! {
                                <li>
                                    <span class="app-bar-label">{*month}</span>
                                    <span class="app-bar" style=width></span>
                                    <span class="app-bar-value">{format!("{tons} t")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <button
                type="button"
                class="app-action"
                on:click=move |_| {
                    notify(
                        runtime,
                        "dashboard",
                        "layout-dashboard",
                        "Report published",
                        "Monthly collection report shared with the team.".to_string(),
                    )
                }
            >
                "Publish report"
            </button>
        </div>
    }
}

const ROUTES: [(&str, &str, &str, u8); 3] = [
    ("R001", "Sandton", "In Progress", 65),
    ("R002", "Midrand", "Completed", 100),
    ("R003", "Soweto", "Pending", 0),
];

#[component]
fn OperationsApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dispatched = Signal::derive(move || {
        app_state_field::<Vec<String>>(&runtime.state.get(), "operations", "dispatched")
    });

    let dispatch_route = move |route_id: &'static str, area: &'static str| {
        let mut routes = dispatched.get_untracked();
        if routes.iter().any(|id| id == route_id) {
            return;
        }
        routes.push(route_id.to_string());
        runtime
            .store()
            .update_app_state("operations", json!({ "dispatched": routes }));
        notify(
            runtime,
            "operations",
            "map",
            "Route dispatched",
            format!("{route_id} ({area}) is on the road."),
        );
    };

    view! {
        <div class="app-shell app-operations">
            <AppHeader title="Operations" subtitle="Live routes and fleet dispatch." />
            <table class="app-table">
                <thead>
                    <tr>
                        <th>"Route"</th>
                        <th>"Area"</th>
                        <th>"Status"</th>
                        <th>"Progress"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {ROUTES
                        .iter()
                        .map(|&(route_id, area, status, progress)| {
                            let is_dispatched = move || {
                                dispatched.get().iter().any(|id| id == route_id)
                            };
                            view! {
                                <tr>
                                    <td>{route_id}</td>
                                    <td>{area}</td>
                                    <td>
                                        {move || if is_dispatched() { "Dispatched" } else { status }}
                                    </td>
                                    <td>
                                        <progress class="app-progress" max="100" value=progress></progress>
                                    </td>
                                    <td>
                                        <button
                                            type="button"
                                            class="app-action"
                                            disabled=move || status != "Pending" || is_dispatched()
                                            on:click=move |_| dispatch_route(route_id, area)
                                        >
                                            "Dispatch"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

const COMPLIANCE_ITEMS: [(&str, &str, bool); 5] = [
    ("c1", "Waste Carrier License up-to-date", true),
    ("c2", "Vehicle maintenance logs complete", true),
    ("c3", "Driver training records verified", false),
    ("c4", "Waste transfer notes correctly filed", true),
    ("c5", "Health & Safety audit passed", false),
];

#[component]
fn ComplianceApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let overrides = Signal::derive(move || {
        app_state_field::<serde_json::Map<String, serde_json::Value>>(
            &runtime.state.get(),
            "compliance",
            "checked",
        )
    });
    let is_checked = move |id: &str, default: bool| {
        overrides
            .get()
            .get(id)
            .and_then(|value| value.as_bool())
            .unwrap_or(default)
    };

    let toggle = move |id: &'static str, checked: bool| {
        let mut next = overrides.get_untracked();
        next.insert(id.to_string(), json!(checked));
        runtime
            .store()
            .update_app_state("compliance", json!({ "checked": next }));
    };

    view! {
        <div class="app-shell app-compliance">
            <AppHeader title="Compliance Center" subtitle="Manage and track regulatory compliance." />
            <ul class="app-checklist">
                {COMPLIANCE_ITEMS
                    .iter()
                    .map(|&(id, label, default)| {
                        view! {
                            <li>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || is_checked(id, default)
                                        on:change=move |ev| toggle(id, event_target_checked(&ev))
                                    />
                                    {label}
                                </label>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="app-statusbar">
                {move || {
                    let done = COMPLIANCE_ITEMS
                        .iter()
                        .filter(|(id, _, default)| is_checked(id, *default))
                        .count();
                    format!("{done} of {} checks complete", COMPLIANCE_ITEMS.len())
                }}
            </p>
        </div>
    }
}

const TRANSACTIONS: [(&str, &str, &str, &str); 4] = [
    ("T001", "2023-10-26", "R 1,500.00", "Completed"),
    ("T002", "2023-10-25", "R 850.00", "Completed"),
    ("T003", "2023-10-24", "R 2,200.00", "Pending"),
    ("T004", "2023-10-23", "R 500.00", "Failed"),
];

#[component]
fn PaymentsApp() -> impl IntoView {
    view! {
        <div class="app-shell app-payments">
            <AppHeader title="Payments" subtitle="Handle cashless transactions securely." />
            <table class="app-table">
                <thead>
                    <tr>
                        <th>"Transaction"</th>
                        <th>"Date"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {TRANSACTIONS
                        .iter()
                        .map(|&(id, date, amount, status)| {
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{date}</td>
                                    <td>{amount}</td>
                                    <td class=format!("app-status app-status-{}", status.to_lowercase())>
                                        {status}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

const LISTINGS: [(&str, &str, &str); 4] = [
    ("Refurbished Laptops (x10)", "R 15,000", "E-Waste"),
    ("Scrap Metal Bundle", "R 5,000", "Metals"),
    ("Used Office Phones", "R 2,500", "E-Waste"),
    ("Recycled Plastic Pellets", "R 8,000", "Plastics"),
];

#[component]
fn MarketplaceApp() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="app-shell app-marketplace">
            <AppHeader
                title="e-Waste Marketplace"
                subtitle="Connecting buyers and sellers in the circular economy."
            />
            <div class="app-listing-grid">
                {LISTINGS
                    .iter()
                    .map(|&(name, price, category)| {
                        view! {
                            <div class="app-card app-listing">
                                <span class="app-badge">{category}</span>
                                <strong>{name}</strong>
                                <span>{price}</span>
                                <button
                                    type="button"
                                    class="app-action"
                                    on:click=move |_| {
                                        notify(
                                            runtime,
                                            "marketplace",
                                            "store",
                                            "Offer sent",
                                            format!("Your offer on {name} was sent to the seller."),
                                        )
                                    }
                                >
                                    "Make offer"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

const COURSES: [(u32, &str, &str); 3] = [
    (1, "Safety in Waste Handling", "45 mins"),
    (2, "Introduction to e-Waste Sorting", "1 hour"),
    (3, "Using the SuiteWaste OS", "30 mins"),
];

#[component]
fn TrainingApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let completed = Signal::derive(move || {
        let mut done =
            app_state_field::<Vec<u32>>(&runtime.state.get(), "training", "completed");
        if done.is_empty() {
            done.push(1);
        }
        done
    });

    let complete = move |course_id: u32, title: &'static str| {
        let mut done = completed.get_untracked();
        if done.contains(&course_id) {
            return;
        }
        done.push(course_id);
        runtime
            .store()
            .update_app_state("training", json!({ "completed": done }));
        notify(
            runtime,
            "training",
            "graduation-cap",
            "Module completed",
            format!("You finished \"{title}\"."),
        );
    };

    view! {
        <div class="app-shell app-training">
            <AppHeader title="Training Hub" subtitle="Enhance your skills with our interactive modules." />
            <ul class="app-course-list">
                {COURSES
                    .iter()
                    .map(|&(course_id, title, duration)| {
                        let done = move || completed.get().contains(&course_id);
                        view! {
                            <li class="app-card">
                                <strong>{title}</strong>
                                <span>{duration}</span>
                                <button
                                    type="button"
                                    class="app-action"
                                    disabled=done
                                    on:click=move |_| complete(course_id, title)
                                >
                                    {move || if done() { "Completed" } else { "Start" }}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
struct ChatMessage {
    from_user: bool,
    text: String,
}

const ASSISTANT_OFFLINE_REPLY: &str =
    "The assistant is not connected in this workspace. Your question has been noted.";

#[component]
fn AssistantApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let draft = create_rw_signal(String::new());
    let messages = Signal::derive(move || {
        app_state_field::<Vec<ChatMessage>>(&runtime.state.get(), "assistant", "messages")
    });

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        let mut history = messages.get_untracked();
        history.push(ChatMessage {
            from_user: true,
            text,
        });
        history.push(ChatMessage {
            from_user: false,
            text: ASSISTANT_OFFLINE_REPLY.to_string(),
        });
        runtime
            .store()
            .update_app_state("assistant", json!({ "messages": history }));
        draft.set(String::new());
    };

    view! {
        <div class="app-shell app-assistant">
            <ul class="app-chat-log" aria-live="polite">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| {
                            let class = if message.from_user {
                                "app-chat-message from-user"
                            } else {
                                "app-chat-message from-assistant"
                            };
                            view! { <li class=class>{message.text}</li> }
                        })
                        .collect_view()
                }}
            </ul>
            <form
                class="app-chat-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <textarea
                    class="app-field"
                    placeholder="Ask the assistant..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="app-action" disabled=move || draft.get().trim().is_empty()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

const WALLPAPERS: [(&str, &str); 4] = [
    ("Generated", ""),
    ("Default", "/wallpapers/default.jpg"),
    ("Green Field", "/wallpapers/green.jpg"),
    ("Earthy Tones", "/wallpapers/earth.jpg"),
];

#[component]
fn SettingsApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let current = Signal::derive(move || runtime.state.get().wallpaper);

    view! {
        <div class="app-shell app-settings">
            <AppHeader title="Settings" subtitle="Customize your SuiteWaste OS experience." />
            <fieldset class="app-wallpaper-picker">
                <legend>"Desktop Wallpaper"</legend>
                {WALLPAPERS
                    .iter()
                    .map(|&(name, url)| {
                        view! {
                            <button
                                type="button"
                                class="app-wallpaper-option"
                                class:selected=move || current.get() == url
                                aria-pressed=move || (current.get() == url).to_string()
                                on:click=move |_| runtime.store().set_wallpaper(url)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </fieldset>
        </div>
    }
}
