use leptos::*;

use super::use_desktop_runtime;
use crate::{
    icons::{IconName, IconSize, ShellIcon},
    model::Desktop,
};

/// Display label for a desktop; `os.desktop.<n>` keys read as `Desktop <n>`.
pub fn desktop_label(desktop: &Desktop) -> String {
    match desktop.name.strip_prefix("os.desktop.") {
        Some(number) if !number.is_empty() => format!("Desktop {number}"),
        _ => desktop.name.clone(),
    }
}

#[component]
pub(super) fn DesktopSwitcher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let desktops = create_memo(move |_| {
        let state = runtime.state.get();
        (state.desktops, state.current_desktop_id)
    });

    view! {
        <div class="desktop-switcher" role="group" aria-label="Desktops">
            {move || {
                let (desktops, current) = desktops.get();
                let removable = desktops.len() > 1;
                desktops
                    .into_iter()
                    .map(|desktop| {
                        let desktop_id = desktop.id;
                        let label = desktop_label(&desktop);
                        let remove_label = format!("Remove {label}");
                        view! {
                            <div class="desktop-switcher-item" class:current=desktop_id == current>
                                <button
                                    type="button"
                                    class="desktop-switcher-button"
                                    aria-pressed=(desktop_id == current).to_string()
                                    on:click=move |_| runtime.store().set_current_desktop(desktop_id)
                                >
                                    {label}
                                </button>
                                {removable
                                    .then(|| {
                                        view! {
                                            <button
                                                type="button"
                                                class="desktop-switcher-remove"
                                                aria-label=remove_label
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    runtime.store().remove_desktop(desktop_id);
                                                }
                                            >
                                                <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                                            </button>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="desktop-switcher-add"
                aria-label="Add desktop"
                on:click=move |_| runtime.store().add_desktop()
            >
                <ShellIcon icon=IconName::Add size=IconSize::Sm />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DesktopId;

    #[test]
    fn numbered_desktops_get_readable_labels() {
        assert_eq!(desktop_label(&Desktop::numbered(DesktopId(3))), "Desktop 3");
    }

    #[test]
    fn custom_names_are_shown_verbatim() {
        let desktop = Desktop {
            id: DesktopId(2),
            name: "Depot planning".to_string(),
        };
        assert_eq!(desktop_label(&desktop), "Depot planning");
    }
}
