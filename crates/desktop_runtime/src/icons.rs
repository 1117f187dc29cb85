//! Shell icon catalog.
//!
//! Icons are stroke-style 24px SVG bodies. App records carry an `icon_id` string; the shell maps
//! it to an [`IconName`] here and falls back to a generic window glyph for ids it does not know.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    LayoutDashboard,
    Map,
    ShieldCheck,
    CreditCard,
    Store,
    GraduationCap,
    Bot,
    Settings,
    /// Fallback for unknown app icon ids.
    AppGeneric,
    Launcher,
    Bell,
    Add,
    WindowMinimize,
    WindowMaximize,
    WindowRestore,
    Dismiss,
}

impl IconName {
    /// Maps a stored `icon_id` to an icon; unknown ids render the generic app glyph.
    pub fn from_icon_id(icon_id: &str) -> Self {
        match icon_id {
            "layout-dashboard" => Self::LayoutDashboard,
            "map" => Self::Map,
            "shield-check" => Self::ShieldCheck,
            "credit-card" => Self::CreditCard,
            "store" => Self::Store,
            "graduation-cap" => Self::GraduationCap,
            "bot" => Self::Bot,
            "settings" => Self::Settings,
            _ => Self::AppGeneric,
        }
    }

    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "layout-dashboard",
            Self::Map => "map",
            Self::ShieldCheck => "shield-check",
            Self::CreditCard => "credit-card",
            Self::Store => "store",
            Self::GraduationCap => "graduation-cap",
            Self::Bot => "bot",
            Self::Settings => "settings",
            Self::AppGeneric => "app-generic",
            Self::Launcher => "launcher",
            Self::Bell => "bell",
            Self::Add => "add",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::LayoutDashboard => {
                r#"<rect width="7" height="9" x="3" y="3" rx="1"/><rect width="7" height="5" x="14" y="3" rx="1"/><rect width="7" height="9" x="14" y="12" rx="1"/><rect width="7" height="5" x="3" y="16" rx="1"/>"#
            }
            Self::Map => {
                r#"<path d="M14.1 5.55a2 2 0 0 0 1.8 0l3.65-1.83A1 1 0 0 1 21 4.62v12.76a1 1 0 0 1-.55.9l-4.56 2.27a2 2 0 0 1-1.78 0l-4.22-2.1a2 2 0 0 0-1.78 0l-3.66 1.83A1 1 0 0 1 3 19.38V6.62a1 1 0 0 1 .55-.9l4.56-2.27a2 2 0 0 1 1.78 0z"/><path d="M15 5.76v15"/><path d="M9 3.24v15"/>"#
            }
            Self::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            Self::CreditCard => {
                r#"<rect width="20" height="14" x="2" y="5" rx="2"/><path d="M2 10h20"/>"#
            }
            Self::Store => {
                r#"<path d="m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"/><path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"/><path d="M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"/><path d="M2 7h20"/><path d="M22 7v3a2 2 0 0 1-2 2 2.7 2.7 0 0 1-2-1 2.7 2.7 0 0 1-2 1 2.7 2.7 0 0 1-2-1 2.7 2.7 0 0 1-2 1 2.7 2.7 0 0 1-2-1 2.7 2.7 0 0 1-2 1 2.7 2.7 0 0 1-2-1 2.7 2.7 0 0 1-2 1 2 2 0 0 1-2-2V7"/>"#
            }
            Self::GraduationCap => {
                r#"<path d="M21.42 10.92a1 1 0 0 0-.02-1.84L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.83l8.57 3.91a2 2 0 0 0 1.66 0z"/><path d="M22 10v6"/><path d="M6 12.5V16a6 3 0 0 0 12 0v-3.5"/>"#
            }
            Self::Bot => {
                r#"<path d="M12 8V4H8"/><rect width="16" height="12" x="4" y="8" rx="2"/><path d="M2 14h2"/><path d="M20 14h2"/><path d="M15 13v2"/><path d="M9 13v2"/>"#
            }
            Self::Settings => {
                r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::AppGeneric => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M2 8h20"/><path d="M6 4v4"/><path d="M10 4v4"/>"#
            }
            Self::Launcher => {
                r#"<rect width="7" height="7" x="3" y="3" rx="1"/><rect width="7" height="7" x="14" y="3" rx="1"/><rect width="7" height="7" x="14" y="14" rx="1"/><rect width="7" height="7" x="3" y="14" rx="1"/>"#
            }
            Self::Bell => {
                r#"<path d="M10.27 21a2 2 0 0 0 3.46 0"/><path d="M3.26 15.33A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.67C19.41 13.96 18 12.5 18 8A6 6 0 0 0 6 8c0 4.5-1.41 5.96-2.74 7.33"/>"#
            }
            Self::Add => r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#,
            Self::WindowMinimize => r#"<path d="M5 12h14"/>"#,
            Self::WindowMaximize => r#"<rect width="16" height="16" x="4" y="4" rx="2"/>"#,
            Self::WindowRestore => {
                r#"<rect width="13" height="13" x="8" y="8" rx="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#
            }
            Self::Dismiss => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// Window chrome controls.
    Xs,
    #[default]
    Sm,
    Md,
    /// Start menu tiles.
    Lg,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 28,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders one catalog icon as inline SVG.
pub fn ShellIcon(
    icon: IconName,
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_icon_ids_round_trip_through_tokens() {
        for id in [
            "layout-dashboard",
            "map",
            "shield-check",
            "credit-card",
            "store",
            "graduation-cap",
            "bot",
            "settings",
        ] {
            assert_eq!(IconName::from_icon_id(id).token(), id);
        }
    }

    #[test]
    fn unknown_icon_ids_use_generic_glyph() {
        assert_eq!(IconName::from_icon_id("forklift"), IconName::AppGeneric);
        assert_eq!(IconName::from_icon_id(""), IconName::AppGeneric);
    }
}
