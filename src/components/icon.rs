//! Sidebar icon lookup component.
//!
//! Pure mapping from a symbolic screen name to a glyph plus a
//! deterministic `data-testid`. Unrecognized names fall back to the
//! default icon; there is no failure mode.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Deterministic test identifier for a symbolic screen name.
pub fn icon_test_id(name: &str) -> &'static str {
    match name {
        "My Organizations" => "Icon-Component-MyOrganizationsIcon",
        "Dashboard" => "Icon-Component-DashboardIcon",
        "People" => "Icon-Component-PeopleIcon",
        "Events" => "Icon-Component-EventsIcon",
        "Action Items" => "Icon-Component-ActionItemIcon",
        "Posts" => "Icon-Component-PostsIcon",
        "Block/Unblock" => "Block/Icon-Component-UnblockIcon",
        "Plugins" => "Icon-Component-PluginsIcon",
        "Settings" => "Icon-Component-SettingsIcon",
        "List Event Registrants" => "Icon-Component-List-Event-Registrants",
        "Check In Registrants" => "Icon-Component-Check-In-Registrants",
        "Event Stats" => "Icon-Component-Event-Stats",
        "Advertisement" => "Icon-Component-Advertisement",
        _ => "Icon-Component-DefaultIcon",
    }
}

/// Glyph shown for a symbolic screen name.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "My Organizations" => "🏢",
        "Dashboard" => "📊",
        "People" => "👥",
        "Events" => "📅",
        "Action Items" => "☑",
        "Posts" => "📰",
        "Block/Unblock" => "🚫",
        "Plugins" => "🧩",
        "Settings" => "⚙",
        "List Event Registrants" => "📋",
        "Check In Registrants" => "🎫",
        "Event Stats" => "📈",
        "Advertisement" => "📣",
        _ => "❓",
    }
}

/// Icon for a sidebar/screen entry, tagged for lookup in tests.
#[component]
pub fn IconComponent(name: String) -> impl IntoView {
    let test_id = icon_test_id(&name);
    let glyph = icon_glyph(&name);
    view! {
        <span class="icon" data-testid=test_id aria-hidden="true">
            {glyph}
        </span>
    }
}
