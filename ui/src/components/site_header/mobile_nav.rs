use api::nav_item::NavItem;
use dioxus::prelude::*;

use super::NavLink;

/// The collapsible navigation panel of the mobile header.
///
/// Always mounted so it can slide in and out; `is_toggled` decides whether it
/// is showing. Following a link collapses the panel again.
#[component]
pub fn MobileNav(
    nav_items: Vec<NavItem>,
    is_toggled: bool,
    toggle_mobile_nav: EventHandler<()>,
    nav_height: u32,
    children: Element,
) -> Element {
    let visibility = if is_toggled {
        "visibility: visible; transform: translate3d(0, 0, 0);"
    } else {
        "visibility: hidden; transform: translate3d(0, -100%, 0);"
    };

    rsx! {
        if is_toggled {
            div {
                class: "mobile-nav-backdrop",
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background-color: rgba(0, 0, 0, 0.4);",
                onclick: move |_| toggle_mobile_nav.call(()),
            }
        }
        nav {
            class: if is_toggled { "mobile-nav mobile-nav-open" } else { "mobile-nav" },
            "aria-hidden": if is_toggled { "false" } else { "true" },
            style: "position: fixed; top: 0; left: 0; right: 0; height: {nav_height}px; padding: 30px; background-color: white; transition: transform 0.5s, visibility 0s; {visibility}",
            ul {
                style: "list-style: none; padding: 0; margin: 0 0 30px;",
                for item in nav_items {
                    NavLink {
                        key: "{item.id}",
                        item: item.clone(),
                        on_navigate: move |_| toggle_mobile_nav.call(()),
                    }
                }
            }
            {children}
        }
    }
}
