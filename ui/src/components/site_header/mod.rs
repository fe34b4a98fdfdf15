//! The staking site header.
//!
//! Desktop widths get the inline nav list and wallet submenu. Narrower
//! viewports get a wallet status dot, a hamburger and a slide-down panel. The
//! mobile-nav flag is owned by the parent; every change to it goes through
//! `toggle_mobile_nav`.

mod hamburger;
mod mobile_nav;
mod sub_menu;

use api::nav_item::staking_nav_items;
use api::nav_item::NavItem;
use api::provider_state::ProviderState;
use api::website_paths::WebsitePaths;
use dioxus::prelude::*;

use crate::app_state::use_site_prefs;
use crate::components::link::Link;
use crate::hooks::use_scroll_pin::use_scroll_pin;
use crate::hooks::use_viewport_width::use_viewport_width;
use crate::layout::Layout;
use crate::layout::HEADER_DESKTOP_MIN_WIDTH;
use hamburger::Hamburger;
use mobile_nav::MobileNav;
use sub_menu::SubMenu;

pub const CONNECTED_COLOR: &str = "#00AE99";
pub const DISCONNECTED_COLOR: &str = "#E71D36";

/// Mobile panel height. A connected wallet adds a row to the submenu.
pub fn mobile_nav_height(is_wallet_connected: bool) -> u32 {
    if is_wallet_connected {
        426
    } else {
        365
    }
}

/// Runs `collapse` when the mobile nav is open, then `action`.
///
/// Opening the wallet dialog or logging out must never leave the mobile menu
/// expanded underneath.
pub fn collapse_nav_then(is_nav_toggled: bool, collapse: impl FnOnce(), action: impl FnOnce()) {
    if is_nav_toggled {
        collapse();
    }
    action();
}

/// The header's wallet actions. Each one collapses an open mobile nav before
/// handing off to the parent.
#[derive(Clone, Copy, PartialEq)]
pub struct WalletActions {
    pub is_nav_toggled: bool,
    pub toggle_mobile_nav: EventHandler<()>,
    pub on_open_connect_wallet_dialog: EventHandler<()>,
    pub on_logout_wallet: EventHandler<()>,
}

impl WalletActions {
    pub fn collapse_nav(&self) {
        collapse_nav_then(self.is_nav_toggled, || self.toggle_mobile_nav.call(()), || {})
    }

    pub fn open_wallet_dialog(&self) {
        collapse_nav_then(
            self.is_nav_toggled,
            || self.toggle_mobile_nav.call(()),
            || self.on_open_connect_wallet_dialog.call(()),
        )
    }

    pub fn logout_wallet(&self) {
        collapse_nav_then(
            self.is_nav_toggled,
            || self.toggle_mobile_nav.call(()),
            || self.on_logout_wallet.call(()),
        )
    }
}

pub fn wallet_indicator_style(is_connected: bool, is_nav_toggled: bool) -> String {
    let color = if is_connected {
        CONNECTED_COLOR
    } else {
        DISCONNECTED_COLOR
    };
    let opacity = if is_nav_toggled { 0 } else { 1 };
    format!(
        "width: 12px; height: 12px; border-radius: 50%; border: 1px solid #ffffff; \
         background-color: {color}; transition: opacity 0.25s ease-in; opacity: {opacity}; \
         position: absolute; top: -7px; right: -7px; z-index: 11;"
    )
}

#[component]
pub fn SiteHeader(
    #[props(default)] is_nav_toggled: bool,
    provider_state: ProviderState,
    toggle_mobile_nav: EventHandler<()>,
    on_open_connect_wallet_dialog: EventHandler<()>,
    on_logout_wallet: EventHandler<()>,
) -> Element {
    let prefs = use_site_prefs();
    let viewport_width = use_viewport_width(prefs.default_viewport_width);
    let layout = Layout::select(viewport_width(), HEADER_DESKTOP_MIN_WIDTH);

    let actions = WalletActions {
        is_nav_toggled,
        toggle_mobile_nav,
        on_open_connect_wallet_dialog,
        on_logout_wallet,
    };
    // Refreshed every render, so the scroll listener always sees the current flag.
    let on_unpin = use_callback(move |_: ()| actions.collapse_nav());

    let is_pinned = use_scroll_pin(
        prefs.header_down_tolerance,
        prefs.header_up_tolerance,
        on_unpin,
    );

    let is_wallet_connected = provider_state.is_wallet_connected();
    let indicator_style = wallet_indicator_style(is_wallet_connected, is_nav_toggled);
    let nav_items = staking_nav_items();
    let pin_style = if is_pinned() {
        "transform: translateY(0); transition: transform 0.2s ease-in-out;"
    } else {
        "transform: translateY(-100%); transition: transform 0.2s ease-in-out;"
    };

    rsx! {
        div {
            class: "headroom-wrapper",
            style: "position: relative; z-index: 2;",
            div {
                class: if is_pinned() { "headroom headroom--pinned" } else { "headroom headroom--unpinned" },
                style: "position: sticky; top: 0; {pin_style}",
                header {
                    class: if is_nav_toggled { "site-header nav-toggled" } else { "site-header" },
                    style: "padding: 30px; background-color: white;",
                    div {
                        class: "header-wrap",
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        div {
                            class: "logo-wrap",
                            style: "display: flex; align-items: center;",
                            Link {
                                to: WebsitePaths::Home.path(),
                                Logo {}
                            }
                            div {
                                class: "docs-logo-wrap",
                                style: "position: relative; display: flex; align-items: center; color: rgba(0, 0, 0, 0.5); margin-left: 0.875rem;",
                                "/"
                                Link {
                                    to: WebsitePaths::Staking.path(),
                                    class: "docs-logo-link".to_string(),
                                    span { style: "margin-left: 0.625rem;", "ZRX" }
                                }
                            }
                        }

                        match layout {
                            Layout::Desktop => rsx! {
                                ul {
                                    class: "nav-links",
                                    style: "display: flex; align-items: center; justify-content: space-between; margin: 0;",
                                    for item in nav_items {
                                        NavLink { key: "navlink-{item.id}", item: item.clone() }
                                    }
                                }
                                SubMenu {
                                    provider_state: provider_state.clone(),
                                    actions,
                                }
                            },
                            Layout::Mobile => rsx! {
                                div {
                                    style: "position: relative;",
                                    div {
                                        class: "wallet-connected-indicator",
                                        style: "{indicator_style}",
                                    }
                                    Hamburger {
                                        is_open: is_nav_toggled,
                                        on_click: toggle_mobile_nav,
                                    }
                                }
                                MobileNav {
                                    nav_items: nav_items.to_vec(),
                                    is_toggled: is_nav_toggled,
                                    toggle_mobile_nav,
                                    nav_height: mobile_nav_height(is_wallet_connected),
                                    SubMenu {
                                        provider_state: provider_state.clone(),
                                        actions,
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// One header nav entry. Items without a url render a placeholder anchor.
#[component]
pub fn NavLink(item: NavItem, #[props(optional)] on_navigate: Option<EventHandler<MouseEvent>>) -> Element {
    let link_style = "display: block; opacity: 0.5; transition: opacity 0.35s; padding: 15px 0; margin: 0 30px;";

    rsx! {
        li {
            style: "position: relative; list-style: none;",
            if item.is_placeholder() {
                a {
                    href: "#",
                    style: "{link_style} cursor: default;",
                    onclick: move |evt| evt.prevent_default(),
                    "{item.text}"
                }
            } else {
                Link {
                    to: item.href(),
                    class: "nav-link".to_string(),
                    onclick: move |evt| {
                        if let Some(handler) = &on_navigate {
                            handler.call(evt);
                        }
                    },
                    span { style: "{link_style}", "{item.text}" }
                }
            }
        }
    }
}

#[component]
fn Logo() -> Element {
    rsx! {
        span {
            class: "logo",
            style: "font-weight: 700; font-size: 1.5rem; color: #000000;",
            "0x"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use api::prefs::site_prefs::SitePrefs;
    use api::provider_state::AccountState;
    use std::cell::RefCell;

    #[test]
    fn nav_height_grows_when_connected() {
        assert_eq!(mobile_nav_height(true), 426);
        assert_eq!(mobile_nav_height(false), 365);
    }

    #[test]
    fn indicator_color_follows_connection() {
        let connected = wallet_indicator_style(true, false);
        assert!(connected.contains("background-color: #00AE99"));
        assert!(connected.contains("opacity: 1"));

        let disconnected = wallet_indicator_style(false, false);
        assert!(disconnected.contains("background-color: #E71D36"));
    }

    #[test]
    fn indicator_fades_while_nav_open() {
        assert!(wallet_indicator_style(true, true).contains("opacity: 0;"));
    }

    #[test]
    fn open_nav_collapses_before_action() {
        let log = RefCell::new(Vec::new());
        collapse_nav_then(
            true,
            || log.borrow_mut().push("collapse"),
            || log.borrow_mut().push("open wallet dialog"),
        );
        assert_eq!(*log.borrow(), ["collapse", "open wallet dialog"]);
    }

    #[test]
    fn closed_nav_is_left_alone() {
        let log = RefCell::new(Vec::new());
        collapse_nav_then(
            false,
            || log.borrow_mut().push("collapse"),
            || log.borrow_mut().push("logout"),
        );
        assert_eq!(*log.borrow(), ["logout"]);
    }

    thread_local! {
        static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn record(call: &'static str) {
        CALLS.with(|calls| calls.borrow_mut().push(call));
    }

    #[derive(Props, Clone, PartialEq)]
    struct ActionsHarnessProps {
        is_nav_toggled: bool,
        logout: bool,
    }

    fn actions_harness(props: ActionsHarnessProps) -> Element {
        use_hook(move || {
            let actions = WalletActions {
                is_nav_toggled: props.is_nav_toggled,
                toggle_mobile_nav: EventHandler::new(|_: ()| record("collapse")),
                on_open_connect_wallet_dialog: EventHandler::new(|_: ()| record("open wallet dialog")),
                on_logout_wallet: EventHandler::new(|_: ()| record("logout")),
            };
            if props.logout {
                actions.logout_wallet();
            } else {
                actions.open_wallet_dialog();
            }
        });
        rsx! { div {} }
    }

    fn run_action(is_nav_toggled: bool, logout: bool) -> Vec<&'static str> {
        CALLS.with(|calls| calls.borrow_mut().clear());
        let mut dom = VirtualDom::new_with_props(
            actions_harness,
            ActionsHarnessProps {
                is_nav_toggled,
                logout,
            },
        );
        dom.rebuild_in_place();
        CALLS.with(|calls| calls.borrow().clone())
    }

    #[test]
    fn wallet_dialog_opens_after_nav_collapses() {
        assert_eq!(run_action(true, false), ["collapse", "open wallet dialog"]);
        assert_eq!(run_action(false, false), ["open wallet dialog"]);
    }

    #[test]
    fn logout_happens_after_nav_collapses() {
        assert_eq!(run_action(true, true), ["collapse", "logout"]);
        assert_eq!(run_action(false, true), ["logout"]);
    }

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        width: f64,
        is_nav_toggled: bool,
        provider_state: ProviderState,
    }

    fn harness(props: HarnessProps) -> Element {
        use_context_provider(|| {
            AppState::new(SitePrefs {
                default_viewport_width: props.width,
                ..SitePrefs::from_lookup(|_| None)
            })
        });
        rsx! {
            SiteHeader {
                is_nav_toggled: props.is_nav_toggled,
                provider_state: props.provider_state.clone(),
                toggle_mobile_nav: move |_| {},
                on_open_connect_wallet_dialog: move |_| {},
                on_logout_wallet: move |_| {},
            }
        }
    }

    fn render(width: f64, is_nav_toggled: bool, provider_state: ProviderState) -> String {
        let mut dom = VirtualDom::new_with_props(
            harness,
            HarnessProps {
                width,
                is_nav_toggled,
                provider_state,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn desktop_shows_nav_list() {
        let html = render(1200.0, false, ProviderState::default());
        for text in ["Staking", "Governance", "Your Account"] {
            assert!(html.contains(text), "missing {text}");
        }
        assert!(html.contains(r#"href="/zrx/vote""#));
        assert!(html.contains("Connect your wallet"));
        assert!(!html.contains("wallet-connected-indicator"));
        assert!(!html.contains("hamburger"));
    }

    #[test]
    fn mobile_shows_indicator_and_panel() {
        let html = render(1199.0, false, ProviderState::default());
        assert!(html.contains("wallet-connected-indicator"));
        assert!(html.contains("hamburger"));
        assert!(html.contains("background-color: #E71D36"));
        assert!(html.contains("height: 365px"));
    }

    #[test]
    fn mobile_connected_and_toggled() {
        let html = render(
            375.0,
            true,
            ProviderState::ready("0x5265bde27f57e738be6c1f6ab3544e82cdc92a8f"),
        );
        assert!(html.contains("background-color: #00AE99"));
        assert!(html.contains("ease-in; opacity: 0;"));
        assert!(html.contains("height: 426px"));
        assert!(html.contains("mobile-nav-open"));
        assert!(html.contains("Log out"));
        assert!(html.contains("0x5265...2a8f"));
    }

    #[test]
    fn non_ready_states_render_disconnected() {
        let html = render(
            375.0,
            false,
            ProviderState {
                account: AccountState::Locked,
            },
        );
        assert!(html.contains("background-color: #E71D36"));
        assert!(html.contains("Unlock your wallet"));
    }
}
