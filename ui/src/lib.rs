// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
pub mod layout;
mod screens;

use api::prefs::site_prefs::SitePrefs;
use api::provider_state::ProviderState;
use api::website_paths::WebsitePaths;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::{Button, Container, Modal};
use components::site_header::SiteHeader;
use screens::account::AccountScreen;
use screens::coming_soon::ComingSoonScreen;
use screens::docs::DocsScreen;

/// Account used by the connect-wallet dialog, which has no real wallet behind it.
const DEMO_ACCOUNT_ADDRESS: &str = "0x5409ed021d9299bf6814279a6a1411a7e866a631";

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
enum Screen {
    #[default]
    Docs,
    Staking,
    Governance,
    Account,
}

impl Screen {
    /// The in-app screen a site path leads to, if it has one.
    fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == "/docs" {
            return Some(Screen::Docs);
        }
        [
            (WebsitePaths::Staking, Screen::Staking),
            (WebsitePaths::Vote, Screen::Governance),
            (WebsitePaths::Account, Screen::Account),
        ]
        .into_iter()
        .find(|(site_path, _)| site_path.path() == path)
        .map(|(_, screen)| screen)
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: #ffffff;
    }

    .site-header .nav-link:hover span { opacity: 1 !important; }
    .site-header ul { margin-bottom: 0; }
    .site-header .logout { font-size: 0.9rem; }

    .resource .tag { display: inline-block; }

    button.danger { color: #e71d36; border-color: #d5d5d5; }

    .app-content {
        padding: 0 30px 60px;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Owns every piece of mutable state; the components below only read values
/// and report intent through callbacks.
#[component]
fn AppBody() -> Element {
    let prefs = use_hook(SitePrefs::from_env);
    dioxus_logger::tracing::debug!("prefs: {:?}", prefs);
    use_context_provider(|| AppState::new(prefs));

    let is_nav_toggled = use_signal(|| false);
    let provider_state = use_signal(ProviderState::default);
    let is_connect_dialog_open = use_signal(|| false);
    use_context_provider(|| AppStateMut {
        is_nav_toggled,
        provider_state,
        is_connect_dialog_open,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    let active_screen = use_signal(Screen::default);
    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        SiteHeader {
            is_nav_toggled: (app_state_mut.is_nav_toggled)(),
            provider_state: app_state_mut.provider_state.read().clone(),
            toggle_mobile_nav: move |_| app_state_mut.is_nav_toggled.toggle(),
            on_open_connect_wallet_dialog: move |_| app_state_mut.is_connect_dialog_open.set(true),
            on_logout_wallet: move |_| {
                dioxus_logger::tracing::info!("wallet logged out");
                app_state_mut.provider_state.set(ProviderState::default());
            },
        }
        ConnectWalletDialog {}
        Container {
            div {
                class: "app-content",
                match active_screen() {
                    Screen::Docs => rsx! {
                        DocsScreen {}
                    },
                    Screen::Staking => rsx! {
                        ComingSoonScreen { title: "Staking" }
                    },
                    Screen::Governance => rsx! {
                        ComingSoonScreen { title: "Governance" }
                    },
                    Screen::Account => rsx! {
                        AccountScreen {}
                    },
                }
            }
        }
    }
}

#[component]
fn ConnectWalletDialog() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    rsx! {
        Modal {
            is_open: app_state_mut.is_connect_dialog_open,
            title: "Connect a wallet".to_string(),
            p { "This preview connects a read-only demo account." }
            Button {
                on_click: move |_| {
                    dioxus_logger::tracing::info!("wallet connected: {}", DEMO_ACCOUNT_ADDRESS);
                    app_state_mut.provider_state.set(ProviderState::ready(DEMO_ACCOUNT_ADDRESS));
                    app_state_mut.is_connect_dialog_open.set(false);
                },
                "Connect demo wallet"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_resolve_from_site_paths() {
        assert_eq!(Screen::from_path("/"), Some(Screen::Docs));
        assert_eq!(Screen::from_path("/docs/"), Some(Screen::Docs));
        assert_eq!(Screen::from_path("/zrx/staking"), Some(Screen::Staking));
        assert_eq!(Screen::from_path("/zrx/vote"), Some(Screen::Governance));
        assert_eq!(Screen::from_path("/zrx/account"), Some(Screen::Account));
    }

    #[test]
    fn other_paths_are_left_to_the_browser() {
        assert_eq!(Screen::from_path("/docs/guides/launch-a-relayer"), None);
        assert_eq!(Screen::from_path("https://example.org"), None);
    }
}
