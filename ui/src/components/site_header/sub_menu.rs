use api::provider_state::AccountState;
use api::provider_state::ProviderState;
use dioxus::prelude::*;

use crate::components::address::Address;
use crate::components::pico::{Button, ButtonType};

use super::WalletActions;

/// Wallet controls shown at the end of the header: the connected account with
/// a logout action, or a prompt to connect.
#[component]
pub fn SubMenu(
    provider_state: ProviderState,
    actions: WalletActions,
) -> Element {
    match provider_state.account.address() {
        Some(address) => rsx! {
            div {
                class: "sub-menu sub-menu-connected",
                style: "display: flex; align-items: center; gap: 1rem;",
                span {
                    style: "font-size: 0.9rem; opacity: 0.7;",
                    "Connected as"
                }
                Address { address: address.to_string(), label: "Your Address".to_string() }
                a {
                    href: "#",
                    class: "logout",
                    onclick: move |evt| {
                        evt.prevent_default();
                        actions.logout_wallet();
                    },
                    "Log out"
                }
            }
        },
        None => {
            let label = connect_label(&provider_state.account);
            rsx! {
                div {
                    class: "sub-menu",
                    Button {
                        button_type: ButtonType::Contrast,
                        outline: true,
                        disabled: provider_state.account.is_loading(),
                        on_click: move |_| actions.open_wallet_dialog(),
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Call to action for a wallet that is not `Ready` yet.
pub fn connect_label(account: &AccountState) -> &'static str {
    match account {
        AccountState::Loading => "Connecting...",
        AccountState::Locked => "Unlock your wallet",
        _ => "Connect your wallet",
    }
}
