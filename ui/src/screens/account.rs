//=============================================================================
// File: src/screens/account.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::pico::Button;
use crate::components::stake_overview::StakeOverviewPanel;
use api::stake_pool::StakePoolSummary;
use chrono::Utc;
use dioxus::prelude::*;

#[component]
pub fn AccountScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let notice = use_signal(|| None::<String>);

    let stakes = use_hook(|| {
        api::catalog::account_stakes(Utc::now()).map_err(|e| {
            dioxus_logger::tracing::warn!("stake catalog unavailable: {}", e);
            e.to_string()
        })
    });

    if !app_state_mut.provider_state.read().is_wallet_connected() {
        return rsx! {
            EmptyState {
                title: "Your account",
                description: Some("Connect your wallet to see the pools you have staked in.".to_string()),
                primary_action: rsx! {
                    Button {
                        on_click: move |_| app_state_mut.is_connect_dialog_open.set(true),
                        "Connect your wallet"
                    }
                },
            }
        };
    }

    rsx! {
        section {
            h2 { "Your stakes" }
            if let Some(text) = notice() {
                p { class: "notice", role: "status", "{text}" }
            }
            match stakes {
                Ok(stakes) => rsx! {
                    for stake in stakes.iter() {
                        AccountStake { key: "{stake.pool_id}", stake: stake.clone(), notice }
                    }
                },
                Err(e) => rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load stakes: {e}" }
                    }
                },
            }
        }
    }
}

/// One stake of the connected account. Move and remove are not wired to a
/// wallet here, so both just report back through `notice`.
#[component]
fn AccountStake(stake: StakePoolSummary, notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    let name = stake.name.clone();
    let move_name = name.clone();

    rsx! {
        StakeOverviewPanel {
            stake,
            on_move_stake: move |_| {
                dioxus_logger::tracing::info!("move stake requested for {}", move_name);
                notice.set(Some(format!("Moving stake out of {move_name} is not available in this preview.")));
            },
            on_remove_stake: move |_| {
                dioxus_logger::tracing::info!("remove stake requested for {}", name);
                notice.set(Some(format!("Removing stake from {name} is not available in this preview.")));
            },
        }
    }
}
