//! The account page's summary of one pool the user has stake in.

use api::epoch::time_to_epoch;
use api::stake_pool::StakePoolSummary;
use chrono::DateTime;
use chrono::Utc;
use dioxus::prelude::*;

use crate::app_state::use_site_prefs;
use crate::components::panel_header::{CircleCheckMark, PanelHeader, StatFigure};
use crate::components::pico::{Button, ButtonType};
use crate::hooks::use_viewport_width::use_viewport_width;
use crate::layout::Layout;
use crate::layout::PANEL_DESKTOP_MIN_WIDTH;

/// Display strings shared by both presentations of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeOverviewView {
    pub fees_generated: String,
    pub rewards_shared: String,
    pub saturation: String,
    pub your_stake: String,
    pub your_rewards: String,
    pub next_epoch: String,
}

impl StakeOverviewView {
    pub fn new(stake: &StakePoolSummary, now: DateTime<Utc>) -> Self {
        Self {
            fees_generated: stake.fees_generated().to_string(),
            rewards_shared: stake.rewards_shared_display(),
            saturation: stake.saturation_display(),
            your_stake: format!("{} ZRX", stake.user_data.zrx_staked_formatted),
            your_rewards: format!("{} ETH", stake.user_data.rewards_received_formatted),
            next_epoch: time_to_epoch(stake.next_epoch_approximate_start, now),
        }
    }
}

#[component]
pub fn StakeOverviewPanel(
    stake: StakePoolSummary,
    on_move_stake: EventHandler<()>,
    on_remove_stake: EventHandler<()>,
) -> Element {
    let prefs = use_site_prefs();
    let viewport_width = use_viewport_width(prefs.default_viewport_width);
    let layout = Layout::select(viewport_width(), PANEL_DESKTOP_MIN_WIDTH);
    let view = StakeOverviewView::new(&stake, Utc::now());

    let move_stake = move |_: MouseEvent| {
        dioxus_logger::tracing::debug!("move stake requested");
        on_move_stake.call(());
    };
    let remove_stake = move |_: MouseEvent| {
        dioxus_logger::tracing::debug!("remove stake requested");
        on_remove_stake.call(());
    };

    let header = rsx! {
        PanelHeader {
            subtitle: stake.website_url.clone(),
            avatar_src: stake.logo_url.clone(),
            initial: stake.name.clone(),
            address: stake.operator_address.clone(),
            pool_id: stake.pool_id.clone(),
            span {
                class: "pool-name",
                style: "display: flex; align-items: center;",
                "{stake.name}"
                if stake.is_verified {
                    CircleCheckMark {}
                }
            }
        }
    };

    match layout {
        Layout::Desktop => rsx! {
            div {
                class: "stake-overview stake-overview-desktop",
                style: "padding: 0 20px; border: 1px solid #d7e3db; margin-bottom: 20px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 20px 0;",
                    {header}
                    div {
                        class: "stats",
                        style: "display: flex; align-items: center;",
                        StatFigure { label: "Fees Generated", value: view.fees_generated.clone() }
                        StatFigure { label: "Rewards Shared", value: view.rewards_shared.clone() }
                        StatFigure { label: "Saturation", value: view.saturation.clone() }
                    }
                }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 20px 0; border-top: 1px solid #d7e3db;",
                    div {
                        class: "action",
                        style: "display: flex; justify-content: space-between; align-items: center; width: calc(50% - 10px); padding: 20px; background-color: #f3f6f4;",
                        InlineStat { heading: "Your stake", value: view.your_stake.clone() }
                        div {
                            style: "display: flex; gap: 10px;",
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                on_click: move_stake,
                                "Move"
                            }
                            Button {
                                button_type: ButtonType::Danger,
                                on_click: remove_stake,
                                "Remove"
                            }
                        }
                    }
                    div {
                        class: "action",
                        style: "display: flex; align-items: center; gap: 45px; width: calc(50% - 10px); padding: 20px; background-color: #f3f6f4;",
                        InlineStat { heading: "Your rewards", value: view.your_rewards.clone() }
                        InlineStat { heading: "Next epoch", value: view.next_epoch.clone() }
                    }
                }
            }
        },
        Layout::Mobile => rsx! {
            div {
                class: "stake-overview stake-overview-mobile",
                style: "padding: 20px; background: #f3f6f4; margin-bottom: 20px;",
                {header}
                div {
                    style: "display: flex; margin: 20px 0;",
                    div {
                        class: "action",
                        style: "width: 50%;",
                        InlineStat { heading: "Your stake", value: view.your_stake.clone() }
                    }
                    div {
                        class: "action",
                        style: "width: 50%; border-left: 1px solid #d7e3db; padding-left: 30px;",
                        InlineStat { heading: "Your rewards", value: view.your_rewards.clone() }
                    }
                }
                div {
                    class: "mobile-actions",
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    Button {
                        full_width: true,
                        on_click: move_stake,
                        "Move"
                    }
                    Button {
                        button_type: ButtonType::Danger,
                        full_width: true,
                        on_click: remove_stake,
                        "Remove"
                    }
                }
            }
        },
    }
}

#[component]
fn InlineStat(#[props(into)] heading: String, value: String) -> Element {
    rsx! {
        div {
            style: "font-size: 18px; flex-shrink: 0;",
            h6 { style: "font-size: 14px; margin-bottom: 12px;", "{heading}" }
            "{value}"
        }
    }
}
