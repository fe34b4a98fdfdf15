use dioxus::prelude::*;

use crate::components::address::Address;

/// Identity block of a pool: avatar, title, website, operator and pool id.
///
/// Without a logo the avatar falls back to the first letter of `initial`.
#[component]
pub fn PanelHeader(
    #[props(default)] subtitle: Option<String>,
    #[props(default)] avatar_src: Option<String>,
    #[props(default)] initial: String,
    address: String,
    pool_id: String,
    children: Element,
) -> Element {
    let letter = initial
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "panel-header",
            style: "display: flex; align-items: center;",
            div {
                class: "panel-avatar",
                style: "flex-shrink: 0; width: 56px; height: 56px; margin-right: 20px; border: 1px solid #d7e3db; display: flex; align-items: center; justify-content: center; overflow: hidden;",
                if let Some(src) = avatar_src {
                    img { src: "{src}", alt: "", style: "max-width: 100%; max-height: 100%;" }
                } else {
                    span { style: "font-size: 1.5rem; opacity: 0.5;", "{letter}" }
                }
            }
            div {
                h3 {
                    style: "margin-bottom: 5px;",
                    {children}
                }
                if let Some(subtitle) = subtitle {
                    p { class: "panel-subtitle", style: "margin-bottom: 5px; opacity: 0.7;", "{subtitle}" }
                }
                div {
                    style: "display: flex; gap: 1rem; font-size: 0.85rem;",
                    Address { address: address.clone(), label: "Operator Address".to_string() }
                    Address { address: pool_id.clone(), label: "Pool Id".to_string() }
                }
            }
        }
    }
}

/// Marks verified pools next to their name.
#[component]
pub fn CircleCheckMark() -> Element {
    rsx! {
        svg {
            class: "circle-check-mark",
            width: "16",
            height: "16",
            view_box: "0 0 16 16",
            style: "margin-left: 8px;",
            "aria-label": "Verified",
            circle { cx: "8", cy: "8", r: "8", fill: "#00AE99" }
            path {
                d: "M4.5 8.5l2.2 2.2L11.5 6",
                stroke: "#ffffff",
                stroke_width: "1.6",
                fill: "none",
            }
        }
    }
}

/// A labelled figure in the stat row.
#[component]
pub fn StatFigure(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div {
            class: "stat-figure",
            style: "padding: 0 20px;",
            div { style: "font-size: 0.85rem; opacity: 0.6; margin-bottom: 6px;", "{label}" }
            div { class: "stat-value", style: "font-size: 1.3rem;", "{value}" }
        }
    }
}
