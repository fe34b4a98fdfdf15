use crate::components::empty_state::EmptyState;
use dioxus::prelude::*;

/// Stand-in for the staking and governance pages, which live elsewhere.
#[component]
pub fn ComingSoonScreen(#[props(into)] title: String) -> Element {
    rsx! {
        EmptyState {
            title,
            description: Some("This page is not part of this preview.".to_string()),
        }
    }
}
