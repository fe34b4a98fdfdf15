//=============================================================================
// File: src/screens/docs.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::resource_card::ResourceCard;
use dioxus::prelude::*;

#[component]
pub fn DocsScreen() -> Element {
    // The catalog is bundled, so parsing it once per mount is enough.
    let resources = use_hook(|| {
        api::catalog::resources().map_err(|e| {
            dioxus_logger::tracing::warn!("resource catalog unavailable: {}", e);
            e.to_string()
        })
    });

    rsx! {
        section {
            h2 { "Guides & resources" }
            match resources {
                Ok(records) if records.is_empty() => rsx! {
                    EmptyState {
                        title: "No resources yet",
                        description: Some("Guides will show up here once they are published.".to_string()),
                    }
                },
                Ok(records) => rsx! {
                    for (index, resource) in records.into_iter().enumerate() {
                        ResourceCard { key: "resource-{index}", resource }
                    }
                },
                Err(e) => rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load resources: {e}" }
                    }
                },
            }
        }
    }
}
