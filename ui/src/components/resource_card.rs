//! A card for one entry of the documentation resource index.

use api::resource::Difficulty;
use api::resource::ResourceRecord;
use dioxus::prelude::*;

use crate::app_state::use_site_prefs;
use crate::components::link::Link;

/// Label of the tag marking community maintained resources.
pub const COMMUNITY_TAG: &str = "community maintained";

#[component]
pub fn ResourceCard(resource: ResourceRecord) -> Element {
    let prefs = use_site_prefs();
    let target = resource.link_target(&prefs.docs_guides_path);
    let title = resource.title.clone().unwrap_or_default();
    let description = resource.description.clone().unwrap_or_default();

    rsx! {
        div {
            class: "resource",
            style: "border: 1px solid #d7e3db; padding: 25px 30px 5px; margin-bottom: 1.1rem; display: block;",
            h5 {
                style: "margin-bottom: 8px;",
                Link {
                    to: target.href,
                    open_in_new_tab: target.open_in_new_tab,
                    "{title}"
                }
            }
            p {
                style: "margin-bottom: 10px;",
                "{description}"
            }
            div {
                class: "resource-meta",
                style: "display: flex; justify-content: space-between; flex-wrap: wrap;",
                div {
                    class: "resource-tags",
                    style: "display: inline-flex; align-items: center; flex-wrap: wrap;",
                    if resource.is_community() {
                        Tag { is_inverted: true, "{COMMUNITY_TAG}" }
                    }
                    for (index, label) in resource.tags.iter().enumerate() {
                        Tag { key: "tag-{index}", "{label}" }
                    }
                }
                if let Some(difficulty) = resource.difficulty {
                    Level { difficulty }
                }
            }
        }
    }
}

#[component]
pub fn Tag(#[props(default = false)] is_inverted: bool, children: Element) -> Element {
    let style = if is_inverted {
        "background-color: #003831; color: #ffffff;"
    } else {
        "background-color: rgba(0, 56, 49, 0.1); color: #003831;"
    };
    rsx! {
        span {
            class: if is_inverted { "tag tag-inverted" } else { "tag" },
            style: "{style} font-size: 0.75rem; padding: 4px 10px; margin: 0 8px 10px 0; border-radius: 4px;",
            {children}
        }
    }
}

/// Difficulty indicator: a row of bars, `level` of them filled, plus a label.
#[component]
pub fn Level(difficulty: Difficulty) -> Element {
    let filled = difficulty.level();

    rsx! {
        div {
            class: "level",
            title: "Difficulty: {difficulty.label()}",
            style: "display: inline-flex; align-items: center; margin-bottom: 10px;",
            for bar in 1..=Difficulty::MAX_LEVEL {
                span {
                    key: "{bar}",
                    class: if bar <= filled { "level-bar level-bar-filled" } else { "level-bar" },
                    style: if bar <= filled {
                        "display: inline-block; width: 4px; height: 12px; margin-right: 3px; background-color: #00ae99;"
                    } else {
                        "display: inline-block; width: 4px; height: 12px; margin-right: 3px; background-color: #d7e3db;"
                    },
                }
            }
            span {
                style: "margin-left: 6px; font-size: 0.8rem;",
                "{difficulty.label()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(resource: ResourceRecord) -> String {
        dioxus_ssr::render_element(rsx! {
            ResourceCard { resource }
        })
    }

    fn record() -> ResourceRecord {
        ResourceRecord {
            title: Some("Launch a relayer".to_string()),
            description: Some("Stand up an order book.".to_string()),
            id: Some("launch-a-relayer".to_string()),
            tags: vec!["Relayer".to_string(), "API".to_string(), "Beginner".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn links_to_guide_path_without_new_tab() {
        let html = render(record());
        assert!(html.contains(r#"href="/docs/guides/launch-a-relayer""#));
        assert!(!html.contains("_blank"));
        assert!(html.contains("Launch a relayer"));
        assert!(html.contains("Stand up an order book."));
    }

    #[test]
    fn external_url_opens_new_tab() {
        let html = render(ResourceRecord {
            external_url: Some("https://example.org/guide".to_string()),
            ..record()
        });
        assert!(html.contains(r#"href="https://example.org/guide""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn tags_render_in_order() {
        let html = render(record());
        let relayer = html.find(">Relayer<").unwrap();
        let api = html.find(">API<").unwrap();
        let beginner = html.find(">Beginner<").unwrap();
        assert!(relayer < api && api < beginner);
    }

    #[test]
    fn community_badge_only_when_flagged() {
        assert!(!render(record()).contains(COMMUNITY_TAG));

        let html = render(ResourceRecord {
            is_community: Some(true),
            ..record()
        });
        let badge = html.find(COMMUNITY_TAG).unwrap();
        assert!(badge < html.find(">Relayer<").unwrap());
    }

    #[test]
    fn difficulty_indicator_is_optional() {
        assert!(!render(record()).contains("Difficulty:"));

        let html = render(ResourceRecord {
            difficulty: Some(Difficulty::Advanced),
            ..record()
        });
        assert!(html.contains("Difficulty: Advanced"));
        assert_eq!(html.matches("level-bar-filled").count(), 3);
    }

    #[test]
    fn missing_title_and_description_render_empty() {
        let html = render(ResourceRecord {
            id: Some("bare".to_string()),
            ..Default::default()
        });
        assert!(html.contains(r#"href="/docs/guides/bare""#));
    }
}
