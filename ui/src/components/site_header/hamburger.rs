use dioxus::prelude::*;

/// Three-bar menu toggle. Crosses its bars while `is_open`.
#[component]
pub fn Hamburger(is_open: bool, on_click: EventHandler<()>) -> Element {
    let bar = "display: block; width: 22px; height: 2px; margin: 4px 0; background-color: currentColor; transition: transform 0.25s, opacity 0.25s;";
    let (top, middle, bottom) = if is_open {
        (
            "transform: translateY(6px) rotate(45deg);",
            "opacity: 0;",
            "transform: translateY(-6px) rotate(-45deg);",
        )
    } else {
        ("", "", "")
    };

    rsx! {
        button {
            class: if is_open { "hamburger is-open" } else { "hamburger" },
            r#type: "button",
            "aria-label": "Toggle navigation",
            "aria-expanded": if is_open { "true" } else { "false" },
            style: "background: none; border: none; padding: 0; color: inherit; width: auto;",
            onclick: move |_| on_click.call(()),
            span { style: "{bar} {top}" }
            span { style: "{bar} {middle}" }
            span { style: "{bar} {bottom}" }
        }
    }
}
