//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default, Debug)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
    /// Destructive actions, e.g. removing stake.
    Danger,
}

impl ButtonType {
    fn theme(&self) -> &'static str {
        match self {
            ButtonType::Primary => "primary",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
            ButtonType::Danger => "danger",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(default = false)]
    full_width: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Contrast, _) => "contrast",
        (ButtonType::Danger, _) => "secondary outline danger",
        (_, true) | (ButtonType::Secondary, false) => "secondary",
    };
    let style = if props.full_width {
        "display: block; width: 100%;"
    } else {
        ""
    };
    rsx! {
        button {
            class: "{class_str}",
            style: "{style}",
            "data-theme": props.button_type.theme(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false)
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}

// A modal with no title bar that closes on backdrop click or Escape key.
#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    is_open: Signal<bool>,
    children: Element,
}

pub fn NoTitleModal(mut props: NoTitleModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                // focus this element as soon as it is rendered into the DOM.
                autofocus: true,
                // Close when the dialog's backdrop is clicked.
                onclick: move |_| props.is_open.set(false),
                // Listen for keyboard events to close on "Escape".
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                // The <article> tag holds the content and stops the click
                // from propagating to the backdrop and closing the modal.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    {props.children}
                }
            }
        }
    }
}
