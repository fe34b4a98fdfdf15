use crate::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LinkProps {
    /// Site-relative path or absolute url.
    #[props(into)]
    pub to: String,

    #[props(default = false)]
    pub open_in_new_tab: bool,

    #[props(optional)]
    pub class: Option<String>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An anchor that switches screens in-app when the path belongs to one.
///
/// Paths without a matching [`Screen`], absolute urls and new-tab links are
/// left to the browser.
#[component]
pub fn Link(props: LinkProps) -> Element {
    let screen_state = try_use_context::<Signal<Screen>>();
    let in_app_screen = match props.open_in_new_tab {
        true => None,
        false => Screen::from_path(&props.to),
    };
    let target = props.open_in_new_tab.then_some("_blank");
    let rel = props.open_in_new_tab.then_some("noopener noreferrer");
    let handler = props.onclick;

    rsx! {
        a {
            href: "{props.to}",
            class: props.class.clone(),
            target,
            rel,
            onclick: move |evt: MouseEvent| {
                if let (Some(mut state), Some(screen)) = (screen_state, in_app_screen.clone()) {
                    evt.prevent_default();
                    state.set(screen);
                }

                if let Some(handler) = &handler {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
