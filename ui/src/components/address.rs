//=============================================================================
// File: src/components/address.rs
//=============================================================================
use crate::components::pico::{Button, NoTitleModal};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AddressProps {
    pub address: String,

    /// Heading of the full-address dialog.
    #[props(default = "Full Address".to_string())]
    pub label: String,
}

/// An abbreviated hex address that opens a dialog with the full value on click.
#[component]
pub fn Address(props: AddressProps) -> Element {
    let mut is_modal_open = use_signal(|| false);
    let abbreviated = abbreviate(&props.address);

    rsx! {
        NoTitleModal {
            is_open: is_modal_open,
            div {
                style: "display: flex; flex-direction: column; align-items: center; text-align: center",
                h4 {
                    style: "margin-top: 1rem; margin-bottom: 0rem;",
                    "{props.label}"
                }
                code {
                    style: "text-align: left; word-break: break-all; background-color: var(--pico-muted-background-color); padding: 1rem; border-radius: var(--pico-border-radius); width: 100%; margin-bottom: 1rem;",
                    "{props.address}"
                }
                Button {
                    on_click: move |_| is_modal_open.set(false),
                    "Close"
                }
            }
        }

        // --- The clickable abbreviated address display ---
        span {
            style: "cursor: pointer;",
            title: "{props.address}",
            onclick: move |_| is_modal_open.set(true),
            code { "{abbreviated}" }
        }
    }
}

/// Keeps the `0x` prefix plus four digits on each end: `0x5265...2a8f`.
/// Strings of 12 characters or fewer are returned unchanged.
pub fn abbreviate(s: &str) -> String {
    const HEAD: usize = 6;
    const TAIL: usize = 4;

    // chars, not bytes, so multi-byte input cannot split a character.
    let char_count = s.chars().count();
    if char_count <= HEAD + TAIL + 2 {
        return s.to_string();
    }

    let first_part: String = s.chars().take(HEAD).collect();
    let last_part: String = s.chars().skip(char_count - TAIL).collect();
    format!("{}...{}", first_part, last_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_long_addresses() {
        assert_eq!(
            abbreviate("0x5265bde27f57e738be6c1f6ab3544e82cdc92a8f"),
            "0x5265...2a8f"
        );
    }

    #[test]
    fn short_values_unchanged() {
        assert_eq!(abbreviate("0xabc"), "0xabc");
        assert_eq!(abbreviate("0x1234567890"), "0x1234567890");
    }
}
