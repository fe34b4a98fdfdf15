//! Defines the mutable, reactive state for the application's UI.

use api::provider_state::ProviderState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The app shell owns these signals. Leaf components never write them
/// directly; they receive plain values plus callbacks that the shell
/// implements on top of these signals.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Whether the mobile navigation panel is expanded.
    pub is_nav_toggled: Signal<bool>,
    /// The wallet provider as last reported.
    pub provider_state: Signal<ProviderState>,
    /// Whether the connect-wallet dialog is showing.
    pub is_connect_dialog_open: Signal<bool>,
}
