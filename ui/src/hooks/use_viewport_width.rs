//=============================================================================
// File: src/hooks/use_viewport_width.rs
//=============================================================================
use dioxus::prelude::*;

use crate::compat;

/// Tracks the browser viewport width, updating on every `resize`.
///
/// Where the width cannot be measured (non-browser targets, tests) the
/// signal holds `fallback` and never changes.
pub fn use_viewport_width(fallback: f64) -> Signal<f64> {
    let mut width = use_signal(move || compat::viewport_width().unwrap_or(fallback));

    use_hook(move || {
        let Some(mut listener) = compat::listen_window("resize") else {
            return;
        };
        spawn(async move {
            while listener.next().await.is_some() {
                if let Some(w) = compat::viewport_width() {
                    // resize fires continuously while dragging; only write real changes.
                    if *width.peek() != w {
                        width.set(w);
                    }
                }
            }
        });
    });

    width
}
