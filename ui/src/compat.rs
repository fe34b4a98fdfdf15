// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use futures::StreamExt;
    use futures_channel::mpsc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::Window;

    /// Keeps a `window` event listener registered for as long as it lives.
    ///
    /// Each event is forwarded through a channel so it can be consumed from a
    /// task running inside the Dioxus runtime.
    pub struct WindowListener {
        window: Window,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
        rx: mpsc::UnboundedReceiver<()>,
    }

    impl WindowListener {
        /// Resolves on the next event. `None` once the listener is gone.
        pub async fn next(&mut self) -> Option<()> {
            self.rx.next().await
        }
    }

    impl Drop for WindowListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }

    pub fn listen_window(event: &'static str) -> Option<WindowListener> {
        let window = web_sys::window()?;
        let (tx, rx) = mpsc::unbounded();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let _ = tx.unbounded_send(());
        });
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(WindowListener {
            window,
            event,
            closure,
            rx,
        })
    }

    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    pub fn scroll_y() -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }
}

/// Outside the browser there is no window to observe: listeners never
/// register and measurements are unavailable, so callers keep their defaults.
#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    pub struct WindowListener;

    impl WindowListener {
        pub async fn next(&mut self) -> Option<()> {
            None
        }
    }

    pub fn listen_window(_event: &'static str) -> Option<WindowListener> {
        None
    }

    pub fn viewport_width() -> Option<f64> {
        None
    }

    pub fn scroll_y() -> Option<f64> {
        None
    }
}
