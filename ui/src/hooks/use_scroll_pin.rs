//=============================================================================
// File: src/hooks/use_scroll_pin.rs
//=============================================================================
use dioxus::prelude::*;

use crate::compat;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PinTransition {
    Pin,
    Unpin,
}

/// Decides when a sticky header hides and reappears as the page scrolls.
///
/// A downward step larger than `down_tolerance` hides (unpins) the header, an
/// upward step larger than `up_tolerance` shows it again. Returning to the
/// very top always pins.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPin {
    down_tolerance: f64,
    up_tolerance: f64,
    last_y: f64,
    pinned: bool,
}

impl ScrollPin {
    /// Starts pinned, measuring the first step from `initial_y`, the offset
    /// the page was already at (restored scroll position, back navigation).
    pub fn new(down_tolerance: f64, up_tolerance: f64, initial_y: f64) -> Self {
        Self {
            down_tolerance,
            up_tolerance,
            last_y: initial_y,
            pinned: true,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Feeds the new scroll offset, returning the transition it causes, if any.
    pub fn on_scroll(&mut self, y: f64) -> Option<PinTransition> {
        let delta = y - self.last_y;
        self.last_y = y;

        if y <= 0.0 {
            return self.pin();
        }
        if delta > self.down_tolerance {
            return self.unpin();
        }
        if -delta > self.up_tolerance {
            return self.pin();
        }
        None
    }

    fn pin(&mut self) -> Option<PinTransition> {
        if self.pinned {
            return None;
        }
        self.pinned = true;
        Some(PinTransition::Pin)
    }

    fn unpin(&mut self) -> Option<PinTransition> {
        if !self.pinned {
            return None;
        }
        self.pinned = false;
        Some(PinTransition::Unpin)
    }
}

/// Watches window scrolling and reports whether the header should be shown.
///
/// `on_unpin` runs every time the header hides.
pub fn use_scroll_pin(down_tolerance: f64, up_tolerance: f64, on_unpin: Callback<()>) -> Signal<bool> {
    let mut pinned = use_signal(|| true);

    use_hook(move || {
        let Some(mut listener) = compat::listen_window("scroll") else {
            return;
        };
        let initial_y = compat::scroll_y().unwrap_or(0.0);
        spawn(async move {
            let mut pin = ScrollPin::new(down_tolerance, up_tolerance, initial_y);
            while listener.next().await.is_some() {
                let Some(y) = compat::scroll_y() else {
                    continue;
                };
                match pin.on_scroll(y) {
                    Some(PinTransition::Unpin) => {
                        dioxus_logger::tracing::debug!("header unpinned at y={}", y);
                        pinned.set(false);
                        on_unpin.call(());
                    }
                    Some(PinTransition::Pin) => {
                        dioxus_logger::tracing::debug!("header pinned at y={}", y);
                        pinned.set(true);
                    }
                    None => {}
                }
            }
        });
    });

    pinned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin() -> ScrollPin {
        ScrollPin::new(4.0, 10.0, 0.0)
    }

    #[test]
    fn starts_pinned() {
        assert!(pin().is_pinned());
    }

    #[test]
    fn small_down_step_keeps_header() {
        let mut p = pin();
        assert_eq!(p.on_scroll(4.0), None);
        assert!(p.is_pinned());
    }

    #[test]
    fn down_step_past_tolerance_unpins_once() {
        let mut p = pin();
        assert_eq!(p.on_scroll(5.0), Some(PinTransition::Unpin));
        assert_eq!(p.on_scroll(50.0), None);
        assert!(!p.is_pinned());
    }

    #[test]
    fn up_step_must_exceed_tolerance_to_pin() {
        let mut p = pin();
        p.on_scroll(500.0);
        assert_eq!(p.on_scroll(490.0), None);
        assert_eq!(p.on_scroll(479.0), Some(PinTransition::Pin));
        assert!(p.is_pinned());
    }

    #[test]
    fn steps_are_measured_per_event() {
        let mut p = pin();
        p.on_scroll(500.0);
        // many small upward steps never add up to a re-pin
        for y in (400..500).rev().step_by(5) {
            assert_eq!(p.on_scroll(y as f64), None);
        }
        assert!(!p.is_pinned());
    }

    #[test]
    fn restored_offset_is_the_first_reference() {
        let mut p = ScrollPin::new(4.0, 10.0, 2000.0);
        assert_eq!(p.on_scroll(1990.0), None);
        assert!(p.is_pinned());
        assert_eq!(p.on_scroll(1995.0), Some(PinTransition::Unpin));
    }

    #[test]
    fn reaching_top_pins() {
        let mut p = pin();
        p.on_scroll(8.0);
        assert!(!p.is_pinned());
        assert_eq!(p.on_scroll(0.0), Some(PinTransition::Pin));
    }
}
