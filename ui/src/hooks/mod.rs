pub mod use_scroll_pin;
pub mod use_viewport_width;
