use std::env;

/// Tunables for the staking site front-end.
#[derive(Clone, PartialEq, Debug)]
pub struct SitePrefs {
    /// Base path that resources without a url fall back to.
    pub docs_guides_path: String,

    /// Downward scroll step, in px, that must be exceeded to hide the header.
    pub header_down_tolerance: f64,

    /// Upward scroll step, in px, that must be exceeded to show the header again.
    pub header_up_tolerance: f64,

    /// Viewport width assumed where the real one cannot be measured
    /// (non-browser targets, tests).
    pub default_viewport_width: f64,
}

impl SitePrefs {
    pub const DOCS_GUIDES_PATH: &'static str = "/docs/guides";
    pub const HEADER_DOWN_TOLERANCE: f64 = 4.0;
    pub const HEADER_UP_TOLERANCE: f64 = 10.0;
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

    /// Creates a SitePrefs instance from environment variables, falling back
    /// to the in-code defaults for anything missing or malformed.
    ///
    /// # Environment Variables
    /// - `DOCS_GUIDES_PATH`: e.g. "/docs/guides".
    /// - `HEADER_DOWN_TOLERANCE`: px, e.g. "4".
    /// - `HEADER_UP_TOLERANCE`: px, e.g. "10".
    /// - `DEFAULT_VIEWPORT_WIDTH`: px, e.g. "1280".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let docs_guides_path = lookup("DOCS_GUIDES_PATH")
            .filter(|s| s.starts_with('/'))
            .unwrap_or_else(|| Self::DOCS_GUIDES_PATH.to_string());

        Self {
            docs_guides_path,
            header_down_tolerance: px(&lookup, "HEADER_DOWN_TOLERANCE", Self::HEADER_DOWN_TOLERANCE),
            header_up_tolerance: px(&lookup, "HEADER_UP_TOLERANCE", Self::HEADER_UP_TOLERANCE),
            default_viewport_width: px(&lookup, "DEFAULT_VIEWPORT_WIDTH", Self::DEFAULT_VIEWPORT_WIDTH),
        }
    }
}

impl Default for SitePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn px(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> f64 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            dioxus_logger::tracing::warn!("ignoring invalid {}: {:?}", key, raw);
            default
        }
    }
}
