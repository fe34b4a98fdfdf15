use api::prefs::site_prefs::SitePrefs;
use dioxus::prelude::*;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: SitePrefs,
}

/// Stable, non-reactive state shared with every component through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: SitePrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}

/// The site preferences from context, or the env-derived defaults when a
/// component is rendered outside the app shell.
pub fn use_site_prefs() -> SitePrefs {
    use_hook(|| {
        try_consume_context::<AppState>()
            .map(|state| state.prefs.clone())
            .unwrap_or_default()
    })
}
