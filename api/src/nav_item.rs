use crate::website_paths::WebsitePaths;

/// One entry of the header navigation.
///
/// An item without a `url` is rendered as a placeholder anchor that does not
/// navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub text: &'static str,
    pub url: Option<&'static str>,
}

impl NavItem {
    pub const fn new(id: &'static str, text: &'static str, url: Option<&'static str>) -> Self {
        Self { id, text, url }
    }

    /// Where the rendered anchor points. Placeholders point at `#`.
    pub fn href(&self) -> &'static str {
        self.url.unwrap_or("#")
    }

    pub fn is_placeholder(&self) -> bool {
        self.url.is_none()
    }
}

/// The static navigation shown by the staking header.
pub fn staking_nav_items() -> [NavItem; 3] {
    [
        NavItem::new("staking", "Staking", Some(WebsitePaths::Staking.path())),
        NavItem::new("governance", "Governance", Some(WebsitePaths::Vote.path())),
        NavItem::new("your-account", "Your Account", Some(WebsitePaths::Account.path())),
    ]
}
