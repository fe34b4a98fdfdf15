//! Site-relative paths the header and cards link to.

/// Fixed top-level routes of the staking site.
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::IntoStaticStr, strum::Display)]
pub enum WebsitePaths {
    #[strum(serialize = "/")]
    Home,
    #[strum(serialize = "/zrx/staking")]
    Staking,
    #[strum(serialize = "/zrx/vote")]
    Vote,
    #[strum(serialize = "/zrx/account")]
    Account,
}

impl WebsitePaths {
    pub fn path(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_site_relative() {
        assert_eq!(WebsitePaths::Home.path(), "/");
        assert_eq!(WebsitePaths::Staking.path(), "/zrx/staking");
        assert_eq!(WebsitePaths::Vote.to_string(), "/zrx/vote");
        assert_eq!(WebsitePaths::Account.to_string(), "/zrx/account");
    }
}
