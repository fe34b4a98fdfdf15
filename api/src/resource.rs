//! Documentation resources listed on the docs pages.

use serde::Deserialize;
use serde::Serialize;

/// How demanding a guide is.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    /// Human readable label shown next to the level bars.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
        }
    }

    /// Number of filled bars in the difficulty indicator, out of [`Self::MAX_LEVEL`].
    pub fn level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Advanced => 3,
        }
    }

    pub const MAX_LEVEL: u8 = 3;
}

/// A resolved link destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: String,
    pub open_in_new_tab: bool,
}

/// One entry in the documentation resource index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub is_community: Option<bool>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResourceRecord {
    /// Resolves where the card's title links to.
    ///
    /// Precedence is `external_url`, then `url`, then `{guides_path}/{id}`.
    /// Empty strings count as absent. Only an external url opens a new tab.
    pub fn link_target(&self, guides_path: &str) -> LinkTarget {
        let external = non_empty(&self.external_url);
        let href = match external.or_else(|| non_empty(&self.url)) {
            Some(to) => to.to_string(),
            None => format!(
                "{}/{}",
                guides_path.trim_end_matches('/'),
                self.id.as_deref().unwrap_or_default()
            ),
        };

        LinkTarget {
            href,
            open_in_new_tab: external.is_some(),
        }
    }

    pub fn is_community(&self) -> bool {
        self.is_community.unwrap_or(false)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
