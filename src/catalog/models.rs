//! Remote catalog payload types

use serde::{Deserialize, Deserializer, Serialize};

/// One book record as returned by the remote catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRecord {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    #[serde(alias = "isbn13")]
    pub isbn: String,
    pub price: String,
    pub url: String,
}

impl CatalogRecord {
    /// Create a record with only the fields used for filtering
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Default::default()
        }
    }

    /// Set the cover image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Whether title or subtitle contains `term`, ignoring case.
    /// `term` must already be lowercased.
    pub fn mentions(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.subtitle.to_lowercase().contains(term)
    }
}

/// One page of remote results (at most one catalog page worth of records)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemotePage {
    /// Total number of matches across all pages
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u64,
    /// Records on this page, in catalog order
    #[serde(default, rename = "books")]
    pub records: Vec<CatalogRecord>,
}

impl RemotePage {
    pub fn new(total: u64, records: Vec<CatalogRecord>) -> Self {
        Self { total, records }
    }

    /// Number of remote pages needed to hold `total` records
    pub fn page_count(&self) -> u32 {
        crate::page_count(self.total)
    }
}

/// The catalog reports counts as strings ("48"); accept numbers as well.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) if s.trim().is_empty() => Ok(0),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
