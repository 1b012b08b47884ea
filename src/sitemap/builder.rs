use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single sitemap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// The entry URL, carried through verbatim
    pub loc: String,

    /// When the sitemap was generated
    pub lastmod: DateTime<Utc>,
}

/// An in-memory sitemap index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapIndex {
    /// Entries in input order
    pub entries: Vec<SitemapEntry>,
}

impl SitemapIndex {
    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a sitemap index from a sequence of URLs
///
/// Captures the current time once and stamps every entry with it; all
/// entries in one call share an identical `lastmod`. URLs are taken as-is,
/// in order, without validation or deduplication.
pub fn build<I, S>(urls: I) -> SitemapIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // Whole-second precision, so the stored value equals its RFC 3339 rendering
    build_at(urls, Utc::now().trunc_subsecs(0))
}

/// Build a sitemap index with a caller-supplied generation timestamp
pub fn build_at<I, S>(urls: I, lastmod: DateTime<Utc>) -> SitemapIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries = urls
        .into_iter()
        .map(|url| SitemapEntry {
            loc: url.into(),
            lastmod,
        })
        .collect();

    SitemapIndex { entries }
}
