//! Data model for discovered URLs and parsed sitemap documents

use serde::Serialize;

/// Classification of a discovered sitemap entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A regular page URL from a `<url>` entry
    Page,
    /// An image URL from an `<image:image>` extension entry
    Image,
    /// Any other asset kind (video, news, and similar extensions)
    Other,
}

/// One discovered page/resource reference from a sitemap document
///
/// `url` is the identity key after normalization; the optional metadata
/// fields are passed through as opaque strings exactly as declared by the
/// source document.
#[derive(Debug, Clone, Serialize)]
pub struct UrlRecord {
    /// Absolute URL of the discovered resource
    pub url: String,

    /// Raw `<lastmod>` value, if declared (opaque, not parsed into a date)
    pub last_modified: Option<String>,

    /// Raw `<changefreq>` value, if declared
    pub change_frequency: Option<String>,

    /// Declared `<priority>` value; range is not enforced at parse time
    pub priority_hint: Option<f32>,

    /// What kind of resource this entry refers to
    pub kind: ResourceKind,

    /// URL of the sitemap document this record came from (provenance only,
    /// never part of the record's identity)
    pub source_sitemap: String,
}

impl UrlRecord {
    /// Creates a page record with no optional metadata
    pub fn page(url: impl Into<String>, source_sitemap: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            change_frequency: None,
            priority_hint: None,
            kind: ResourceKind::Page,
            source_sitemap: source_sitemap.into(),
        }
    }

    /// Creates an image record; image entries carry no priority/changefreq
    /// metadata
    pub fn image(url: impl Into<String>, source_sitemap: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Image,
            ..Self::page(url, source_sitemap)
        }
    }
}

/// A record that survived the filter pipeline, with its computed priority
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecord {
    #[serde(flatten)]
    pub record: UrlRecord,

    /// Computed crawl priority, always within [0.0, 1.0]
    pub priority: f32,
}

/// Result of fetching and parsing one sitemap URL
///
/// A document carries both an entry list and a child-sitemap list (either
/// possibly empty) so the resolution engine can treat every document
/// uniformly instead of branching on an index/url-set type tag. Valid input
/// never populates both, but mixed or malformed documents yield the union.
#[derive(Debug, Clone)]
pub struct SitemapDocument {
    /// The document's own address; dedup key for *documents*, distinct from
    /// the dedup key for `UrlRecord`s
    pub url: String,

    /// Page/resource entries extracted from `<url>` and `<image:image>`
    /// elements
    pub entries: Vec<UrlRecord>,

    /// Child sitemap references extracted from `<sitemap><loc>` elements
    pub child_sitemaps: Vec<String>,

    /// Failure description; when present, `entries` and `child_sitemaps`
    /// are empty
    pub error: Option<String>,
}

impl SitemapDocument {
    /// Creates an empty document for the given address
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            entries: Vec::new(),
            child_sitemaps: Vec::new(),
            error: None,
        }
    }

    /// Creates a document representing a fetch or parse failure
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(url)
        }
    }

    /// Returns true if this document could not be fetched or parsed
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
