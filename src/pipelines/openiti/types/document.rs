use std::collections::BTreeMap;

use url::Url;

use crate::error::Error;
use crate::pipelines::openiti::header::HeaderParser;

/// Header metadata, keyed by the metadata name without its numeric prefix
/// (`AuthorNAME` for `#META# 010.AuthorNAME`).
pub type Metadata = BTreeMap<String, String>;

/// A fetched document, split into its metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    id: String,
    url: String,
    metadata: Metadata,
    body: String,
}

impl SourceDocument {
    pub fn new(id: String, url: String, metadata: Metadata, body: String) -> Self {
        Self {
            id,
            url,
            metadata,
            body,
        }
    }

    /// Build a document from the raw text fetched at `url`.
    ///
    /// `source` is the url as given by the caller and is kept as is,
    /// `url` is its parsed form, only used to get the document id.
    /// Errors if the header cannot be split from the body.
    pub fn from_raw(
        source: &str,
        url: &Url,
        raw: &str,
        parser: &HeaderParser,
    ) -> Result<Self, Error> {
        let (metadata, body) = parser.parse(raw)?;
        Ok(Self::new(
            document_id(url),
            source.to_string(),
            metadata,
            body.to_string(),
        ))
    }

    /// Get a reference to the document's id.
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Get a reference to the document's url.
    pub fn url(&self) -> &str {
        self.url.as_ref()
    }

    /// Get a reference to the document's metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get a reference to the document's body.
    pub fn body(&self) -> &str {
        self.body.as_ref()
    }
}

/// Last path segment of `url`. Empty if the path ends with a `/`.
pub fn document_id(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or_default()
        .to_string()
}
