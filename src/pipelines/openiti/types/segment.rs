use log::warn;
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Field names of a serialized [Segment]. Metadata keys may not use them.
pub const RESERVED_FIELDS: [&str; 6] = [
    "location",
    "segment",
    "sentence",
    "orig_sentence",
    "url",
    "categories",
];

/// A milestone-delimited piece of a document, ready to be written.
///
/// Serialized as a flat JSON object: fixed fields first, then every metadata entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Segment {
    location: String,
    segment: u64,
    sentence: String,
    orig_sentence: String,
    url: String,
    categories: Vec<String>,
    #[serde(flatten)]
    metadata: Metadata,
}

impl Segment {
    /// Create a new [Segment].
    ///
    /// `metadata` is expected to be free of reserved keys, see [with_reserved_fields].
    pub fn new(
        location: String,
        segment: u64,
        sentence: String,
        orig_sentence: String,
        url: String,
        categories: Vec<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            location,
            segment,
            sentence,
            orig_sentence,
            url,
            categories,
            metadata,
        }
    }

    /// Document id followed by the `_`-prefixed page markers of this segment.
    pub fn location(&self) -> &str {
        self.location.as_ref()
    }

    /// Milestone number.
    pub fn segment(&self) -> u64 {
        self.segment
    }

    /// Cleaned text.
    pub fn sentence(&self) -> &str {
        self.sentence.as_ref()
    }

    /// Text as found in the document, page markers included.
    pub fn orig_sentence(&self) -> &str {
        self.orig_sentence.as_ref()
    }

    pub fn url(&self) -> &str {
        self.url.as_ref()
    }

    pub fn categories(&self) -> &[String] {
        self.categories.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Rename metadata keys that collide with a [RESERVED_FIELDS] name to `meta_<key>`,
/// so that both values are kept and serialized objects have unique keys.
pub fn with_reserved_fields(metadata: &Metadata) -> Metadata {
    let mut renamed = Metadata::new();
    for (key, value) in metadata {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            let mut new_key = format!("meta_{}", key);
            while metadata.contains_key(&new_key) || renamed.contains_key(&new_key) {
                new_key = format!("meta_{}", new_key);
            }
            warn!(
                "metadata key {:?} is a reserved field name, renamed to {:?}",
                key, new_key
            );
            renamed.insert(new_key, value.clone());
        } else {
            renamed.insert(key.clone(), value.clone());
        }
    }
    renamed
}
