/*! Structural patterns of OpenITI mARkdown documents.

The patterns below are the only schema a document has:

```text
######OpenITI#
#META# 000.SortField	:: Shamela_0023833
#META# 010.AuthorNAME	:: ...
#META#Header#End#
... PageV01P001 ... ms1 ... ms2 ...
```

- [HEADER_SPLITTER] separates the metadata block from the body, and must appear exactly once.
- [META_LINE] matches a metadata line, capturing the dotted key (without its numeric prefix) and the value.
- [MILESTONE] is the sentence boundary marker, `ms` followed by its sequence number.
- [PAGE] is either a `PageV<vol>P<page>` marker or a bare four-digit page number.

Other corpus dialects can be supported by building a [Dialect] from other patterns.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

pub const HEADER_SPLITTER: &str = "#META#Header#End#";
pub const META_LINE: &str = r"#META# .*?\.(.*?)\t:: (.*?)\r?\n";
pub const MILESTONE: &str = r"ms[0-9]+";
pub const PAGE: &str = r"PageV[^P]{2}P[0-9]{3}|[0-9]{4}";

lazy_static! {
    static ref OPENITI: Dialect =
        Dialect::new(HEADER_SPLITTER, META_LINE, MILESTONE, PAGE).expect("invalid OpenITI patterns");
}

/// Compiled set of structural patterns.
#[derive(Debug, Clone)]
pub struct Dialect {
    header_splitter: String,
    meta_line: Regex,
    to_milestone: Regex,
    page: Regex,
}

impl Dialect {
    /// Compile a dialect.
    ///
    /// `meta_line` must have exactly two capture groups (key, value).
    /// `milestone` must not hold capture groups of its own.
    pub fn new(
        header_splitter: &str,
        meta_line: &str,
        milestone: &str,
        page: &str,
    ) -> Result<Self, Error> {
        let meta_line = Regex::new(meta_line)?;
        if meta_line.captures_len() != 3 {
            return Err(Error::Custom(format!(
                "metadata pattern {:?} must capture a key and a value",
                meta_line.as_str()
            )));
        }

        // text up to (and not including) the next milestone, across line breaks
        let to_milestone = Regex::new(&format!("(?s)(.*?)({})", milestone))?;
        if to_milestone.captures_len() != 3 {
            return Err(Error::Custom(format!(
                "milestone pattern {:?} must not have capture groups",
                milestone
            )));
        }

        Ok(Self {
            header_splitter: header_splitter.to_string(),
            meta_line,
            to_milestone,
            page: Regex::new(page)?,
        })
    }

    /// The OpenITI mARkdown dialect.
    pub fn openiti() -> Self {
        OPENITI.clone()
    }

    pub fn header_splitter(&self) -> &str {
        &self.header_splitter
    }

    pub fn meta_line(&self) -> &Regex {
        &self.meta_line
    }

    /// Captures `(preceding text, milestone marker)`.
    pub fn to_milestone(&self) -> &Regex {
        &self.to_milestone
    }

    pub fn page(&self) -> &Regex {
        &self.page
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::openiti()
    }
}
