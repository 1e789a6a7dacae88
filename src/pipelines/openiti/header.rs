//! Header/body split and metadata extraction.
use log::debug;

use crate::error::Error;

use super::patterns::Dialect;
use super::types::Metadata;

/// Splits raw documents into their metadata and body.
#[derive(Debug, Clone, Default)]
pub struct HeaderParser {
    dialect: Dialect,
}

impl HeaderParser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Split `raw` on the header splitter and extract metadata from the header part.
    ///
    /// Errors with [Error::Structural] if the splitter is absent or appears more than once.
    /// Header lines that are not metadata lines are ignored,
    /// and a duplicated key keeps its last value.
    pub fn parse<'a>(&self, raw: &'a str) -> Result<(Metadata, &'a str), Error> {
        let splitter = self.dialect.header_splitter();
        let parts: Vec<&str> = raw.split(splitter).collect();
        let (header, body) = match parts.as_slice() {
            [header, body] => (*header, *body),
            _ => {
                return Err(Error::Structural(format!(
                    "expected a single {:?} header splitter, found {}",
                    splitter,
                    parts.len() - 1
                )))
            }
        };

        let metadata: Metadata = self
            .dialect
            .meta_line()
            .captures_iter(header)
            .filter_map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(key), Some(value)) => {
                    Some((key.as_str().to_string(), value.as_str().to_string()))
                }
                _ => None,
            })
            .collect();

        debug!(
            "header: {} metadata entries, body: {} bytes",
            metadata.len(),
            body.len()
        );

        Ok((metadata, body))
    }
}

/// Parse with the OpenITI dialect.
pub fn parse(raw: &str) -> Result<(Metadata, &str), Error> {
    HeaderParser::default().parse(raw)
}
