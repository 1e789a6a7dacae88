use std::collections::HashMap;

use log::debug;
use url::Url;

use crate::error::Error;

/// Provides the raw text of a document.
pub trait Source {
    fn fetch(&self, url: &Url) -> Result<String, Error>;
}

/// Fetches documents with blocking GET requests.
/// Non-success statuses are errors.
#[derive(Debug, Default)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Source for HttpSource {
    fn fetch(&self, url: &Url) -> Result<String, Error> {
        debug!("fetching {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// In-memory source, keyed by url string.
impl Source for HashMap<String, String> {
    fn fetch(&self, url: &Url) -> Result<String, Error> {
        self.get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::Custom(format!("no document at {}", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_rejects_other_schemes() {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(1))
            .build()
            .unwrap();
        let source = HttpSource::new(client);

        let url = Url::parse("file:///tmp/doc-ara1").unwrap();
        assert!(matches!(source.fetch(&url), Err(Error::Reqwest(_))));
    }

    #[test]
    fn memory_source() {
        let mut source = HashMap::new();
        source.insert("https://example.org/a".to_string(), "foo".to_string());

        let a = Url::parse("https://example.org/a").unwrap();
        let b = Url::parse("https://example.org/b").unwrap();
        assert_eq!(source.fetch(&a).unwrap(), "foo");
        assert!(source.fetch(&b).is_err());
    }
}
