//! URL list resolution.
use std::path::PathBuf;

use lazy_static::lazy_static;
use log::{debug, log_enabled, Level};
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// Double-quoted strings starting with `https`.
    static ref QUOTED_URL: Regex = Regex::new(r#""(https.*?)""#).unwrap();
}

/// Where the urls to process come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlList {
    /// Urls given as is.
    Literal(Vec<String>),
    /// Files scanned for quoted `https` urls, in order.
    Files(Vec<PathBuf>),
}

impl UrlList {
    /// Build from command line arguments, that are file paths when `from_file` is set.
    pub fn new(args: Vec<String>, from_file: bool) -> Self {
        if from_file {
            Self::Files(args.into_iter().map(PathBuf::from).collect())
        } else {
            Self::Literal(args)
        }
    }

    /// Get the urls in order. Errors if a file can't be read.
    pub fn resolve(&self) -> Result<Vec<String>, Error> {
        match self {
            Self::Literal(urls) => Ok(urls.clone()),
            Self::Files(paths) => {
                let mut urls = Vec::new();
                for path in paths {
                    let content = std::fs::read_to_string(path)?;
                    let found = scan_urls(&content);
                    if log_enabled!(Level::Debug) {
                        debug!("found {} urls in {:?}", found.len(), path);
                    }
                    urls.extend(found);
                }
                Ok(urls)
            }
        }
    }
}

/// Get every double-quoted string of `content` that begins with `https`.
pub fn scan_urls(content: &str) -> Vec<String> {
    QUOTED_URL
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
