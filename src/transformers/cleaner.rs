//! Arabic-only cleaning.
//!
//! Normalizes the text with [Normalizer], then replaces every character that is not
//! an Arabic-script letter (Latin letters, digits of any script, punctuation, diacritics,
//! symbols, line breaks) with a space, and collapses space runs.
//!
//! The output only holds Arabic letters and single spaces, so cleaning is idempotent.
use lazy_static::lazy_static;
use regex::Regex;

use super::{Normalizer, Transform};

lazy_static! {
    /// Any character that is not a letter, or not in the Arabic script.
    static ref NON_ARABIC_LETTER: Regex = Regex::new(r"[\P{L}\P{Arabic}]").unwrap();
    static ref MULTIPLE_SPACES: Regex = Regex::new(r" {2,}").unwrap();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Cleaner {
    normalizer: Normalizer,
}

impl Cleaner {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }
}

impl Transform for Cleaner {
    fn transform(&self, text: &str) -> String {
        let text = self.normalizer.transform(text);
        let text = NON_ARABIC_LETTER.replace_all(&text, " ");
        MULTIPLE_SPACES.replace_all(&text, " ").into_owned()
    }
}

/// Shorthand for `Cleaner::default().transform(text)`.
pub fn clean(text: &str) -> String {
    Cleaner::default().transform(text)
}
