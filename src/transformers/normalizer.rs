//! Light Arabic normalization.
//!
//! Fixes alifs and alif maqsuras, drops hamzas and folds ta marbuta:
//!
//! ```text
//! ألف الف إلف آلف ٱلف -> الف الف الف الف الف
//! يحيى                -> يحيي
//! مقرئ فيء            -> مقر في
//! ```
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::Transform;

/// Ordered substitution table.
///
/// Each rule runs on the output of the previous ones, so a rule may be shadowed
/// by an earlier one (`ىء` never matches once `ى` has been folded to `ي`).
const SUBSTITUTIONS: &[(&str, &str)] = &[
    // alifs
    ("أ", "ا"),
    ("ٱ", "ا"),
    ("آ", "ا"),
    ("إ", "ا"),
    // alif maqsura
    ("ى", "ي"),
    // hamzas
    ("يء", "ي"),
    ("ىء", "ي"),
    ("ؤ", "و"),
    // word-final hamza on ya is a trailing hamza, with its vowel marks
    (r"ئ\p{Mn}*\b", ""),
    ("ئ", "ي"),
    ("ء", ""),
    // ta marbuta
    ("ة", "ه"),
];

lazy_static! {
    static ref RULES: Vec<(Regex, &'static str)> = SUBSTITUTIONS
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("invalid substitution pattern"),
                *replacement,
            )
        })
        .collect();
}

/// Light normalizer. Stateless, see module documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    /// Fold composite and compatibility sequences (NFKC).
    fn fold_composites(text: &str) -> String {
        text.nfkc().collect()
    }
}

impl Transform for Normalizer {
    fn transform(&self, text: &str) -> String {
        RULES
            .iter()
            .fold(Self::fold_composites(text), |text, (rule, replacement)| {
                rule.replace_all(&text, *replacement).into_owned()
            })
    }
}

/// Shorthand for `Normalizer.transform(text)`.
pub fn normalize(text: &str) -> String {
    Normalizer.transform(text)
}
