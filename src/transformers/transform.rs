//! Transform trait.

/// Pure text transform: two equal inputs give two equal outputs.
pub trait Transform {
    /// Borrows the text and returns its transformed copy.
    fn transform(&self, text: &str) -> String;
}
