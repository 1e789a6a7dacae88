/*! Text transformers.

Transforms segment text before it is written out.

- [Normalizer] folds composite characters and applies the light Arabic normalization table.
- [Cleaner] normalizes, then scrubs everything that is not an Arabic letter.
!*/

mod cleaner;
mod normalizer;
mod transform;

pub use cleaner::{clean, Cleaner};
pub use normalizer::{normalize, Normalizer};
pub use transform::Transform;
