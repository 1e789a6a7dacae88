use std::path::Path;

use crate::error::Error;

pub trait WriterTrait {
    type Item;

    /// Create a writer for the file named `name` in the `dst` folder.
    fn new(dst: &Path, name: &str) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: &[Self::Item]) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    fn close(&mut self) -> Result<(), Error>;
}
