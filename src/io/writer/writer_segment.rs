/*! JSON Lines segment writer.

Appends [Segment]s to `<dst>/<name>.json`, one JSON object per line.
The file is created on first write, and appended to if it already exists:
running twice on the same destination duplicates records.
!*/
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Error;
use crate::pipelines::openiti::types::Segment;

use super::WriterTrait;

pub struct SegmentWriter {
    path: PathBuf,
    file: Option<File>,
}

impl SegmentWriter {
    /// Get a reference to the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the output file in append mode if it is not opened yet.
    fn handle(&mut self) -> Result<&mut File, Error> {
        if self.file.is_none() {
            debug!("opening {:?}", self.path);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| Error::Custom(format!("could not open {:?}", self.path)))
    }
}

impl WriterTrait for SegmentWriter {
    type Item = Segment;

    /// Nothing is created until a write is performed.
    fn new(dst: &Path, name: &str) -> Result<Self, Error> {
        Ok(Self {
            path: dst.join(format!("{}.json", name)),
            file: None,
        })
    }

    fn write(&mut self, segments: &[Segment]) -> Result<(), Error> {
        let mut lines = String::new();
        for segment in segments {
            lines += &serde_json::to_string(segment)?;
            lines.push('\n');
        }
        self.handle()?.write_all(lines.as_bytes())?;

        Ok(())
    }

    fn write_single(&mut self, segment: &Segment) -> Result<(), Error> {
        let mut line = serde_json::to_vec(segment)?;
        line.push(b'\n');
        self.handle()?.write_all(&line)?;

        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        match self.file.take() {
            Some(mut file) => file.flush()?,
            None => warn!("trying to close an unopened writer for {:?}", self.path),
        }
        Ok(())
    }
}
