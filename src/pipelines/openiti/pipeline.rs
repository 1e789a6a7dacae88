//! OpenITI to ACT pipeline.
//!
//! Documents are processed one after the other, each one to completion:
//! fetch, header split, segmentation, then writing to `<dst>/<id>.json`.
//!
//! A document that can't be fetched, split or segmented is recorded as a [Failure]
//! and the pipeline moves on to the next one.
//! Failing to write is fatal and stops the run. Records already written are kept.
use std::io::Write;
use std::path::PathBuf;

use log::{debug, error, info};
use url::Url;

use crate::error::Error;
use crate::io::{SegmentWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{HttpSource, Source, UrlList};
use crate::transformers::Cleaner;

use super::patterns::Dialect;
use super::types::{Segment, SourceDocument};
use super::{HeaderParser, Segmenter};

/// Pipeline options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tags attached to every segment.
    pub categories: Vec<String>,
    /// Urls are paths of files to scan for urls.
    pub from_file: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            categories: vec!["OpenITI".to_string()],
            from_file: false,
        }
    }
}

/// A document that could not be processed.
#[derive(Debug)]
pub struct Failure {
    pub url: String,
    pub error: Error,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    segments: Vec<Segment>,
    processed: usize,
    failures: Vec<Failure>,
}

impl Report {
    /// Segments of the last successfully processed document.
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_ref()
    }

    /// Number of successfully processed documents.
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn failures(&self) -> &[Failure] {
        self.failures.as_ref()
    }

    /// Write a `url<TAB>error` line per failure.
    pub fn write_failures<W: Write>(&self, mut w: W) -> Result<(), Error> {
        for failure in &self.failures {
            writeln!(w, "{}\t{}", failure.url, failure.error)?;
        }
        Ok(())
    }
}

pub struct Openiti2Act<S = HttpSource> {
    dst: PathBuf,
    urls: UrlList,
    categories: Vec<String>,
    source: S,
    header: HeaderParser,
    segmenter: Segmenter,
}

impl Openiti2Act<HttpSource> {
    /// Create a pipeline fetching documents over HTTP.
    ///
    /// `urls` are either urls or, if [Options::from_file] is set, files listing them.
    pub fn new(dst: PathBuf, urls: Vec<String>, options: Options) -> Self {
        Self::with_source(dst, urls, options, HttpSource::default())
    }
}

impl<S: Source> Openiti2Act<S> {
    pub fn with_source(dst: PathBuf, urls: Vec<String>, options: Options, source: S) -> Self {
        debug!("using options {:?}", options);
        Self {
            dst,
            urls: UrlList::new(urls, options.from_file),
            categories: options.categories,
            source,
            header: HeaderParser::default(),
            segmenter: Segmenter::default(),
        }
    }

    /// Use another set of structural patterns.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.header = HeaderParser::new(dialect.clone());
        self.segmenter = Segmenter::new(dialect, Cleaner::default());
        self
    }

    /// Fetch a document and split its header.
    fn load(&self, url: &str) -> Result<SourceDocument, Error> {
        let parsed = Url::parse(url)?;
        let raw = self.source.fetch(&parsed)?;
        SourceDocument::from_raw(url, &parsed, &raw, &self.header)
    }

    /// Segment a whole document. Errors on the first malformed milestone.
    fn segment(&self, document: &SourceDocument) -> Result<Vec<Segment>, Error> {
        self.segmenter
            .segment(document, document.url(), &self.categories)
            .collect()
    }

    fn write(&self, document: &SourceDocument, segments: &[Segment]) -> Result<(), Error> {
        if segments.is_empty() {
            return Ok(());
        }
        let mut writer = SegmentWriter::new(&self.dst, document.id())?;
        writer.write(segments)?;
        writer.close()
    }
}

impl<S: Source> Pipeline<Report> for Openiti2Act<S> {
    fn run(&self) -> Result<Report, Error> {
        std::fs::create_dir_all(&self.dst)?;
        let urls = self.urls.resolve()?;
        let nb_urls = urls.len();
        info!("processing {} documents into {:?}", nb_urls, self.dst);

        let mut report = Report::default();
        for (idx, url) in urls.into_iter().enumerate() {
            info!("[{}/{}] {}", idx + 1, nb_urls, url);
            let result = self.load(&url).and_then(|document| {
                let segments = self.segment(&document)?;
                Ok((document, segments))
            });

            match result {
                Ok((document, segments)) => {
                    self.write(&document, &segments)?;
                    info!("{}: {} segments", document.id(), segments.len());
                    report.processed += 1;
                    report.segments = segments;
                }
                Err(error) => {
                    error!("could not process {}: {}", url, error);
                    report.failures.push(Failure { url, error });
                }
            }
        }

        info!(
            "done: {} processed, {} failed",
            report.processed,
            report.failures.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const DOC: &str = "######OpenITI#
#META# 000.SortField\t:: Shamela_0023833
#META# 010.AuthorNAME\t:: ابن الجوزي
#META#Header#End#
PageV01P001 قال ms1 حدثنا ms2";

    fn gen_source() -> HashMap<String, String> {
        let mut source = HashMap::new();
        source.insert("https://example.org/data/good-ara1".to_string(), DOC.to_string());
        source.insert(
            "https://example.org/data/headless-ara1".to_string(),
            "foo ms1".to_string(),
        );
        source
    }

    #[test]
    fn options_default() {
        let options = Options::default();
        assert_eq!(options.categories, vec!["OpenITI".to_string()]);
        assert!(!options.from_file);
    }

    #[test]
    fn failures_do_not_stop_run() {
        let dst = tempfile::tempdir().unwrap();
        let urls = vec![
            "https://example.org/data/headless-ara1".to_string(),
            "not a url".to_string(),
            "https://example.org/data/missing-ara1".to_string(),
            "https://example.org/data/good-ara1".to_string(),
        ];
        let p = Openiti2Act::with_source(
            dst.path().to_path_buf(),
            urls,
            Options::default(),
            gen_source(),
        );

        let report = p.run().unwrap();

        assert_eq!(report.processed(), 1);
        assert_eq!(report.segments().len(), 2);
        assert_eq!(report.failures().len(), 3);
        assert!(matches!(report.failures()[0].error, Error::Structural(_)));
        assert!(matches!(report.failures()[1].error, Error::Url(_)));
        assert!(!dst.path().join("headless-ara1.json").exists());
        assert!(dst.path().join("good-ara1.json").exists());

        let mut out = Vec::new();
        report.write_failures(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("https://example.org/data/headless-ara1\tstructural error"));
    }

    #[test]
    fn unwritable_destination() {
        let dst = tempfile::tempdir().unwrap();
        // a file where the destination folder should be
        let blocker = dst.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let p = Openiti2Act::with_source(
            blocker,
            vec!["https://example.org/data/good-ara1".to_string()],
            Options::default(),
            gen_source(),
        );
        assert!(p.run().is_err());
    }

    #[test]
    fn segments_keep_given_url() {
        let dst = tempfile::tempdir().unwrap();
        let given = "https://EXAMPLE.org/data/../data/good-ara1";
        let p = Openiti2Act::with_source(
            dst.path().to_path_buf(),
            vec![given.to_string()],
            Options::default(),
            gen_source(),
        );

        let report = p.run().unwrap();

        assert_eq!(report.processed(), 1);
        for seg in report.segments() {
            assert_eq!(seg.url(), given);
            assert!(seg.location().starts_with("good-ara1_"));
        }
        assert!(dst.path().join("good-ara1.json").exists());
    }

    #[test]
    fn other_dialect() {
        let dst = tempfile::tempdir().unwrap();
        let url = "https://example.org/data/kitab-ara1";
        let mut source = HashMap::new();
        source.insert(
            url.to_string(),
            "@Title=Kitab\n@@END@@\np001 alpha §1 beta §2 p002 gamma §3 tail".to_string(),
        );
        let dialect = Dialect::new("@@END@@", r"@(\w+)=(.*?)\n", "§[0-9]+", "p[0-9]{3}").unwrap();

        let p = Openiti2Act::with_source(
            dst.path().to_path_buf(),
            vec![url.to_string()],
            Options::default(),
            source.clone(),
        )
        .with_dialect(dialect);
        let report = p.run().unwrap();

        assert!(report.failures().is_empty());
        let segments = report.segments();
        let numbers: Vec<u64> = segments.iter().map(|s| s.segment()).collect();
        let locations: Vec<&str> = segments.iter().map(|s| s.location()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(
            locations,
            vec!["kitab-ara1_p001", "kitab-ara1_p001", "kitab-ara1_p002"]
        );
        assert_eq!(segments[2].orig_sentence(), " p002 gamma ");
        assert_eq!(segments[0].metadata()["Title"], "Kitab");

        // the OpenITI dialect finds no header splitter in this document
        let p = Openiti2Act::with_source(
            dst.path().join("openiti"),
            vec![url.to_string()],
            Options::default(),
            source,
        );
        let report = p.run().unwrap();
        assert!(matches!(report.failures()[0].error, Error::Structural(_)));
    }
}
