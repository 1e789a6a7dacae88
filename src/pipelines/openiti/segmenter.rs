/*! Milestone segmentation.

Walks a document body and emits one [Segment] per milestone marker,
holding the text found between the previous milestone and this one.

Page markers found in that text become the segment location (`<id>_<page>_<page>...`).
When there is none, the last page marker seen in the document is used instead,
so that every segment has a location:

```text
PageV01P001 foo ms1 bar ms2 PageV01P002 baz ms3 qux
```

gives `<id>_PageV01P001` for `ms1` and `ms2`, `<id>_PageV01P002` for `ms3`.
Text after the last milestone (`qux`) is dropped.
!*/
use itertools::Itertools;

use crate::error::Error;
use crate::transformers::{Cleaner, Transform};

use super::patterns::Dialect;
use super::types::{with_reserved_fields, Metadata, Segment, SourceDocument};

#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    dialect: Dialect,
    cleaner: Cleaner,
}

impl Segmenter {
    pub fn new(dialect: Dialect, cleaner: Cleaner) -> Self {
        Self { dialect, cleaner }
    }

    /// Lazily segment `document`.
    ///
    /// Each call starts over from the beginning of the body with an empty current page.
    /// Items are in document order. An item is an error if its milestone number cannot be parsed.
    pub fn segment<'a>(
        &'a self,
        document: &'a SourceDocument,
        url: &'a str,
        categories: &'a [String],
    ) -> impl Iterator<Item = Result<Segment, Error>> + 'a {
        let metadata = with_reserved_fields(document.metadata());

        self.dialect
            .to_milestone()
            .captures_iter(document.body())
            .filter_map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(text), Some(marker)) => Some((text.as_str(), marker.as_str())),
                _ => None,
            })
            .scan(String::new(), move |current_page, (text, marker)| {
                let pages = self.pages(text, current_page);
                Some(self.build(
                    document, url, categories, &metadata, &pages, text, marker,
                ))
            })
    }

    /// Page markers in `text`, updating `current_page` to the last one.
    ///
    /// Falls back to `current_page` alone when `text` has none.
    fn pages(&self, text: &str, current_page: &mut String) -> Vec<String> {
        let pages: Vec<String> = self
            .dialect
            .page()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        match pages.last() {
            Some(last) => {
                *current_page = last.clone();
                pages
            }
            None => vec![current_page.clone()],
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        &self,
        document: &SourceDocument,
        url: &str,
        categories: &[String],
        metadata: &Metadata,
        pages: &[String],
        text: &str,
        marker: &str,
    ) -> Result<Segment, Error> {
        let location = format!("{}_{}", document.id(), pages.iter().join("_"));
        let number = milestone_number(marker)?;

        Ok(Segment::new(
            location,
            number,
            self.cleaner.transform(text),
            text.to_string(),
            url.to_string(),
            categories.to_vec(),
            metadata.clone(),
        ))
    }
}

/// Parse the digits following a milestone marker prefix (`ms12` -> 12).
fn milestone_number(marker: &str) -> Result<u64, Error> {
    marker
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse::<u64>()
        .map_err(|e| Error::Parse(format!("milestone {:?}: {}", marker, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_document(body: &str, metadata: Metadata) -> SourceDocument {
        SourceDocument::new(
            "doc".to_string(),
            "https://example.org/doc".to_string(),
            metadata,
            body.to_string(),
        )
    }

    fn categories() -> Vec<String> {
        vec!["OpenITI".to_string()]
    }

    fn segment_all(body: &str) -> Vec<Segment> {
        let doc = gen_document(body, Metadata::new());
        let cats = categories();
        let s = Segmenter::default();
        let segments: Result<Vec<Segment>, Error> = s.segment(&doc, doc.url(), &cats).collect();
        segments.unwrap()
    }

    #[test]
    fn no_page_markers() {
        let segments = segment_all("hello ms1 world ms2");

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].orig_sentence(), "hello ");
        assert_eq!(segments[0].location(), "doc_");
        assert_eq!(segments[0].segment(), 1);
        assert_eq!(segments[1].orig_sentence(), " world ");
        assert_eq!(segments[1].location(), "doc_");
        assert_eq!(segments[1].segment(), 2);
    }

    #[test]
    fn no_milestones() {
        assert!(segment_all("PageV01P001 قال حدثنا").is_empty());
        assert!(segment_all("").is_empty());
    }

    #[test]
    fn page_carried_forward() {
        let segments = segment_all("PageV01P001 قال ms1 حدثنا ms2\nأخبرنا ms3");

        assert_eq!(segments.len(), 3);
        for seg in &segments {
            assert_eq!(seg.location(), "doc_PageV01P001");
        }
        assert_eq!(segments[0].orig_sentence(), "PageV01P001 قال ");
        assert_eq!(segments[0].sentence(), " قال ");
        assert_eq!(segments[2].orig_sentence(), "\nأخبرنا ");
        assert_eq!(segments[2].sentence(), " اخبرنا ");
    }

    #[test]
    fn several_pages_in_one_segment() {
        let segments = segment_all("a PageV01P001 b PageV01P002 c ms1 d ms2 PageV02P001 e ms3");

        let locations: Vec<&str> = segments.iter().map(|s| s.location()).collect();
        assert_eq!(
            locations,
            vec![
                "doc_PageV01P001_PageV01P002",
                "doc_PageV01P002",
                "doc_PageV02P001"
            ]
        );
    }

    #[test]
    fn trailing_content_dropped() {
        let segments = segment_all("foo ms1 bar PageV01P002 baz");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].location(), "doc_");
    }

    #[test]
    fn segment_count_matches_milestones() {
        let body = (1..=250)
            .map(|i| format!("نص {} ms{} ", i, i))
            .collect::<String>();
        let segments = segment_all(&body);

        assert_eq!(segments.len(), 250);
        // numbers are taken as is, no ordering assumed
        assert_eq!(segments[249].segment(), 250);
    }

    #[test]
    fn metadata_propagated() {
        let mut metadata = Metadata::new();
        metadata.insert("AuthorNAME".to_string(), "ابن الجوزي".to_string());
        metadata.insert("SortField".to_string(), "Shamela_0023833".to_string());
        let doc = gen_document("foo ms1 bar ms2", metadata.clone());
        let cats = vec!["OpenITI".to_string(), "history".to_string()];
        let s = Segmenter::default();

        for seg in s.segment(&doc, doc.url(), &cats) {
            let seg = seg.unwrap();
            assert_eq!(seg.metadata(), &metadata);
            assert_eq!(seg.categories(), cats.as_slice());
            assert_eq!(seg.url(), "https://example.org/doc");
        }
    }

    #[test]
    fn restartable() {
        let doc = gen_document("PageV01P001 foo ms1 bar ms2", Metadata::new());
        let cats = categories();
        let s = Segmenter::default();

        let first: Vec<Segment> = s.segment(&doc, doc.url(), &cats).map(Result::unwrap).collect();
        let second: Vec<Segment> = s.segment(&doc, doc.url(), &cats).map(Result::unwrap).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_milestone_number() {
        let doc = gen_document("foo ms99999999999999999999999 bar ms2", Metadata::new());
        let cats = categories();
        let s = Segmenter::default();
        let mut segments = s.segment(&doc, doc.url(), &cats);

        assert!(matches!(segments.next(), Some(Err(Error::Parse(_)))));
        assert!(matches!(segments.next(), Some(Ok(_))));
    }

    #[test]
    fn milestone_numbers() {
        assert_eq!(milestone_number("ms1").unwrap(), 1);
        assert_eq!(milestone_number("ms0042").unwrap(), 42);
        assert!(milestone_number("ms").is_err());
    }
}
