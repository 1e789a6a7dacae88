/*! Document sources.

- [Source] fetches the raw text of a document, [HttpSource] being the blocking HTTP implementation.
- [UrlList] resolves the list of documents to process.
!*/
mod http;
mod urls;

pub use http::{HttpSource, Source};
pub use urls::{scan_urls, UrlList};
