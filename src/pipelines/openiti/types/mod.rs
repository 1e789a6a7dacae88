/*! OpenITI document and segment types.

* !*/
mod document;
mod segment;

pub use document::{document_id, Metadata, SourceDocument};
pub use segment::{with_reserved_fields, Segment, RESERVED_FIELDS};
