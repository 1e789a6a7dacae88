/*!
# Segment writing

[SegmentWriter] appends segments to a JSON Lines file named after the document.
!*/
mod writer_segment;
mod writertrait;
pub use writer_segment::SegmentWriter;
pub use writertrait::WriterTrait;
