/*!
# IO utilities

Segment saving. Each source document gets its own JSON Lines file.
!*/
pub mod writer;
pub use writer::{SegmentWriter, WriterTrait};
