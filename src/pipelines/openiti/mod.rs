/*! OpenITI to ACT pipeline.

Turns OpenITI mARkdown texts into ACT (Allocate Connections between Texts) records:

1. [header] splits the metadata block from the body,
1. [segmenter] cuts the body at each milestone and cleans the text,
1. [pipeline] fetches documents and writes their segments as JSON Lines.
!*/
pub mod header;
pub mod patterns;
pub mod pipeline;
pub mod segmenter;
pub mod types;

pub use header::HeaderParser;
pub use patterns::Dialect;
pub use pipeline::{Failure, Openiti2Act, Options, Report};
pub use segmenter::Segmenter;
