//! # openiti2act
//!
//! Turns [OpenITI](https://openiti.org) corpus texts into JSON Lines files ready to be
//! loaded into ACT (Allocate Connections between Texts, <https://textreuse.info/en/>).
//!
//! Each text is cut at its milestone markers (`ms1`, `ms2`, ...). Every piece becomes a
//! record holding its location (document id and page markers), milestone number,
//! cleaned and original text, the source url, categories and the document metadata.
//!
//! ```no_run
//! use openiti2act::pipelines::{Openiti2Act, Options, Pipeline};
//!
//! let p = Openiti2Act::new(
//!     "dst".into(),
//!     vec!["https://raw.githubusercontent.com/OpenITI/0600AH/master/data/0597IbnJawzi/0597IbnJawzi.Muntazam/0597IbnJawzi.Muntazam.Shamela0023833-ara1".to_string()],
//!     Options::default(),
//! );
//! let report = p.run().unwrap();
//! println!("{} segments", report.segments().len());
//! ```
pub mod error;
pub mod io;
pub mod pipelines;
pub mod sources;
pub mod transformers;
