#![forbid(unsafe_code)]

//! Text layout for gridfmt: wrapping cell text to a column width.
//!
//! Widths are always display widths as defined by
//! [`gridfmt_core::text_width`], re-exported here for convenience.

pub mod wrap;

pub use gridfmt_core::text_width::{display_width, field_width};
pub use wrap::wrap;
