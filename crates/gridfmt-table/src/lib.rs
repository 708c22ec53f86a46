#![forbid(unsafe_code)]

//! Table engine: parse plain-text tables, reflow them, render bordered grids.
//!
//! # Role in gridfmt
//! `gridfmt-table` turns a block of raw lines (grid-drawn, pipe-delimited or
//! whitespace-aligned) into a rectangular [`Table`] and draws it back as a
//! normalized grid. Widths are display widths, so tables holding CJK text
//! stay aligned.
//!
//! # Primary operations
//! - [`parse`]: raw lines to a rectangular table; never fails.
//! - [`read_border_widths`]: column widths from an existing border, the
//!   input to reflow. Fails with [`TableError::NoBorderFound`].
//! - [`render`]: table to bordered lines, content-sized or reflowed to
//!   explicit widths.
//! - [`wrap`]: the cell wrapper used by reflow.
//!
//! # Example
//! ```
//! use gridfmt_table::{parse, render};
//!
//! let table = parse(&["Name  Age", "Alice  30", "Bob    7"]);
//! let lines = render(&table, None);
//! assert_eq!(lines[0], "+-------+-----+");
//! assert_eq!(lines[2], "+=======+=====+");
//! ```
//!
//! Every operation is a pure function of its input; the crate holds no
//! state and all types are `Send + Sync`.

pub mod border;
pub mod error;
pub mod parse;
pub mod region;
pub mod render;
pub mod row;
pub mod table;

pub use border::read_border_widths;
pub use error::TableError;
pub use gridfmt_text::wrap;
pub use parse::parse;
pub use region::{format_region, reflow_region, table_bounds};
pub use render::render;
pub use table::Table;
