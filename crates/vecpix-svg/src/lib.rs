//! Document model for **vecpix**: an SVG file loaded into an owned tree of
//! tagged attribute bags.
//!
//! The crate does no interpretation: tag names and attribute strings are kept
//! verbatim so the scene builder decides what is valid.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Document`, `Node`, `Attr` |
//! | [`error`] | `LoadError` |
//! | [`loader`] | `load_file` / `parse_str` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use vecpix_svg::parse_str;
//!
//! let src = r#"
//!     <svg width="100" height="50">
//!         <circle cx="10" cy="10" r="4" fill="red"/>
//!     </svg>
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.tag(), "svg");
//! assert_eq!(doc.root.children()[0].attr("fill"), Some("red"));
//! ```

pub mod ast;
pub mod error;
pub mod loader;

pub use ast::{Attr, Document, Node};
pub use error::LoadError;
pub use loader::{load_file, parse_str};
