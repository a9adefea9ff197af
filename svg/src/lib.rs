//! Parsing and serialization of SVG path data.
//!
//! This crate is the textual boundary of the trazo workspace: it tokenizes
//! `path` data strings into the typed commands of `trazo_path`, replays
//! them through [`build_path`], and can print the resulting operations
//! back out in a normalized compact form with [`PathSerializer`].
//!
//! # Examples
//!
//! ```
//! use trazo_path::Path;
//! use trazo_svg::build_path;
//!
//! let path = build_path(Path::builder(), "M 0 0 L 10 0 L 10 10 z").unwrap();
//! ```

mod error;
mod parser;
mod serializer;

pub use crate::error::ParserError;
pub use crate::parser::{build_path, parse_path, PathParser};
pub use crate::serializer::PathSerializer;

pub use trazo_path as path;
