//! trazo: SVG path data in, drawing primitives out.
//!
//! Path data is the compact command encoding shared by SVG `path` elements
//! and Android VectorDrawable `pathData` attributes. This crate parses it,
//! replays it through a stateful interpreter (resolving relative
//! coordinates, smooth-curve reflections and elliptical arcs) and hands
//! the caller a flat sequence of move/line/cubic/close operations that any
//! rasterizer or writer can consume directly.
//!
//! The work is split across three member crates, re-exported here:
//!
//! - [`geom`]: elliptical arc to cubic bézier conversion.
//! - [`path`]: the typed command model, the interpreter and a simple path
//!   storage type.
//! - [`svg`]: path-data tokenization and normalized re-serialization.
//!
//! # Examples
//!
//! ```
//! use trazo::path::Path;
//! use trazo::svg::build_path;
//!
//! let path = build_path(Path::builder(), "M10,10 a5,5 0 0,1 10,0 z").unwrap();
//!
//! for op in &path {
//!     println!("{:?}", op);
//! }
//! ```

pub use trazo_geom as geom;
pub use trazo_path as path;
pub use trazo_svg as svg;

pub use crate::geom::math;
pub use crate::path::{Path, PathOp};
