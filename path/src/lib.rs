//! Interpretation of SVG-style path commands into primitive drawing
//! operations.
//!
//! The input is a stream of typed commands ([`PathCommand`]) carrying one or
//! more groups of raw parameters, exactly as they appear in SVG `path` data
//! or Android VectorDrawable `pathData`. [`replay`] walks the stream with an
//! explicit interpreter state and feeds a [`PathBuilder`] sink a flat
//! sequence of move/line/cubic/close operations, expanding elliptical arcs
//! and resolving the implicit control points of the smooth curve commands
//! along the way.
//!
//! # Examples
//!
//! ```
//! use trazo_path::{replay, Build, CommandKind, Path, PathCommand};
//!
//! let commands = [
//!     PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
//!     PathCommand::new(CommandKind::LineRel, vec![10.0, 0.0, 0.0, 10.0]),
//!     PathCommand::new(CommandKind::Close, vec![]),
//! ];
//!
//! let mut builder = Path::builder();
//! replay(&commands, &mut builder).unwrap();
//! let path = builder.build();
//!
//! for op in &path {
//!     println!("{:?}", op);
//! }
//! ```

mod builder;
mod commands;
mod ops;
mod path;
mod replay;
mod state;

pub use crate::builder::{Build, PathBuilder};
pub use crate::commands::{CommandKind, PathCommand};
pub use crate::ops::PathOp;
pub use crate::path::{Builder, Iter, Path, Verb};
pub use crate::replay::{replay, ReplayError};
pub use crate::state::PathState;

pub use trazo_geom as geom;
pub use trazo_geom::math;
