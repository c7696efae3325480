//! STL decoding for print-cost estimation.
//!
//! This crate turns a raw STL byte buffer into a stream of triangles:
//!
//! - **Detection** - [`StlEncoding::detect`] decides binary vs ASCII by
//!   checking the declared triangle count against the buffer length
//! - **Binary** - [`read_stl_binary`] reads fixed 50-byte records
//! - **ASCII** - [`read_stl_ascii`] runs a line-oriented facet state machine
//!
//! Decoders never allocate a mesh. They push each triangle into a
//! [`TriangleSink`](mesh_types::TriangleSink) as soon as it is complete.
//! The crate performs no file I/O; callers own the buffer.
//!
//! # Example
//!
//! ```
//! use mesh_io::{read_stl, StlEncoding};
//! use mesh_types::Triangle;
//!
//! let bytes = [0u8; 84]; // binary header declaring zero triangles
//! let mut triangles: Vec<Triangle> = Vec::new();
//!
//! let encoding = read_stl(&bytes, &mut triangles).unwrap();
//! assert_eq!(encoding, StlEncoding::Binary);
//! assert!(triangles.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{read_stl, read_stl_ascii, read_stl_binary, StlEncoding};
