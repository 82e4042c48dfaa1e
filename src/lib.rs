//! A small **procedural solid modeling** library: compose axis-aligned cubes,
//! cuboids with rectangular through-holes, rectangular panels, triangles and
//! triangular prisms into one [`Mesh`], retire the panels that adjoining
//! pieces share, and write the result as STL or OBJ.
//!
//! ```
//! use blocksmith::Mesh;
//!
//! let mut mesh = Mesh::new("cup");
//! mesh.cuboid(0.0, 0.0, 0.0, 50.0, 50.0, 40.0, None, None, None)?
//!     .cuboid(0.0, 0.0, 40.0, 50.0, 50.0, 50.0, Some(5.0), Some(5.0), None)?;
//! mesh.deduplicate();
//! let stl = mesh.to_stl_ascii();
//! assert!(stl.starts_with("solid cup"));
//! # Ok::<(), blocksmith::errors::ValidationError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary `.stl` export through `stl_io`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to fingerprint faces and walls during deduplication

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use mesh::{Axis, Mesh};
