//! Spherecast ray casting renderer
//!
//! Renders a fixed scene (one sphere, one point light, white background) to
//! a PNG using per-pixel ray casting, a Phong-like shading curve and repeated
//! 2x2 box-filter supersampling.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod antialias;
pub mod camera;
pub mod color;
pub mod output;
pub mod sphere;
