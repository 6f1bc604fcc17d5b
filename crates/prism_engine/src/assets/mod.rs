//! Asset parsing
//!
//! Mesh files are parsed into [`crate::render::geometry::MeshData`]; the
//! renderer decides which extensions it accepts and owns buffer upload.

pub mod obj_loader;

pub use obj_loader::{parse_obj, parse_obj_source, ObjError};
