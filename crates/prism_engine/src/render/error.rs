//! Rendering error types

use crate::assets::ObjError;
use thiserror::Error;

/// Errors from the rendering layer
///
/// Asset and shader failures are local and recoverable: the caller decides
/// whether scene construction continues. Data-consistency failures signal
/// a corrupted scene and are never silently coerced.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shader source failed to compile; no usable handle is produced
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    /// Mesh file extension is not a supported format
    #[error("unsupported mesh format: {0}")]
    UnsupportedMeshFormat(String),

    /// Mesh file content could not be parsed
    #[error("failed to parse mesh file: {0}")]
    MeshParse(#[from] ObjError),

    /// I/O failure while reading shader or asset files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Geometry creation was given no vertex positions to bound
    #[error("geometry has no vertex positions, cannot compute bounds")]
    EmptyGeometry,

    /// A draw item or entity references a table index that does not exist
    ///
    /// Indicates a corrupted scene graph; fatal by design.
    #[error("scene data is inconsistent: {what} index {index} does not exist")]
    DataConsistency {
        /// What table was indexed (for example "material" or "draw item")
        what: &'static str,
        /// The missing index
        index: usize,
    },
}
