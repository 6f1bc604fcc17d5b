//! OBJ file loader for 3D models

use crate::render::geometry::MeshData;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from OBJ parsing
#[derive(Error, Debug)]
pub enum ObjError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A numeric field failed to parse
    #[error("parse error: {0}")]
    ParseError(String),
    /// The file structure is not valid OBJ
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Parse an OBJ file into mesh attribute arrays
pub fn parse_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, ObjError> {
    let source = fs::read_to_string(path)?;
    parse_obj_source(&source)
}

/// Parse OBJ text into mesh attribute arrays
///
/// Supports `v`/`vt`/`vn`/`f` statements with `v`, `v/vt`, `v//vn`, and
/// `v/vt/vn` face references; faces with more than three vertices are
/// fan-triangulated. Each distinct position/uv/normal triple becomes one
/// output vertex so the attribute arrays stay parallel under a single
/// index buffer.
pub fn parse_obj_source(source: &str) -> Result<MeshData, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();

    let mut data = MeshData::default();
    let mut seen: HashMap<(usize, Option<usize>, Option<usize>), u32> = HashMap::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "v" => {
                positions.push(parse_vec3(&parts)?);
            }
            "vn" => {
                normals.push(parse_vec3(&parts)?);
            }
            "vt" => {
                if parts.len() < 3 {
                    return Err(ObjError::InvalidFormat(format!(
                        "texture coordinate needs 2 values: {line}"
                    )));
                }
                let u = parse_float(parts[1])?;
                let v = parse_float(parts[2])?;
                uvs.push([u, v]);
            }
            "f" => {
                if parts.len() < 4 {
                    return Err(ObjError::InvalidFormat(format!(
                        "face needs at least 3 vertices: {line}"
                    )));
                }

                let mut face = Vec::with_capacity(parts.len() - 1);
                for reference in &parts[1..] {
                    let key = parse_face_reference(reference)?;
                    let index = match seen.get(&key) {
                        Some(&index) => index,
                        None => {
                            let (pos_idx, uv_idx, normal_idx) = key;
                            let position = *positions.get(pos_idx).ok_or_else(|| {
                                ObjError::InvalidFormat(format!(
                                    "position index {} out of bounds",
                                    pos_idx + 1
                                ))
                            })?;
                            let uv = match uv_idx {
                                Some(i) => *uvs.get(i).ok_or_else(|| {
                                    ObjError::InvalidFormat(format!(
                                        "uv index {} out of bounds",
                                        i + 1
                                    ))
                                })?,
                                None => [0.0, 0.0],
                            };
                            let normal = match normal_idx {
                                Some(i) => *normals.get(i).ok_or_else(|| {
                                    ObjError::InvalidFormat(format!(
                                        "normal index {} out of bounds",
                                        i + 1
                                    ))
                                })?,
                                None => [0.0, 0.0, 0.0],
                            };

                            let index = data.positions.len() as u32;
                            data.positions.push(position);
                            data.uvs.push(uv);
                            data.normals.push(normal);
                            seen.insert(key, index);
                            index
                        }
                    };
                    face.push(index);
                }

                // Fan-triangulate quads and larger faces.
                for i in 1..face.len() - 1 {
                    data.indices.push(face[0]);
                    data.indices.push(face[i]);
                    data.indices.push(face[i + 1]);
                }
            }
            // Ignore objects, groups, materials, smoothing groups.
            _ => {}
        }
    }

    if data.positions.is_empty() {
        return Err(ObjError::InvalidFormat("no vertex data found".to_string()));
    }
    Ok(data)
}

fn parse_float(text: &str) -> Result<f32, ObjError> {
    text.parse()
        .map_err(|_| ObjError::ParseError(format!("invalid number: {text}")))
}

fn parse_vec3(parts: &[&str]) -> Result<[f32; 3], ObjError> {
    if parts.len() < 4 {
        return Err(ObjError::InvalidFormat(format!(
            "{} statement needs 3 values",
            parts[0]
        )));
    }
    Ok([
        parse_float(parts[1])?,
        parse_float(parts[2])?,
        parse_float(parts[3])?,
    ])
}

/// Parse one `v`, `v/vt`, `v//vn`, or `v/vt/vn` face reference into
/// zero-based indices
fn parse_face_reference(text: &str) -> Result<(usize, Option<usize>, Option<usize>), ObjError> {
    let mut fields = text.split('/');

    let position = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| ObjError::InvalidFormat(format!("bad face reference: {text}")))?;
    let position: usize = position
        .parse()
        .map_err(|_| ObjError::ParseError(format!("invalid position index: {position}")))?;
    if position == 0 {
        return Err(ObjError::InvalidFormat("OBJ indices are 1-based".to_string()));
    }

    let uv = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_attribute_index(field, "uv")?),
    };
    let normal = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_attribute_index(field, "normal")?),
    };

    Ok((position - 1, uv, normal))
}

/// Parse a 1-based attribute index to zero-based
fn parse_attribute_index(field: &str, what: &str) -> Result<usize, ObjError> {
    field
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .ok_or_else(|| ObjError::ParseError(format!("invalid {what} index: {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
# simple triangle
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn test_parse_triangle() {
        let data = parse_obj_source(TRIANGLE).unwrap();
        assert_eq!(data.positions.len(), 3);
        assert_eq!(data.uvs.len(), 3);
        assert_eq!(data.normals.len(), 3);
        assert_eq!(data.indices, vec![0, 1, 2]);
        assert_eq!(data.normals[0], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let data = parse_obj_source(source).unwrap();
        assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_shared_references_are_deduplicated() {
        let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3
f 1 3 4
";
        let data = parse_obj_source(source).unwrap();
        assert_eq!(data.positions.len(), 4);
        assert_eq!(data.indices.len(), 6);
    }

    #[test]
    fn test_position_only_faces_get_default_attributes() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let data = parse_obj_source(source).unwrap();
        assert_eq!(data.uvs[0], [0.0, 0.0]);
        assert_eq!(data.normals[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_bounds_index_is_an_error() {
        let source = "v 0 0 0\nf 1 2 3\n";
        assert!(matches!(
            parse_obj_source(source),
            Err(ObjError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bad_number_is_a_parse_error() {
        let source = "v 0 zero 0\n";
        assert!(matches!(
            parse_obj_source(source),
            Err(ObjError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        assert!(matches!(
            parse_obj_source("# nothing here\n"),
            Err(ObjError::InvalidFormat(_))
        ));
    }
}
