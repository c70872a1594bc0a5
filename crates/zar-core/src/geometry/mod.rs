//! Polyhedron meshes for each die type.
//!
//! Meshes are built deterministically from the die type: the same die always
//! yields the same vertices, faces, and normals. The d4, d8, d12, and d20 are
//! the regular solids inscribed in the unit sphere, the d6 is a unit cube,
//! and the d10 is a 12-vertex golden-ratio solid with two triangles per
//! logical face.

mod normals;
mod solids;

use std::collections::HashSet;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::die::DieType;
use crate::error::DiceResult;

pub use solids::PHI;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedronMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[u32; 3]>,
    normals: Vec<Vector3<f64>>,
}

impl PolyhedronMesh {
    fn new(vertices: Vec<Point3<f64>>, faces: &[[u32; 3]]) -> Self {
        let normals = normals::vertex_normals(&vertices, faces);
        Self {
            vertices,
            faces: faces.to_vec(),
            normals,
        }
    }

    /// Mesh vertices.
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangles as vertex index triples.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Unit normal per vertex, in vertex order.
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    /// Unit normal of triangle `index`, or `None` if out of range.
    pub fn face_normal(&self, index: usize) -> Option<Vector3<f64>> {
        let [i, j, k] = *self.faces.get(index)?;
        let n = normals::triangle_normal(
            &self.vertices[i as usize],
            &self.vertices[j as usize],
            &self.vertices[k as usize],
        );
        n.try_normalize(f64::EPSILON)
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut edges = HashSet::new();
        for &[i, j, k] in &self.faces {
            for (a, b) in [(i, j), (j, k), (k, i)] {
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.len()
    }

    /// Distance from the origin to the farthest vertex.
    pub fn bounding_radius(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f64::max)
    }

    /// A serializable copy of the mesh.
    pub fn export(&self) -> MeshExport {
        MeshExport {
            vertices: self.vertices.iter().map(|v| [v.x, v.y, v.z]).collect(),
            faces: self.faces.clone(),
            normals: self.normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
        }
    }
}

/// Plain-array form of a [`PolyhedronMesh`], for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshExport {
    /// Vertex positions.
    pub vertices: Vec<[f64; 3]>,
    /// Triangles as vertex index triples.
    pub faces: Vec<[u32; 3]>,
    /// Unit vertex normals.
    pub normals: Vec<[f64; 3]>,
}

/// Build the mesh for a die type.
pub fn build(die: DieType) -> PolyhedronMesh {
    match die {
        DieType::D4 => PolyhedronMesh::new(solids::tetrahedron_vertices(), &solids::TETRAHEDRON_FACES),
        DieType::D6 => PolyhedronMesh::new(solids::cube_vertices(), &solids::CUBE_FACES),
        DieType::D8 => PolyhedronMesh::new(solids::octahedron_vertices(), &solids::OCTAHEDRON_FACES),
        DieType::D10 => PolyhedronMesh::new(solids::d10_vertices(), &solids::D10_FACES),
        DieType::D12 => {
            PolyhedronMesh::new(solids::dodecahedron_vertices(), &solids::DODECAHEDRON_FACES)
        }
        DieType::D20 => {
            PolyhedronMesh::new(solids::icosahedron_vertices(), &solids::ICOSAHEDRON_FACES)
        }
    }
}

/// Build the mesh for a raw face count.
///
/// Fails with [`DiceError::UnsupportedDieType`](crate::DiceError::UnsupportedDieType)
/// for counts other than 4, 6, 8, 10, 12, and 20.
pub fn build_faces(faces: u32) -> DiceResult<PolyhedronMesh> {
    DieType::from_faces(faces).map(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiceError;

    fn counts(die: DieType) -> (usize, usize) {
        let mesh = build(die);
        (mesh.vertices().len(), mesh.faces().len())
    }

    #[test]
    fn vertex_and_face_counts() {
        assert_eq!(counts(DieType::D4), (4, 4));
        assert_eq!(counts(DieType::D6), (8, 12));
        assert_eq!(counts(DieType::D8), (6, 8));
        assert_eq!(counts(DieType::D10), (12, 20));
        assert_eq!(counts(DieType::D12), (20, 36));
        assert_eq!(counts(DieType::D20), (12, 20));
    }

    #[test]
    fn indices_in_bounds() {
        for die in DieType::ALL {
            let mesh = build(die);
            assert!(!mesh.vertices().is_empty());
            let n = mesh.vertices().len() as u32;
            for face in mesh.faces() {
                assert!(face.iter().all(|&i| i < n), "{die}: {face:?}");
            }
        }
    }

    #[test]
    fn meshes_are_closed() {
        for die in DieType::ALL {
            let mesh = build(die);
            let v = mesh.vertices().len() as i64;
            let e = mesh.edge_count() as i64;
            let f = mesh.faces().len() as i64;
            assert_eq!(v - e + f, 2, "{die}: Euler characteristic");
            assert_eq!(2 * e, 3 * f, "{die}: every edge borders two triangles");
        }
    }

    #[test]
    fn faces_wind_outward() {
        for die in DieType::ALL {
            let mesh = build(die);
            for (i, face) in mesh.faces().iter().enumerate() {
                let centroid = face
                    .iter()
                    .map(|&v| mesh.vertices()[v as usize].coords)
                    .sum::<Vector3<f64>>()
                    / 3.0;
                let n = mesh.face_normal(i).unwrap();
                assert!(n.dot(&centroid) > 0.0, "{die}: face {i} points inward");
            }
        }
    }

    #[test]
    fn regular_solids_on_unit_sphere() {
        for die in [DieType::D4, DieType::D8, DieType::D12, DieType::D20] {
            for v in build(die).vertices() {
                assert!((v.coords.norm() - 1.0).abs() < 1e-12, "{die}");
            }
        }
    }

    #[test]
    fn cube_has_unit_side() {
        let mesh = build(DieType::D6);
        for v in mesh.vertices() {
            assert!(v.iter().all(|c| (c.abs() - 0.5).abs() < 1e-12));
        }
        assert!((mesh.bounding_radius() - 0.75f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn d10_uses_golden_ratio_vertices() {
        let a = 1.0 / 3f64.sqrt();
        let mesh = build(DieType::D10);
        for v in mesh.vertices() {
            let mut mags: Vec<f64> = v.iter().map(|c| c.abs()).collect();
            mags.sort_by(f64::total_cmp);
            assert!(mags[0].abs() < 1e-12);
            assert!((mags[1] - a).abs() < 1e-12);
            assert!((mags[2] - PHI * a).abs() < 1e-12);
        }
    }

    #[test]
    fn d10_has_no_duplicate_triangles() {
        let mesh = build(DieType::D10);
        let distinct: HashSet<[u32; 3]> = mesh
            .faces()
            .iter()
            .map(|f| {
                let mut s = *f;
                s.sort_unstable();
                s
            })
            .collect();
        assert_eq!(distinct.len(), 20);
    }

    #[test]
    fn d10_rebuild_is_identical() {
        assert_eq!(build(DieType::D10), build(DieType::D10));
    }

    #[test]
    fn normals_are_unit_and_outward() {
        for die in DieType::ALL {
            let mesh = build(die);
            assert_eq!(mesh.normals().len(), mesh.vertices().len());
            for (v, n) in mesh.vertices().iter().zip(mesh.normals()) {
                assert!((n.norm() - 1.0).abs() < 1e-9, "{die}");
                assert!(n.dot(&v.coords) > 0.0, "{die}");
            }
        }
    }

    #[test]
    fn regular_solid_normals_match_vertex_directions() {
        for die in [DieType::D4, DieType::D8, DieType::D20] {
            let mesh = build(die);
            for (v, n) in mesh.vertices().iter().zip(mesh.normals()) {
                assert!((v.coords - n).norm() < 1e-9, "{die}");
            }
        }
    }

    #[test]
    fn build_faces_rejects_unsupported() {
        assert_eq!(build_faces(7), Err(DiceError::UnsupportedDieType(7)));
        assert_eq!(build_faces(20).unwrap(), build(DieType::D20));
    }

    #[test]
    fn face_normal_out_of_range() {
        assert!(build(DieType::D4).face_normal(4).is_none());
    }

    #[test]
    fn export_matches_mesh() {
        let mesh = build(DieType::D8);
        let export = mesh.export();
        assert_eq!(export.vertices.len(), 6);
        assert_eq!(export.faces, mesh.faces());
        assert_eq!(export.normals.len(), 6);
    }
}
