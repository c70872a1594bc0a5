//! Smooth-shading vertex normals.

use nalgebra::{Point3, Vector3};

/// Unnormalized normal of a triangle; its length is twice the triangle's area.
pub(super) fn triangle_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (b - a).cross(&(c - a))
}

/// Per-vertex normals: the area-weighted average of adjacent face normals.
///
/// Vertices touched by no face (or only by degenerate faces) get a zero
/// normal.
pub(super) fn vertex_normals(vertices: &[Point3<f64>], faces: &[[u32; 3]]) -> Vec<Vector3<f64>> {
    let mut acc = vec![Vector3::zeros(); vertices.len()];
    for &[i, j, k] in faces {
        let (i, j, k) = (i as usize, j as usize, k as usize);
        let n = triangle_normal(&vertices[i], &vertices[j], &vertices[k]);
        acc[i] += n;
        acc[j] += n;
        acc[k] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_normals_point_up() {
        let verts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let normals = vertex_normals(&verts, &[[0, 1, 2]]);
        for n in normals {
            assert!((n - Vector3::z()).norm() < 1e-12);
        }
    }

    #[test]
    fn unused_vertex_gets_zero_normal() {
        let verts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let normals = vertex_normals(&verts, &[[0, 1, 2]]);
        assert_eq!(normals[3], Vector3::zeros());
    }

    #[test]
    fn larger_faces_weigh_more() {
        // Shared vertex 0; a large triangle in the xy-plane and a small one in the xz-plane.
        let verts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let normals = vertex_normals(&verts, &[[0, 1, 2], [0, 3, 1]]);
        assert!(normals[0].z > normals[0].y.abs());
    }
}
