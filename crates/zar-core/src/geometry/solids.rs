//! Vertex and index tables for the six die solids.
//!
//! All triangles are wound counter-clockwise seen from outside.

use nalgebra::Point3;

/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

pub(super) const TETRAHEDRON_FACES: [[u32; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

pub(super) const CUBE_FACES: [[u32; 3]; 12] = [
    [0, 1, 3],
    [0, 3, 2],
    [4, 6, 7],
    [4, 7, 5],
    [0, 4, 5],
    [0, 5, 1],
    [2, 3, 7],
    [2, 7, 6],
    [0, 2, 6],
    [0, 6, 4],
    [1, 5, 7],
    [1, 7, 3],
];

pub(super) const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

/// Two triangles per logical d10 face.
pub(super) const D10_FACES: [[u32; 3]; 20] = [
    [0, 8, 4],
    [0, 2, 8],
    [0, 10, 2],
    [0, 6, 10],
    [0, 4, 6],
    [3, 9, 5],
    [3, 5, 7],
    [3, 7, 11],
    [3, 11, 1],
    [3, 1, 9],
    [4, 11, 6],
    [4, 1, 11],
    [4, 9, 1],
    [4, 8, 9],
    [8, 5, 9],
    [8, 2, 5],
    [2, 7, 5],
    [2, 10, 7],
    [10, 11, 7],
    [10, 6, 11],
];

pub(super) const DODECAHEDRON_FACES: [[u32; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

pub(super) const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

pub(super) fn tetrahedron_vertices() -> Vec<Point3<f64>> {
    unit_sphere(&[
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ])
}

/// Side length 1, centred on the origin.
pub(super) fn cube_vertices() -> Vec<Point3<f64>> {
    let mut out = Vec::with_capacity(8);
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                out.push(Point3::new(x, y, z));
            }
        }
    }
    out
}

pub(super) fn octahedron_vertices() -> Vec<Point3<f64>> {
    unit_sphere(&[
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ])
}

/// (0, ±a, ±φa) and its cyclic permutations, with a = 1/√3.
pub(super) fn d10_vertices() -> Vec<Point3<f64>> {
    let a = 1.0 / 3f64.sqrt();
    let pa = PHI * a;
    vec![
        Point3::new(0.0, a, pa),
        Point3::new(0.0, a, -pa),
        Point3::new(0.0, -a, pa),
        Point3::new(0.0, -a, -pa),
        Point3::new(a, pa, 0.0),
        Point3::new(a, -pa, 0.0),
        Point3::new(-a, pa, 0.0),
        Point3::new(-a, -pa, 0.0),
        Point3::new(pa, 0.0, a),
        Point3::new(pa, 0.0, -a),
        Point3::new(-pa, 0.0, a),
        Point3::new(-pa, 0.0, -a),
    ]
}

pub(super) fn dodecahedron_vertices() -> Vec<Point3<f64>> {
    let t = PHI;
    let r = 1.0 / PHI;
    unit_sphere(&[
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ])
}

pub(super) fn icosahedron_vertices() -> Vec<Point3<f64>> {
    let t = PHI;
    unit_sphere(&[
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ])
}

/// Project raw coordinates onto the unit sphere.
fn unit_sphere(raw: &[[f64; 3]]) -> Vec<Point3<f64>> {
    raw.iter()
        .map(|&[x, y, z]| {
            let len = (x * x + y * y + z * z).sqrt();
            Point3::new(x / len, y / len, z / len)
        })
        .collect()
}
