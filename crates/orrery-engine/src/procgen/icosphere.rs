//! Icosphere vertex generation.
//!
//! Produces the same non-indexed triangle list a host-side
//! `Geometry::Icosphere { radius, detail }` builds, so a deformable surface
//! written from Rust lines up vertex-for-vertex with the host's mesh.

use glam::Vec3;

const ICOSAHEDRON_INDICES: [usize; 60] = [
    0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, 1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7,
    1, 8, 3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, 4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9,
    8, 1,
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Number of vertices `icosphere(_, detail)` returns: 60·(detail+1)².
pub fn icosphere_vertex_count(detail: u32) -> usize {
    let cols = detail as usize + 1;
    60 * cols * cols
}

/// Unit-sphere vertices of an icosahedron whose edges are split into
/// `detail + 1` segments, three vertices per triangle.
pub fn icosphere_normals(detail: u32) -> Vec<Vec3> {
    let base = icosahedron_vertices();
    let mut out = Vec::with_capacity(icosphere_vertex_count(detail));
    for face in ICOSAHEDRON_INDICES.chunks(3) {
        subdivide_face(base[face[0]], base[face[1]], base[face[2]], detail, &mut out);
    }
    for v in &mut out {
        *v = v.normalize();
    }
    out
}

/// Icosphere vertices scaled to `radius`.
pub fn icosphere(radius: f32, detail: u32) -> Vec<Vec3> {
    icosphere_normals(detail).into_iter().map(|n| n * radius).collect()
}

/// Split triangle (a, b, c) into a grid of `(detail+1)²` triangles.
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, detail: u32, out: &mut Vec<Vec3>) {
    let cols = detail as usize + 1;

    // grid[i][j]: row i runs from the a-c edge to the b-c edge
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let f = i as f32 / cols as f32;
        let aj = a.lerp(c, f);
        let bj = b.lerp(c, f);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}
