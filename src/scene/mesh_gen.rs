//! Procedural geometry for the backdrop: UV spheres for the planet, stars
//! and skybox, a flat-shaded octahedron for the ship, and line lists for the
//! debug helpers.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Vertex shared by every triangle mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate, `v = 0` at the top image row.
    pub uv: [f32; 2],
}

/// Colored endpoint of a debug line segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Counter-clockwise (seen from outside) triangle indices.
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere centred on the origin.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` vertices; the
/// seam and pole rows are duplicated so texture coordinates stay continuous.
/// The degenerate triangles at the poles are skipped, leaving
/// `width_segments * (2 * height_segments - 2)` triangles.
#[must_use]
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row = width_segments + 1;

    let mut vertices = Vec::with_capacity((row * (height_segments + 1)) as usize);
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        // Centre the pole texel under each pole triangle.
        let u_offset = if iy == 0 {
            0.5 / width_segments as f32
        } else if iy == height_segments {
            -0.5 / width_segments as f32
        } else {
            0.0
        };

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let normal = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            vertices.push(MeshVertex {
                position: (normal * radius).to_array(),
                normal: normal.to_array(),
                uv: [u + u_offset, v],
            });
        }
    }

    let mut indices =
        Vec::with_capacity((width_segments * (2 * height_segments - 2) * 3) as usize);
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Flat-shaded regular octahedron with vertices on the axes at `radius`.
///
/// Every face gets its own three vertices carrying the face normal.
#[must_use]
pub fn octahedron(radius: f32) -> MeshData {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);

    for sx in [1.0_f32, -1.0] {
        for sy in [1.0_f32, -1.0] {
            for sz in [1.0_f32, -1.0] {
                let a = Vec3::new(sx * radius, 0.0, 0.0);
                let mut b = Vec3::new(0.0, sy * radius, 0.0);
                let mut c = Vec3::new(0.0, 0.0, sz * radius);

                let centroid = (a + b + c) / 3.0;
                if (b - a).cross(c - a).dot(centroid) < 0.0 {
                    std::mem::swap(&mut b, &mut c);
                }
                let normal = (b - a).cross(c - a).normalize();

                let base = vertices.len() as u32;
                for corner in [a, b, c] {
                    vertices.push(MeshVertex {
                        position: corner.to_array(),
                        normal: normal.to_array(),
                        uv: [0.0, 0.0],
                    });
                }
                indices.extend_from_slice(&[base, base + 1, base + 2]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Square grid on the XZ plane, as a line list. The two centre lines use
/// `center_color`, the rest `grid_color`.
#[must_use]
pub fn grid_lines(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    grid_color: [f32; 3],
) -> Vec<LineVertex> {
    let divisions = divisions.max(1);
    let step = size / divisions as f32;
    let half = size / 2.0;
    let center = divisions / 2;

    let mut lines = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i == center { center_color } else { grid_color };
        let mut push = |from: Vec3, to: Vec3| {
            lines.push(LineVertex {
                position: from.to_array(),
                color,
            });
            lines.push(LineVertex {
                position: to.to_array(),
                color,
            });
        };
        push(Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k));
        push(Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half));
    }
    lines
}

/// Wire octahedron marking a point (the light helper), as a line list.
#[must_use]
pub fn octahedron_wireframe(center: Vec3, radius: f32, color: [f32; 3]) -> Vec<LineVertex> {
    let axes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    let mut lines = Vec::with_capacity(24);
    for (i, &from) in axes.iter().enumerate() {
        for &to in &axes[i + 1..] {
            // Opposite corners are not joined by an edge.
            if from.dot(to) < 0.0 {
                continue;
            }
            for corner in [from, to] {
                lines.push(LineVertex {
                    position: (center + corner * radius).to_array(),
                    color,
                });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn sphere_counts_match_segment_grid() {
        let mesh = uv_sphere(15.0, 64, 32);
        assert_eq!(mesh.vertices.len(), 65 * 33);
        assert_eq!(mesh.indices.len(), 64 * (2 * 32 - 2) * 3);
        let max_index = mesh.indices.iter().copied().max().unwrap_or(0);
        assert!((max_index as usize) < mesh.vertices.len());
    }

    #[test]
    fn sphere_vertices_lie_on_radius_with_outward_normals() {
        let mesh = uv_sphere(300.0, 60, 40);
        for vertex in &mesh.vertices {
            let position = Vec3::from(vertex.position);
            let normal = Vec3::from(vertex.normal);
            assert_abs_diff_eq!(position.length(), 300.0, epsilon = 1e-3);
            assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-5);
            assert!(position.dot(normal) > 0.0);
        }
    }

    #[test]
    fn sphere_triangles_wind_outward() {
        let mesh = uv_sphere(1.0, 8, 6);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from(mesh.vertices[i as usize].position));
            let face_normal = (b - a).cross(c - a);
            assert!(face_normal.dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn octahedron_faces_point_outward() {
        let mesh = octahedron(2.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 24);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let centroid =
                (Vec3::from(a.position) + Vec3::from(b.position) + Vec3::from(c.position)) / 3.0;
            let normal = Vec3::from(a.normal);
            assert!(normal.dot(centroid) > 0.0);
            assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-6);
            assert_eq!(a.normal, b.normal);
            assert_eq!(b.normal, c.normal);
        }
    }

    #[test]
    fn grid_spans_size_with_highlighted_centre() {
        let center = [0.27, 0.27, 0.27];
        let grid = [0.53, 0.53, 0.53];
        let lines = grid_lines(300.0, 50, center, grid);
        assert_eq!(lines.len(), 51 * 4);
        assert!(lines
            .iter()
            .all(|v| v.position[1] == 0.0 && v.position[0].abs() <= 150.0 + 1e-3));
        assert_eq!(lines.iter().filter(|v| v.color == center).count(), 4);
    }

    #[test]
    fn wire_octahedron_has_twelve_edges() {
        let lines = octahedron_wireframe(Vec3::new(7.0, 15.0, 20.0), 1.0, [1.0; 3]);
        assert_eq!(lines.len(), 24);
        for v in &lines {
            let offset = Vec3::from(v.position) - Vec3::new(7.0, 15.0, 20.0);
            assert_abs_diff_eq!(offset.length(), 1.0, epsilon = 1e-5);
        }
    }
}
