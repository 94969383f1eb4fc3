use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::config::{ROAD_LAYER, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::roads::Road;

// pixel space to world space, canvas centered on the origin, y up
pub fn world_pos(x: f32, y: f32, layer: f32) -> Vec3 {
    Vec3::new(
        x - SCREEN_WIDTH as f32 / 2.0,
        layer,
        y - SCREEN_HEIGHT as f32 / 2.0,
    )
}

fn build_mesh(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

// flat ribbon over the road's point run, one quad per adjacent pair
// pairs separated by an obstacle-filter gap are not bridged, so roads
// render broken where they met a park
// built in world coordinates, spawn with an identity transform
pub fn road_mesh(road: &Road) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    let half = road.width as f32 / 2.0;

    for pair in road.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if (a.x - b.x).abs() > 1 || (a.y - b.y).abs() > 1 {
            continue; // gap left by the obstacle filter
        }

        let a = world_pos(a.x as f32, a.y as f32, ROAD_LAYER);
        let b = world_pos(b.x as f32, b.y as f32, ROAD_LAYER);

        let dir = Vec2::new(b.x - a.x, b.z - a.z).normalize();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let base = positions.len() as u32;
        positions.extend([
            [a.x + perp.x, ROAD_LAYER, a.z + perp.y],
            [a.x - perp.x, ROAD_LAYER, a.z - perp.y],
            [b.x + perp.x, ROAD_LAYER, b.z + perp.y],
            [b.x - perp.x, ROAD_LAYER, b.z - perp.y],
        ]);
        normals.extend([[0.0, 1.0, 0.0]; 4]);
        uvs.extend([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        indices.extend([base, base + 2, base + 1]);
        indices.extend([base + 1, base + 2, base + 3]);
    }

    build_mesh(positions, normals, uvs, indices)
}

// filled disc in the ground plane, centered on the local origin
pub fn disc_mesh(radius: f32) -> Mesh {
    const SEGMENTS: usize = 32;

    let mut positions = Vec::with_capacity(SEGMENTS + 2);
    let mut normals = Vec::with_capacity(SEGMENTS + 2);
    let mut uvs = Vec::with_capacity(SEGMENTS + 2);
    let mut indices = Vec::with_capacity(SEGMENTS * 3);

    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 1.0, 0.0]);
    uvs.push([0.5, 0.5]);

    for i in 0..=SEGMENTS {
        let angle = std::f32::consts::TAU * i as f32 / SEGMENTS as f32;
        let (sin, cos) = angle.sin_cos();
        positions.push([cos * radius, 0.0, sin * radius]);
        normals.push([0.0, 1.0, 0.0]);
        uvs.push([0.5 + 0.5 * cos, 0.5 + 0.5 * sin]);
    }

    for i in 0..SEGMENTS as u32 {
        indices.extend([0, i + 2, i + 1]);
    }

    build_mesh(positions, normals, uvs, indices)
}

// rectangular corners in the ground plane, counter-clockwise seen from above
fn footprint_corners(width: f32, depth: f32) -> [Vec2; 4] {
    let half_w = width / 2.0;
    let half_d = depth / 2.0;
    [
        Vec2::new(-half_w, -half_d),
        Vec2::new(half_w, -half_d),
        Vec2::new(half_w, half_d),
        Vec2::new(-half_w, half_d),
    ]
}

// flat footprint quad, centered on the local origin
pub fn footprint_mesh(width: f32, depth: f32) -> Mesh {
    let corners = footprint_corners(width, depth);

    let positions: Vec<[f32; 3]> = corners.iter().map(|c| [c.x, 0.0, c.y]).collect();
    let normals = vec![[0.0, 1.0, 0.0]; 4];
    let uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let indices = vec![0, 2, 1, 0, 3, 2];

    build_mesh(positions, normals, uvs, indices)
}

// extruded building block, four walls plus top and bottom caps
pub fn block_mesh(width: f32, depth: f32, height: f32) -> Mesh {
    let corners = footprint_corners(width, depth);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    // walls
    for i in 0..corners.len() {
        let v1 = corners[i];
        let v2 = corners[(i + 1) % corners.len()];
        let edge = v2 - v1;
        let normal = Vec2::new(edge.y, -edge.x).normalize();
        let base = positions.len() as u32;

        positions.extend([
            [v1.x, 0.0, v1.y],
            [v2.x, 0.0, v2.y],
            [v1.x, height, v1.y],
            [v2.x, height, v2.y],
        ]);
        normals.extend([[normal.x, 0.0, normal.y]; 4]);

        let edge_length = edge.length();
        uvs.extend([
            [0.0, 0.0],
            [edge_length, 0.0],
            [0.0, height],
            [edge_length, height],
        ]);

        indices.extend([base, base + 2, base + 1]);
        indices.extend([base + 1, base + 2, base + 3]);
    }

    // top cap (facing up)
    let top = positions.len() as u32;
    for corner in &corners {
        positions.push([corner.x, height, corner.y]);
        normals.push([0.0, 1.0, 0.0]);
        uvs.push([0.5 + corner.x / width, 0.5 + corner.y / depth]);
    }
    indices.extend([top, top + 2, top + 1]);
    indices.extend([top, top + 3, top + 2]);

    // bottom cap (facing down)
    let bottom = positions.len() as u32;
    for corner in &corners {
        positions.push([corner.x, 0.0, corner.y]);
        normals.push([0.0, -1.0, 0.0]);
        uvs.push([0.5 + corner.x / width, 0.5 + corner.y / depth]);
    }
    indices.extend([bottom, bottom + 1, bottom + 2]);
    indices.extend([bottom, bottom + 2, bottom + 3]);

    build_mesh(positions, normals, uvs, indices)
}
