// pixel-exact rasterization primitives
// all city geometry starts as integer point runs produced here

use bevy::prelude::*;

// 2d integer pixel coordinate
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

// bresenham line walk between two endpoints, inclusive on both ends
// integer error accumulation, covers all eight octants and axis-aligned runs
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let mut x = x0;
    let mut y = y0;

    loop {
        points.push(Point::new(x, y));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

// midpoint circle walk, one octant stepped and mirrored eight ways
// emission order interleaves the octants, callers must not assume that
// consecutive points are adjacent on the perimeter
pub fn midpoint_circle(cx: i32, cy: i32, radius: i32) -> Vec<Point> {
    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    let mirror = |points: &mut Vec<Point>, x: i32, y: i32| {
        points.push(Point::new(cx + x, cy + y));
        points.push(Point::new(cx - x, cy + y));
        points.push(Point::new(cx + x, cy - y));
        points.push(Point::new(cx - x, cy - y));
        points.push(Point::new(cx + y, cy + x));
        points.push(Point::new(cx - y, cy + x));
        points.push(Point::new(cx + y, cy - x));
        points.push(Point::new(cx - y, cy - x));
    };

    mirror(&mut points, x, y);

    while x < y {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        mirror(&mut points, x, y);
    }

    points
}

// centroid and max-distance radius derived from a boundary point set
// every collision test and the renderer share this one definition of the circle
pub fn circle_center_radius(points: &[Point]) -> (Vec2, f32) {
    if points.is_empty() {
        return (Vec2::ZERO, 0.0);
    }

    let mut center = Vec2::ZERO;
    for point in points {
        center += point.as_vec2();
    }
    center /= points.len() as f32;

    let mut radius = 0.0_f32;
    for point in points {
        radius = radius.max(center.distance(point.as_vec2()));
    }

    (center, radius)
}
