// road network generation
// three pattern algorithms plus the reserved-zone post filter

use bevy::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config::{RING_SAMPLE_STRIDE, ROAD_MARGIN};

use super::raster::{Point, bresenham_line, circle_center_radius, midpoint_circle};
use super::{CityConfig, RoadPattern};

// ordered point run plus a pixel width
// the run may turn discontinuous after obstacle filtering, gaps are expected
#[derive(Clone, Debug)]
pub struct Road {
    pub points: Vec<Point>,
    pub width: i32,
}

pub struct RoadGenerator {
    screen_w: i32,
    screen_h: i32,
    rng: StdRng,
}

impl RoadGenerator {
    pub fn new(screen_w: i32, screen_h: i32) -> Self {
        Self {
            screen_w,
            screen_h,
            rng: StdRng::from_os_rng(),
        }
    }

    // pattern dispatch, each variant is a pure layout function over the config
    pub fn generate(&mut self, config: &CityConfig) -> Vec<Road> {
        info!("generating roads ({} pattern)", config.road_pattern.label());

        match config.road_pattern {
            RoadPattern::Grid => self.grid_roads(config),
            RoadPattern::Radial => self.radial_roads(config),
            RoadPattern::Random => self.random_roads(config),
        }
    }

    // pattern generation followed by reserved-circle point removal
    // this is a post filter, not replanning: roads stay visibly broken where
    // they met a park, and a road that loses every point is dropped
    pub fn generate_avoiding_obstacles(
        &mut self,
        config: &CityConfig,
        parks: &[Vec<Point>],
        fountain: Option<&Vec<Point>>,
    ) -> Vec<Road> {
        let all_roads = self.generate(config);

        let mut circles: Vec<(Vec2, f32)> = parks
            .iter()
            .filter(|park| !park.is_empty())
            .map(|park| circle_center_radius(park))
            .collect();
        if let Some(fountain) = fountain.filter(|f| !f.is_empty()) {
            circles.push(circle_center_radius(fountain));
        }

        let original = all_roads.len();
        let mut removed = 0usize;
        let mut filtered = Vec::with_capacity(all_roads.len());

        for road in all_roads {
            let points: Vec<Point> = road
                .points
                .into_iter()
                .filter(|point| {
                    let inside = circles.iter().any(|(center, radius)| {
                        center.distance_squared(point.as_vec2()) <= radius * radius
                    });
                    if inside {
                        removed += 1;
                    }
                    !inside
                })
                .collect();

            if !points.is_empty() {
                filtered.push(Road {
                    points,
                    width: road.width,
                });
            }
        }

        info!("removed {removed} road points inside reserved circles");
        info!("filtered roads: {original} -> {} segments", filtered.len());
        filtered
    }

    // evenly spaced horizontal and vertical lines across the margin-inset canvas
    fn grid_roads(&mut self, config: &CityConfig) -> Vec<Road> {
        let mut roads = Vec::new();
        let margin = ROAD_MARGIN;

        // spacing is computed per axis so every line stays on the canvas
        let spacing_x = (self.screen_w - 2 * margin) / config.layout_size;
        let spacing_y = (self.screen_h - 2 * margin) / config.layout_size;

        info!("creating {0}x{0} grid", config.layout_size);

        for i in 0..=config.layout_size {
            let y = margin + i * spacing_y;
            roads.push(self.make_road(margin, y, self.screen_w - margin, y, config.road_width));
        }
        for i in 0..=config.layout_size {
            let x = margin + i * spacing_x;
            roads.push(self.make_road(x, margin, x, self.screen_h - margin, config.road_width));
        }

        info!("generated {} road segments", roads.len());
        roads
    }

    // spokes from the canvas center plus faceted concentric rings
    fn radial_roads(&mut self, config: &CityConfig) -> Vec<Road> {
        let mut roads = Vec::new();
        let center_x = self.screen_w / 2;
        let center_y = self.screen_h / 2;
        let num_spokes = config.layout_size;
        let max_radius = self.screen_w.min(self.screen_h) / 2 - ROAD_MARGIN;

        info!("creating {num_spokes} radial spokes");

        for i in 0..num_spokes {
            let angle = std::f64::consts::TAU * i as f64 / num_spokes as f64;
            let end_x = center_x + (max_radius as f64 * angle.cos()) as i32;
            let end_y = center_y + (max_radius as f64 * angle.sin()) as i32;

            let end_x = end_x.clamp(ROAD_MARGIN, self.screen_w - ROAD_MARGIN);
            let end_y = end_y.clamp(ROAD_MARGIN, self.screen_h - ROAD_MARGIN);

            roads.push(self.make_road(center_x, center_y, end_x, end_y, config.road_width));
        }

        let num_rings = config.layout_size / 2;
        info!("creating {num_rings} circular rings");

        for ring in 1..=num_rings {
            let radius = max_radius * ring / num_rings;
            let circle_points = midpoint_circle(center_x, center_y, radius);

            // keep only in-bounds samples before connecting them
            let valid: Vec<Point> = circle_points
                .into_iter()
                .filter(|p| {
                    p.x >= ROAD_MARGIN
                        && p.x <= self.screen_w - ROAD_MARGIN
                        && p.y >= ROAD_MARGIN
                        && p.y <= self.screen_h - ROAD_MARGIN
                })
                .collect();
            if valid.is_empty() {
                continue;
            }

            // connect every eighth surviving point with a straight segment
            // the result is a faceted ring, not a smooth circle
            let mut i = 0;
            while i < valid.len() {
                let next = (i + RING_SAMPLE_STRIDE) % valid.len();
                let a = valid[i];
                let b = valid[next];
                roads.push(self.make_road(a.x, a.y, b.x, b.y, config.road_width));
                i += RING_SAMPLE_STRIDE;
            }
        }

        info!("generated {} road segments", roads.len());
        roads
    }

    // random interior nodes joined by straight segments, corners anchored
    // duplicate and crossing edges are allowed
    fn random_roads(&mut self, config: &CityConfig) -> Vec<Road> {
        let mut roads = Vec::new();
        let num_roads = config.layout_size * 3;

        info!("creating {num_roads} random roads");

        let mut nodes: Vec<Point> = (0..config.layout_size * 2)
            .map(|_| self.random_point(ROAD_MARGIN))
            .collect();

        // corner anchors for connectivity
        nodes.push(Point::new(100, 100));
        nodes.push(Point::new(self.screen_w - 100, 100));
        nodes.push(Point::new(100, self.screen_h - 100));
        nodes.push(Point::new(self.screen_w - 100, self.screen_h - 100));

        for _ in 0..num_roads {
            let a = self.rng.random_range(0..nodes.len());
            let b = self.rng.random_range(0..nodes.len());

            if a != b {
                roads.push(self.make_road(
                    nodes[a].x,
                    nodes[a].y,
                    nodes[b].x,
                    nodes[b].y,
                    config.road_width,
                ));
            }
        }

        info!("generated {} road segments", roads.len());
        roads
    }

    fn make_road(&self, x0: i32, y0: i32, x1: i32, y1: i32, width: i32) -> Road {
        Road {
            points: bresenham_line(x0, y0, x1, y1),
            width,
        }
    }

    fn random_point(&mut self, margin: i32) -> Point {
        Point::new(
            self.rng.random_range(margin..=self.screen_w - margin),
            self.rng.random_range(margin..=self.screen_h - margin),
        )
    }
}
