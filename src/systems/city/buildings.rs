// building placement and the skyline policy
// candidates are rejection sampled against everything placed before them

use bevy::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

use crate::config::{
    BUILDING_ATTEMPTS_PER_REQUEST, BUILDING_BUFFER, BUILDING_SAMPLE_MARGIN, FOOTPRINT_MAX,
    FOOTPRINT_MIN, HIGH_RISE_MAX, HIGH_RISE_MIN, LOW_RISE_MAX, LOW_RISE_MIN, MID_RISE_MAX,
    MID_RISE_MIN, PARK_BUFFER, ROAD_BUFFER, SCREEN_EDGE_BUFFER,
};

use super::raster::{Point, circle_center_radius};
use super::roads::Road;
use super::{CityConfig, SkylineType};

// building classification by vertical extent
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildingKind {
    LowRise,
    MidRise,
    HighRise,
}

// rectangular footprint centered on (x, y), height is the vertical extent
#[derive(Clone, Copy, Debug)]
pub struct Building {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub kind: BuildingKind,
}

pub fn place_buildings(
    config: &CityConfig,
    screen_w: i32,
    screen_h: i32,
    roads: &[Road],
    parks: &[Vec<Point>],
    fountain: Option<&Vec<Point>>,
) -> Vec<Building> {
    if config.num_buildings == 0 {
        info!("no buildings requested");
        return Vec::new();
    }

    info!("generating {} buildings", config.num_buildings);

    let mut rng = StdRng::from_os_rng();
    let size_dist = Uniform::new(FOOTPRINT_MIN, FOOTPRINT_MAX).unwrap();

    let mut buildings: Vec<Building> = Vec::new();
    let max_attempts = config.num_buildings * BUILDING_ATTEMPTS_PER_REQUEST;
    let mut attempts = 0;

    while buildings.len() < config.num_buildings && attempts < max_attempts {
        attempts += 1;

        let x =
            rng.random_range(BUILDING_SAMPLE_MARGIN..=screen_w - BUILDING_SAMPLE_MARGIN) as f32;
        let y =
            rng.random_range(BUILDING_SAMPLE_MARGIN..=screen_h - BUILDING_SAMPLE_MARGIN) as f32;

        let (width, depth) = if config.use_standard_size {
            (config.standard_width, config.standard_depth)
        } else {
            (size_dist.sample(&mut rng), size_dist.sample(&mut rng))
        };

        if !is_valid_position(
            x, y, width, depth, screen_w, screen_h, &buildings, roads, parks, fountain,
        ) {
            continue;
        }

        let (kind, height) = sample_skyline(config.skyline, &mut rng);
        buildings.push(Building {
            x,
            y,
            width,
            depth,
            height,
            kind,
        });

        if buildings.len() % 5 == 0 {
            info!("generated {} buildings...", buildings.len());
        }
    }

    if buildings.len() < config.num_buildings {
        warn!(
            "only placed {} of {} buildings",
            buildings.len(),
            config.num_buildings
        );
    }

    let low = buildings.iter().filter(|b| b.kind == BuildingKind::LowRise).count();
    let mid = buildings.iter().filter(|b| b.kind == BuildingKind::MidRise).count();
    let high = buildings.iter().filter(|b| b.kind == BuildingKind::HighRise).count();
    info!("low-rise: {low} | mid-rise: {mid} | high-rise: {high}");

    buildings
}

// skyline policy: maps the configured distribution to a kind and a height
fn sample_skyline(skyline: SkylineType, rng: &mut StdRng) -> (BuildingKind, f32) {
    match skyline {
        SkylineType::LowRise => (
            BuildingKind::LowRise,
            rng.random_range(LOW_RISE_MIN..LOW_RISE_MAX),
        ),
        SkylineType::MidRise => (
            BuildingKind::MidRise,
            rng.random_range(MID_RISE_MIN..MID_RISE_MAX),
        ),
        SkylineType::Mixed => match rng.random_range(0..3) {
            0 => (
                BuildingKind::LowRise,
                rng.random_range(LOW_RISE_MIN..LOW_RISE_MAX),
            ),
            1 => (
                BuildingKind::MidRise,
                rng.random_range(MID_RISE_MIN..MID_RISE_MAX),
            ),
            _ => (
                BuildingKind::HighRise,
                rng.random_range(HIGH_RISE_MIN..HIGH_RISE_MAX),
            ),
        },
        // two thirds high-rise, one third mid-rise
        SkylineType::Skyscraper => {
            if rng.random_range(0..3) <= 1 {
                (
                    BuildingKind::HighRise,
                    rng.random_range(HIGH_RISE_MIN..HIGH_RISE_MAX),
                )
            } else {
                (
                    BuildingKind::MidRise,
                    rng.random_range(MID_RISE_MIN..MID_RISE_MAX),
                )
            }
        }
    }
}

// every check must pass, ordered cheapest first
pub fn is_valid_position(
    x: f32,
    y: f32,
    width: f32,
    depth: f32,
    screen_w: i32,
    screen_h: i32,
    placed: &[Building],
    roads: &[Road],
    parks: &[Vec<Point>],
    fountain: Option<&Vec<Point>>,
) -> bool {
    let half_w = width / 2.0;
    let half_d = depth / 2.0;

    let left = x - half_w;
    let right = x + half_w;
    let top = y - half_d;
    let bottom = y + half_d;

    // stay away from the canvas edge
    if left < SCREEN_EDGE_BUFFER
        || right > screen_w as f32 - SCREEN_EDGE_BUFFER
        || top < SCREEN_EDGE_BUFFER
        || bottom > screen_h as f32 - SCREEN_EDGE_BUFFER
    {
        return false;
    }

    // buffered aabb test against every placed building
    for other in placed {
        let o_left = other.x - other.width / 2.0;
        let o_right = other.x + other.width / 2.0;
        let o_top = other.y - other.depth / 2.0;
        let o_bottom = other.y + other.depth / 2.0;

        let separated = right + BUILDING_BUFFER < o_left
            || left - BUILDING_BUFFER > o_right
            || bottom + BUILDING_BUFFER < o_top
            || top - BUILDING_BUFFER > o_bottom;
        if !separated {
            return false;
        }
    }

    // parks and the fountain share the same two-fold clearance test
    for park in parks.iter().filter(|p| !p.is_empty()) {
        if !clears_circle_zone(park, left, right, top, bottom) {
            return false;
        }
    }
    if let Some(fountain) = fountain.filter(|f| !f.is_empty()) {
        if !clears_circle_zone(fountain, left, right, top, bottom) {
            return false;
        }
    }

    // road points expanded by half the road width plus a small buffer
    for road in roads {
        let reach = ROAD_BUFFER + road.width as f32 / 2.0;
        for point in &road.points {
            let px = point.x as f32;
            let py = point.y as f32;
            if px >= left - reach
                && px <= right + reach
                && py >= top - reach
                && py <= bottom + reach
            {
                return false;
            }
        }
    }

    true
}

// two tests on purpose: a circle-vs-box proximity check on the derived circle,
// then a sweep of the raw boundary points against the buffered box
// the two can disagree near the buffer edge, both must clear
fn clears_circle_zone(boundary: &[Point], left: f32, right: f32, top: f32, bottom: f32) -> bool {
    let (center, radius) = circle_center_radius(boundary);

    // closest point on the buffered box to the derived center
    let closest_x = center.x.clamp(left - PARK_BUFFER, right + PARK_BUFFER);
    let closest_y = center.y.clamp(top - PARK_BUFFER, bottom + PARK_BUFFER);
    let buffered_radius = radius + PARK_BUFFER;
    if Vec2::new(closest_x, closest_y).distance_squared(center)
        < buffered_radius * buffered_radius
    {
        return false;
    }

    for point in boundary {
        let px = point.x as f32;
        let py = point.y as f32;
        if px >= left - PARK_BUFFER
            && px <= right + PARK_BUFFER
            && py >= top - PARK_BUFFER
            && py <= bottom + PARK_BUFFER
        {
            return false;
        }
    }

    true
}
