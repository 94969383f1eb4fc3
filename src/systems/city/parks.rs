// park and fountain placement
// rejection sampling with a bounded retry budget, a shortfall is informational

use bevy::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config::{
    FOUNTAIN_CLEARANCE, PARK_ATTEMPTS_PER_REQUEST, PARK_EDGE_CLEARANCE, PARK_SPACING_FACTOR,
};

use super::CityConfig;
use super::raster::{Point, circle_center_radius, midpoint_circle};

pub fn place_parks_and_fountain(
    config: &CityConfig,
    screen_w: i32,
    screen_h: i32,
) -> (Vec<Vec<Point>>, Option<Vec<Point>>) {
    let parks = place_parks(config, screen_w, screen_h);

    // the fountain is pinned to the canvas center and never collision checked,
    // parks are the ones keeping their distance from it
    let fountain = (config.fountain_radius > 0).then(|| {
        let center_x = screen_w / 2;
        let center_y = screen_h / 2;
        info!(
            "central fountain at ({center_x}, {center_y}) with radius {}",
            config.fountain_radius
        );
        midpoint_circle(center_x, center_y, config.fountain_radius)
    });

    (parks, fountain)
}

fn place_parks(config: &CityConfig, screen_w: i32, screen_h: i32) -> Vec<Vec<Point>> {
    if config.num_parks == 0 {
        info!("no parks requested");
        return Vec::new();
    }

    info!("generating {} parks", config.num_parks);

    let margin = config.park_radius + PARK_EDGE_CLEARANCE;
    if 2 * margin >= screen_w || 2 * margin >= screen_h {
        warn!(
            "park radius {} leaves no room on the canvas",
            config.park_radius
        );
        return Vec::new();
    }

    let mut rng = StdRng::from_os_rng();
    let mut parks: Vec<Vec<Point>> = Vec::new();
    let max_attempts = config.num_parks * PARK_ATTEMPTS_PER_REQUEST;
    let mut attempts = 0;

    while parks.len() < config.num_parks && attempts < max_attempts {
        attempts += 1;

        let x = rng.random_range(margin..=screen_w - margin);
        let y = rng.random_range(margin..=screen_h - margin);
        let candidate = Vec2::new(x as f32, y as f32);

        // spacing against already placed parks, using their derived centers
        let min_park_distance = config.park_radius as f32 * PARK_SPACING_FACTOR;
        let too_close = parks.iter().filter(|p| !p.is_empty()).any(|park| {
            let (center, _) = circle_center_radius(park);
            center.distance(candidate) < min_park_distance
        });
        if too_close {
            continue;
        }

        // keep clear of the reserved fountain space at the canvas center
        if config.fountain_radius > 0 {
            let center = Vec2::new((screen_w / 2) as f32, (screen_h / 2) as f32);
            let min_fountain_distance =
                (config.park_radius + config.fountain_radius) as f32 + FOUNTAIN_CLEARANCE;
            if candidate.distance(center) < min_fountain_distance {
                continue;
            }
        }

        info!(
            "park {} at ({x}, {y}) with radius {}",
            parks.len() + 1,
            config.park_radius
        );
        parks.push(midpoint_circle(x, y, config.park_radius));
    }

    if parks.len() < config.num_parks {
        warn!(
            "only placed {} of {} parks (strict overlap checking)",
            parks.len(),
            config.num_parks
        );
    }

    parks
}
