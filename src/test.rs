// tests for the layout core
// everything runs against the plain generation API, no app required

use std::collections::HashSet;

use bevy::prelude::*;

use crate::config::*;
use crate::systems::city::buildings::{BuildingKind, place_buildings};
use crate::systems::city::generator::CityGenerator;
use crate::systems::city::parks::place_parks_and_fountain;
use crate::systems::city::raster::{
    Point, bresenham_line, circle_center_radius, midpoint_circle,
};
use crate::systems::city::roads::RoadGenerator;
use crate::systems::city::{CityConfig, RoadPattern, SkylineType};

fn config() -> CityConfig {
    CityConfig::default()
}

// ---- rasterization ----

#[test]
fn line_is_exact_for_a_horizontal_run() {
    let points = bresenham_line(0, 0, 5, 0);
    let expected: Vec<Point> = (0..=5).map(|x| Point::new(x, 0)).collect();
    assert_eq!(points, expected);
}

#[test]
fn line_covers_endpoints_without_gaps_in_every_octant() {
    let endpoints = [
        (0, 0, 7, 3),
        (0, 0, 3, 7),
        (0, 0, -7, 3),
        (0, 0, -3, 7),
        (0, 0, 7, -3),
        (0, 0, 3, -7),
        (0, 0, -7, -3),
        (0, 0, -3, -7),
        (2, 9, 2, -4),
        (-5, 1, 8, 1),
        (4, 4, 4, 4),
    ];

    for (x0, y0, x1, y1) in endpoints {
        let points = bresenham_line(x0, y0, x1, y1);
        assert_eq!(points.first(), Some(&Point::new(x0, y0)));
        assert_eq!(points.last(), Some(&Point::new(x1, y1)));

        for pair in points.windows(2) {
            assert!(
                (pair[0].x - pair[1].x).abs() <= 1 && (pair[0].y - pair[1].y).abs() <= 1,
                "gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn line_reversal_yields_the_same_point_set() {
    let forward: HashSet<Point> = bresenham_line(-3, 2, 11, -6).into_iter().collect();
    let backward: HashSet<Point> = bresenham_line(11, -6, -3, 2).into_iter().collect();
    assert_eq!(forward, backward);
}

#[test]
fn circle_hits_the_cardinal_points() {
    let points = midpoint_circle(0, 0, 5);
    for expected in [
        Point::new(5, 0),
        Point::new(-5, 0),
        Point::new(0, 5),
        Point::new(0, -5),
    ] {
        assert!(points.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn circle_points_stay_near_the_radius() {
    for radius in [1, 3, 5, 10, 40] {
        for point in midpoint_circle(0, 0, radius) {
            let distance = ((point.x * point.x + point.y * point.y) as f32).sqrt();
            let rounded = distance.round() as i32;
            assert!(
                (radius - 1..=radius + 1).contains(&rounded),
                "radius {radius}: point {:?} at distance {distance}",
                point
            );
        }
    }
}

#[test]
fn circle_point_set_has_eightfold_symmetry() {
    let points: HashSet<(i32, i32)> = midpoint_circle(0, 0, 7)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();

    for &(x, y) in &points {
        for reflected in [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            assert!(points.contains(&reflected), "missing reflection {reflected:?}");
        }
    }
}

#[test]
fn derived_circle_recovers_center_and_radius() {
    let boundary = midpoint_circle(100, 80, 40);
    let (center, radius) = circle_center_radius(&boundary);

    // the point set is symmetric, so the centroid lands on the true center
    assert!((center.x - 100.0).abs() < 1e-3);
    assert!((center.y - 80.0).abs() < 1e-3);
    assert!((39.0..=41.0).contains(&radius), "radius {radius}");
}

#[test]
fn derived_circle_is_zero_for_an_empty_set() {
    let (center, radius) = circle_center_radius(&[]);
    assert_eq!(center, Vec2::ZERO);
    assert_eq!(radius, 0.0);
}

// ---- park and fountain placement ----

#[test]
fn parks_keep_their_spacing_and_avoid_the_fountain() {
    let mut cfg = config();
    cfg.num_parks = 3;
    cfg.park_radius = 40;
    cfg.fountain_radius = 25;

    let (parks, fountain) = place_parks_and_fountain(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT);
    let fountain = fountain.expect("fountain requested");
    assert!(!fountain.is_empty());

    let min_spacing = cfg.park_radius as f32 * PARK_SPACING_FACTOR;
    let centers: Vec<Vec2> = parks.iter().map(|p| circle_center_radius(p).0).collect();

    for i in 0..centers.len() {
        for j in (i + 1)..centers.len() {
            assert!(
                centers[i].distance(centers[j]) >= min_spacing - 1e-3,
                "parks {i} and {j} too close"
            );
        }
    }

    let screen_center = Vec2::new(
        (SCREEN_WIDTH / 2) as f32,
        (SCREEN_HEIGHT / 2) as f32,
    );
    let min_fountain_distance =
        (cfg.park_radius + cfg.fountain_radius) as f32 + FOUNTAIN_CLEARANCE;
    for (i, center) in centers.iter().enumerate() {
        assert!(
            center.distance(screen_center) >= min_fountain_distance - 1e-3,
            "park {i} intrudes on the fountain clearance"
        );
    }
}

#[test]
fn fountain_is_placed_even_without_parks() {
    let mut cfg = config();
    cfg.num_parks = 0;
    cfg.fountain_radius = 25;

    let (parks, fountain) = place_parks_and_fountain(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT);
    assert!(parks.is_empty());

    let fountain = fountain.expect("fountain requested");
    let (center, _) = circle_center_radius(&fountain);
    assert!((center.x - (SCREEN_WIDTH / 2) as f32).abs() < 1e-3);
    assert!((center.y - (SCREEN_HEIGHT / 2) as f32).abs() < 1e-3);
}

#[test]
fn no_fountain_when_radius_is_zero() {
    let mut cfg = config();
    cfg.fountain_radius = 0;

    let (_, fountain) = place_parks_and_fountain(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT);
    assert!(fountain.is_none());
}

#[test]
fn oversized_park_request_falls_short_without_error() {
    let mut cfg = config();
    cfg.num_parks = 10;
    cfg.park_radius = 100;

    // not enough free canvas for ten non-overlapping circles this large,
    // the bounded attempt budget must end placement with a partial result
    let (parks, _) = place_parks_and_fountain(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT);
    assert!(parks.len() < 10);
}

// ---- road generation ----

#[test]
fn grid_pattern_produces_the_expected_road_count() {
    let mut cfg = config();
    cfg.layout_size = 5;
    cfg.road_pattern = RoadPattern::Grid;

    let mut road_gen = RoadGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let roads = road_gen.generate(&cfg);

    assert_eq!(roads.len(), ((cfg.layout_size + 1) * 2) as usize);
    for road in &roads {
        assert!(!road.points.is_empty());
        assert_eq!(road.width, cfg.road_width);
    }
}

#[test]
fn every_pattern_stays_on_the_canvas() {
    for pattern in [RoadPattern::Grid, RoadPattern::Radial, RoadPattern::Random] {
        let mut cfg = config();
        cfg.layout_size = 6;
        cfg.road_pattern = pattern;

        let mut road_gen = RoadGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        for road in road_gen.generate(&cfg) {
            for point in &road.points {
                assert!(
                    (0..SCREEN_WIDTH).contains(&point.x)
                        && (0..SCREEN_HEIGHT).contains(&point.y),
                    "{pattern:?} road point {:?} off canvas",
                    point
                );
            }
        }
    }
}

#[test]
fn obstacle_filter_strips_points_inside_reserved_circles() {
    let cfg = config();
    let parks = vec![midpoint_circle(200, 200, 40)];
    let fountain = midpoint_circle(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2, 25);

    let mut circles = vec![circle_center_radius(&parks[0])];
    circles.push(circle_center_radius(&fountain));

    let mut road_gen = RoadGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let roads = road_gen.generate_avoiding_obstacles(&cfg, &parks, Some(&fountain));

    for road in &roads {
        // a road that lost every point must have been dropped entirely
        assert!(!road.points.is_empty());

        for point in &road.points {
            for (center, radius) in &circles {
                assert!(
                    center.distance_squared(point.as_vec2()) > radius * radius,
                    "road point {:?} inside a reserved circle",
                    point
                );
            }
        }
    }
}

// ---- building placement ----

#[test]
fn skyline_policy_controls_kind_and_height_band() {
    let mut cfg = config();
    cfg.num_buildings = 30;
    cfg.num_parks = 0;
    cfg.fountain_radius = 0;

    for skyline in [SkylineType::LowRise, SkylineType::MidRise] {
        cfg.skyline = skyline;
        let buildings = place_buildings(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT, &[], &[], None);
        assert!(!buildings.is_empty());

        for building in &buildings {
            match skyline {
                SkylineType::LowRise => {
                    assert_eq!(building.kind, BuildingKind::LowRise);
                    assert!((LOW_RISE_MIN..LOW_RISE_MAX).contains(&building.height));
                }
                SkylineType::MidRise => {
                    assert_eq!(building.kind, BuildingKind::MidRise);
                    assert!((MID_RISE_MIN..MID_RISE_MAX).contains(&building.height));
                }
                _ => unreachable!(),
            }
        }
    }
}

#[test]
fn mixed_skyline_heights_match_their_kind() {
    let mut cfg = config();
    cfg.num_buildings = 30;
    cfg.num_parks = 0;
    cfg.fountain_radius = 0;
    cfg.skyline = SkylineType::Mixed;

    let buildings = place_buildings(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT, &[], &[], None);
    assert!(!buildings.is_empty());

    for building in &buildings {
        let band = match building.kind {
            BuildingKind::LowRise => LOW_RISE_MIN..LOW_RISE_MAX,
            BuildingKind::MidRise => MID_RISE_MIN..MID_RISE_MAX,
            BuildingKind::HighRise => HIGH_RISE_MIN..HIGH_RISE_MAX,
        };
        assert!(band.contains(&building.height), "height {}", building.height);
    }
}

#[test]
fn skyscraper_skyline_uses_only_mid_and_high_rise() {
    let mut cfg = config();
    cfg.num_buildings = 30;
    cfg.num_parks = 0;
    cfg.fountain_radius = 0;
    cfg.skyline = SkylineType::Skyscraper;

    let buildings = place_buildings(&cfg, SCREEN_WIDTH, SCREEN_HEIGHT, &[], &[], None);
    assert!(!buildings.is_empty());
    assert!(
        buildings
            .iter()
            .all(|b| b.kind != BuildingKind::LowRise)
    );
}

#[test]
fn standard_footprint_tracks_the_layout_cell_size() {
    let mut cfg = config();
    cfg.layout_size = 10;
    cfg.update_standard_building_size();

    let cell = (SCREEN_WIDTH - 2 * ROAD_MARGIN) as f32 / cfg.layout_size as f32;
    assert!((cfg.standard_width - cell * STANDARD_FOOTPRINT_CELL_RATIO).abs() < 1e-3);
    assert!((cfg.standard_depth - cell * STANDARD_FOOTPRINT_CELL_RATIO).abs() < 1e-3);
}

// ---- full generation ----

#[test]
fn generated_city_honors_every_separation_rule() {
    let cfg = config();
    let mut city_gen = CityGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    city_gen.generate(&cfg);

    let city = city_gen.city();
    assert!(city.generated);

    // padded bounding boxes never intersect
    for i in 0..city.buildings.len() {
        for j in (i + 1)..city.buildings.len() {
            let a = &city.buildings[i];
            let b = &city.buildings[j];

            let separated = a.x + a.width / 2.0 + BUILDING_BUFFER < b.x - b.width / 2.0
                || a.x - a.width / 2.0 - BUILDING_BUFFER > b.x + b.width / 2.0
                || a.y + a.depth / 2.0 + BUILDING_BUFFER < b.y - b.depth / 2.0
                || a.y - a.depth / 2.0 - BUILDING_BUFFER > b.y + b.depth / 2.0;
            assert!(separated, "buildings {i} and {j} overlap their padding");
        }
    }

    let mut zones: Vec<&Vec<Point>> = city.parks.iter().collect();
    if let Some(fountain) = &city.fountain {
        zones.push(fountain);
    }

    for (b_idx, building) in city.buildings.iter().enumerate() {
        let left = building.x - building.width / 2.0;
        let right = building.x + building.width / 2.0;
        let top = building.y - building.depth / 2.0;
        let bottom = building.y + building.depth / 2.0;

        // the padded box stays inside the canvas
        assert!(left >= SCREEN_EDGE_BUFFER && top >= SCREEN_EDGE_BUFFER);
        assert!(right <= SCREEN_WIDTH as f32 - SCREEN_EDGE_BUFFER);
        assert!(bottom <= SCREEN_HEIGHT as f32 - SCREEN_EDGE_BUFFER);

        // both halves of the park/fountain test hold for accepted placements
        for zone in &zones {
            let (center, radius) = circle_center_radius(zone);

            let closest_x = center.x.clamp(left - PARK_BUFFER, right + PARK_BUFFER);
            let closest_y = center.y.clamp(top - PARK_BUFFER, bottom + PARK_BUFFER);
            let buffered = radius + PARK_BUFFER;
            assert!(
                Vec2::new(closest_x, closest_y).distance_squared(center)
                    >= buffered * buffered - 1e-3,
                "building {b_idx} inside a reserved circle zone"
            );

            for point in zone.iter() {
                let px = point.x as f32;
                let py = point.y as f32;
                let inside = px >= left - PARK_BUFFER
                    && px <= right + PARK_BUFFER
                    && py >= top - PARK_BUFFER
                    && py <= bottom + PARK_BUFFER;
                assert!(!inside, "building {b_idx} contains boundary point {:?}", point);
            }
        }

        // road points, expanded by half the road width plus the buffer
        for road in &city.roads {
            let reach = ROAD_BUFFER + road.width as f32 / 2.0;
            for point in &road.points {
                let px = point.x as f32;
                let py = point.y as f32;
                let inside = px >= left - reach
                    && px <= right + reach
                    && py >= top - reach
                    && py <= bottom + reach;
                assert!(!inside, "building {b_idx} touches road point {:?}", point);
            }
        }
    }
}

#[test]
fn end_to_end_scenario_produces_a_complete_scene() {
    let mut cfg = config();
    cfg.num_buildings = 10;
    cfg.layout_size = 5;
    cfg.num_parks = 2;
    cfg.park_radius = 40;
    cfg.fountain_radius = 25;
    cfg.road_pattern = RoadPattern::Grid;

    let mut city_gen = CityGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    assert!(!city_gen.has_city());

    city_gen.generate(&cfg);
    assert!(city_gen.has_city());

    let city = city_gen.city();
    assert!(city.parks.len() <= 2);
    assert!(city.buildings.len() <= 10);
    assert!(city.fountain.as_ref().is_some_and(|f| !f.is_empty()));

    // twelve grid roads exist before any obstacle filtering
    let mut road_gen = RoadGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    assert_eq!(road_gen.generate(&cfg).len(), 12);
}

#[test]
fn regeneration_replaces_the_scene_wholesale() {
    let cfg = config();
    let mut city_gen = CityGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    city_gen.generate(&cfg);
    let first_roads = city_gen.city().roads.len();
    assert!(city_gen.has_city());

    let mut smaller = cfg.clone();
    smaller.num_parks = 0;
    smaller.fountain_radius = 0;
    smaller.layout_size = 5;
    city_gen.generate(&smaller);

    let city = city_gen.city();
    assert!(city.generated);
    assert!(city.parks.is_empty());
    assert!(city.fountain.is_none());
    // an unfiltered 5x5 grid has exactly 12 roads, nothing lingers from the
    // previous, larger scene
    assert_eq!(city.roads.len(), 12);
    assert_ne!(city.roads.len(), first_roads);
}
