// city orchestration
// one scene snapshot, rebuilt wholesale on every generation request

use bevy::prelude::*;

use super::CityConfig;
use super::buildings::{self, Building};
use super::parks;
use super::raster::Point;
use super::roads::{Road, RoadGenerator};

// everything one generation pass produced
// consumers only ever see a completed snapshot, never a partial one
#[derive(Default)]
pub struct CityData {
    pub roads: Vec<Road>,
    pub parks: Vec<Vec<Point>>,
    pub fountain: Option<Vec<Point>>,
    pub buildings: Vec<Building>,
    pub generated: bool,
}

impl CityData {
    fn clear(&mut self) {
        self.roads.clear();
        self.parks.clear();
        self.fountain = None;
        self.buildings.clear();
        self.generated = false;
    }
}

#[derive(Resource)]
pub struct CityGenerator {
    road_gen: RoadGenerator,
    data: CityData,
    screen_w: i32,
    screen_h: i32,
}

impl CityGenerator {
    pub fn new(screen_w: i32, screen_h: i32) -> Self {
        Self {
            road_gen: RoadGenerator::new(screen_w, screen_h),
            data: CityData::default(),
            screen_w,
            screen_h,
        }
    }

    // strict phase order: parks and fountain first, then roads filtered
    // against them, then buildings validated against everything placed
    pub fn generate(&mut self, config: &CityConfig) {
        info!("generating city...");

        self.data.clear();

        let (parks, fountain) =
            parks::place_parks_and_fountain(config, self.screen_w, self.screen_h);
        self.data.parks = parks;
        self.data.fountain = fountain;

        self.data.roads = self.road_gen.generate_avoiding_obstacles(
            config,
            &self.data.parks,
            self.data.fountain.as_ref(),
        );

        self.data.buildings = buildings::place_buildings(
            config,
            self.screen_w,
            self.screen_h,
            &self.data.roads,
            &self.data.parks,
            self.data.fountain.as_ref(),
        );

        self.data.generated = true;

        info!(
            "city generation complete: {} parks, {} buildings, {} roads",
            self.data.parks.len(),
            self.data.buildings.len(),
            self.data.roads.len()
        );
    }

    pub fn has_city(&self) -> bool {
        self.data.generated
    }

    pub fn city(&self) -> &CityData {
        &self.data
    }
}
