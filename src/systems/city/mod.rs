// this is the entry point for the city generation plugin
use bevy::prelude::*;

use crate::config::*;

pub mod buildings;
pub mod generator;
pub mod mesh_gen;
pub mod parks;
pub mod raster;
pub mod roads;
pub mod scene;

pub use generator::CityGenerator;

// road network patterns
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoadPattern {
    Grid,
    Radial,
    Random,
}

impl RoadPattern {
    pub fn label(self) -> &'static str {
        match self {
            RoadPattern::Grid => "Grid",
            RoadPattern::Radial => "Radial",
            RoadPattern::Random => "Random",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RoadPattern::Grid => RoadPattern::Radial,
            RoadPattern::Radial => RoadPattern::Random,
            RoadPattern::Random => RoadPattern::Grid,
        }
    }
}

// building height distribution strategies
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkylineType {
    LowRise,
    MidRise,
    Skyscraper,
    Mixed,
}

impl SkylineType {
    pub fn label(self) -> &'static str {
        match self {
            SkylineType::LowRise => "Low-Rise",
            SkylineType::MidRise => "Mid-Rise",
            SkylineType::Skyscraper => "Skyscraper",
            SkylineType::Mixed => "Mixed",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SkylineType::LowRise => SkylineType::MidRise,
            SkylineType::MidRise => SkylineType::Skyscraper,
            SkylineType::Skyscraper => SkylineType::Mixed,
            SkylineType::Mixed => SkylineType::LowRise,
        }
    }
}

// building facade palettes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextureTheme {
    Modern,
    Classic,
    Industrial,
    Futuristic,
}

impl TextureTheme {
    pub fn label(self) -> &'static str {
        match self {
            TextureTheme::Modern => "Modern",
            TextureTheme::Classic => "Classic",
            TextureTheme::Industrial => "Industrial",
            TextureTheme::Futuristic => "Futuristic",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TextureTheme::Modern => TextureTheme::Classic,
            TextureTheme::Classic => TextureTheme::Industrial,
            TextureTheme::Industrial => TextureTheme::Futuristic,
            TextureTheme::Futuristic => TextureTheme::Modern,
        }
    }
}

// all user controlled generation parameters, immutable per generation call
#[derive(Resource, Clone)]
pub struct CityConfig {
    pub num_buildings: usize,
    pub layout_size: i32,
    pub road_pattern: RoadPattern,
    pub road_width: i32,
    pub skyline: SkylineType,
    pub theme: TextureTheme,
    pub park_radius: i32,
    pub num_parks: usize,
    pub fountain_radius: i32,
    pub use_standard_size: bool,
    pub standard_width: f32,
    pub standard_depth: f32,
}

impl Default for CityConfig {
    fn default() -> Self {
        let mut config = Self {
            num_buildings: DEFAULT_BUILDINGS,
            layout_size: DEFAULT_LAYOUT_SIZE,
            road_pattern: RoadPattern::Grid,
            road_width: DEFAULT_ROAD_WIDTH,
            skyline: SkylineType::Mixed,
            theme: TextureTheme::Modern,
            park_radius: DEFAULT_PARK_RADIUS,
            num_parks: DEFAULT_PARKS,
            fountain_radius: DEFAULT_FOUNTAIN_RADIUS,
            use_standard_size: true,
            standard_width: 0.0,
            standard_depth: 0.0,
        };
        config.update_standard_building_size();
        config
    }
}

impl CityConfig {
    // the standard footprint tracks the grid cell size so buildings fit
    // inside one cell with room for the roads around it
    pub fn update_standard_building_size(&mut self) {
        let cell = (SCREEN_WIDTH - 2 * ROAD_MARGIN) as f32 / self.layout_size as f32;
        self.standard_width = cell * STANDARD_FOOTPRINT_CELL_RATIO;
        self.standard_depth = cell * STANDARD_FOOTPRINT_CELL_RATIO;
    }
}

// full regeneration request, layout is re-randomized
#[derive(Event)]
pub struct RegenerateEvent;

// respawn of the current snapshot without regenerating, used for recoloring
#[derive(Event)]
pub struct RespawnEvent;

// main plugin for generation
pub struct CityGenerationPlugin;

impl Plugin for CityGenerationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CityConfig::default())
            .insert_resource(CityGenerator::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .add_event::<RegenerateEvent>()
            .add_event::<RespawnEvent>()
            .add_systems(Startup, scene::initial_generation)
            .add_systems(Update, (scene::handle_regeneration, scene::apply_view_mode));
    }
}
