// Configuration file, all measurements in canvas pixels (1 unit = 1 pixel)
// This controls the generation canvas and the collision tuning constants

// Generation canvas (pixels)
pub const SCREEN_WIDTH: i32 = 800;   // Layout canvas width, fixed per generator
pub const SCREEN_HEIGHT: i32 = 600;  // Layout canvas height

// Road layout parameters
pub const ROAD_MARGIN: i32 = 50;          // Road endpoints stay this far from the canvas edge
pub const RING_SAMPLE_STRIDE: usize = 8;  // Ring roads connect every 8th surviving circle point

// Park / fountain placement
pub const PARK_EDGE_CLEARANCE: i32 = 50;       // Added to the park radius when sampling centers
pub const PARK_SPACING_FACTOR: f32 = 2.5;      // Min center distance = factor * park radius
pub const FOUNTAIN_CLEARANCE: f32 = 30.0;      // Extra gap between park rim and fountain rim
pub const PARK_ATTEMPTS_PER_REQUEST: usize = 100;

// Building placement
pub const BUILDING_SAMPLE_MARGIN: i32 = 80;    // Candidate centers stay this far from the edge
pub const SCREEN_EDGE_BUFFER: f32 = 60.0;      // Footprint must stay inside this canvas inset
pub const BUILDING_BUFFER: f32 = 25.0;         // Min gap between building bounding boxes
pub const PARK_BUFFER: f32 = 35.0;             // Min gap between a building box and park geometry
pub const ROAD_BUFFER: f32 = 5.0;              // Min gap between a building box and a road point
pub const BUILDING_ATTEMPTS_PER_REQUEST: usize = 50;

// Randomized footprint range (pixels)
pub const FOOTPRINT_MIN: f32 = 20.0;
pub const FOOTPRINT_MAX: f32 = 60.0;
pub const STANDARD_FOOTPRINT_CELL_RATIO: f32 = 0.40;  // Standard size = 40% of a grid cell

// Skyline height bands (pixels of vertical extent)
pub const LOW_RISE_MIN: f32 = 10.0;
pub const LOW_RISE_MAX: f32 = 30.0;
pub const MID_RISE_MIN: f32 = 40.0;
pub const MID_RISE_MAX: f32 = 100.0;
pub const HIGH_RISE_MIN: f32 = 120.0;
pub const HIGH_RISE_MAX: f32 = 250.0;

// Default generation parameters
pub const DEFAULT_BUILDINGS: usize = 20;
pub const DEFAULT_LAYOUT_SIZE: i32 = 10;
pub const DEFAULT_ROAD_WIDTH: i32 = 14;
pub const DEFAULT_PARKS: usize = 3;
pub const DEFAULT_PARK_RADIUS: i32 = 40;
pub const DEFAULT_FOUNTAIN_RADIUS: i32 = 25;

// Render layer heights, keeps coplanar ground geometry from z-fighting
pub const ROAD_LAYER: f32 = 0.15;
pub const PARK_LAYER: f32 = 0.25;
pub const FOUNTAIN_LAYER: f32 = 0.35;
pub const FOOTPRINT_LAYER: f32 = 0.45;
