use bevy::prelude::*;

use crate::systems::city::{CityConfig, RegenerateEvent, RespawnEvent};
use crate::systems::ui::indicator::StatusChangeEvent;
use crate::systems::ui::Is3D;

// keyboard mapping for config changes and regeneration
// parameter keys only update the config, G rebuilds the city
pub fn handle_key_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut config: ResMut<CityConfig>,
    mut is_3d: ResMut<Is3D>,
    mut regen_events: EventWriter<RegenerateEvent>,
    mut respawn_events: EventWriter<RespawnEvent>,
    mut status_events: EventWriter<StatusChangeEvent>,
) {
    // building count
    if keys.just_pressed(KeyCode::Digit1) {
        config.num_buildings = config.num_buildings.saturating_sub(5).max(1);
        info!("buildings: {}", config.num_buildings);
    }
    if keys.just_pressed(KeyCode::Digit2) {
        config.num_buildings = (config.num_buildings + 5).min(100);
        info!("buildings: {}", config.num_buildings);
    }

    // layout size, the standard footprint follows the cell size
    if keys.just_pressed(KeyCode::Digit3) {
        config.layout_size = (config.layout_size - 1).max(5);
        config.update_standard_building_size();
        info!("layout size: {0}x{0}", config.layout_size);
    }
    if keys.just_pressed(KeyCode::Digit4) {
        config.layout_size = (config.layout_size + 1).min(20);
        config.update_standard_building_size();
        info!("layout size: {0}x{0}", config.layout_size);
    }

    // road width
    if keys.just_pressed(KeyCode::Digit5) {
        config.road_width = (config.road_width - 2).max(2);
        info!("road width: {} pixels", config.road_width);
    }
    if keys.just_pressed(KeyCode::Digit6) {
        config.road_width = (config.road_width + 2).min(20);
        info!("road width: {} pixels", config.road_width);
    }

    // park radius
    if keys.just_pressed(KeyCode::Digit7) {
        config.park_radius = (config.park_radius - 5).max(10);
        info!("park radius: {}", config.park_radius);
    }
    if keys.just_pressed(KeyCode::Digit8) {
        config.park_radius = (config.park_radius + 5).min(100);
        info!("park radius: {}", config.park_radius);
    }

    // park count
    if keys.just_pressed(KeyCode::Digit9) {
        config.num_parks = config.num_parks.saturating_sub(1);
        info!("parks: {}", config.num_parks);
    }
    if keys.just_pressed(KeyCode::Digit0) {
        config.num_parks = (config.num_parks + 1).min(10);
        info!("parks: {}", config.num_parks);
    }

    // cycle road pattern
    if keys.just_pressed(KeyCode::KeyR) {
        config.road_pattern = config.road_pattern.next();
        info!("road pattern: {}", config.road_pattern.label());
        status_events.write(StatusChangeEvent(
            config.road_pattern.label().to_uppercase(),
        ));
    }

    // cycle skyline type
    if keys.just_pressed(KeyCode::KeyL) {
        config.skyline = config.skyline.next();
        info!("skyline: {}", config.skyline.label());
        status_events.write(StatusChangeEvent(config.skyline.label().to_uppercase()));
    }

    // cycle texture theme, recolors the current city without relayout
    if keys.just_pressed(KeyCode::KeyT) {
        config.theme = config.theme.next();
        info!("theme: {}", config.theme.label());
        status_events.write(StatusChangeEvent(config.theme.label().to_uppercase()));
        respawn_events.write(RespawnEvent);
    }

    // toggle standard/random building size
    if keys.just_pressed(KeyCode::KeyB) {
        config.use_standard_size = !config.use_standard_size;
        if config.use_standard_size {
            info!(
                "building size: standard ({}x{} px)",
                config.standard_width as i32, config.standard_depth as i32
            );
        } else {
            info!("building size: random");
        }
    }

    // toggle fountain size
    if keys.just_pressed(KeyCode::KeyF) {
        config.fountain_radius = if config.fountain_radius == 25 { 40 } else { 25 };
        info!("fountain radius: {}", config.fountain_radius);
    }

    // toggle 2d/3d view, layout is untouched
    if keys.just_pressed(KeyCode::KeyV) {
        is_3d.0 = !is_3d.0;
        info!("view mode: {}", if is_3d.0 { "3D" } else { "2D" });
        status_events.write(StatusChangeEvent(
            if is_3d.0 { "3D VIEW" } else { "2D VIEW" }.to_string(),
        ));
    }

    // rebuild the city with the current settings
    if keys.just_pressed(KeyCode::KeyG) {
        regen_events.write(RegenerateEvent);
    }
}
