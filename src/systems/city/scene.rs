use bevy::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config::{FOOTPRINT_LAYER, FOUNTAIN_LAYER, PARK_LAYER};
use crate::systems::ui::Is3D;

use super::buildings::BuildingKind;
use super::mesh_gen;
use super::raster::circle_center_radius;
use super::{CityConfig, CityGenerator, RegenerateEvent, RespawnEvent, TextureTheme};

// root of the spawned city hierarchy
#[derive(Component)]
pub struct City;

// extruded block entities, hidden in the 2d view
#[derive(Component)]
pub struct BuildingBlock;

pub fn initial_generation(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<CityConfig>,
    mut city_gen: ResMut<CityGenerator>,
    is_3d: Res<Is3D>,
) {
    city_gen.generate(&config);
    spawn_city(
        &mut commands,
        &mut meshes,
        &mut materials,
        &city_gen,
        &config,
        is_3d.0,
    );
}

pub fn handle_regeneration(
    mut commands: Commands,
    mut regen_events: EventReader<RegenerateEvent>,
    mut respawn_events: EventReader<RespawnEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<CityConfig>,
    mut city_gen: ResMut<CityGenerator>,
    query: Query<Entity, With<City>>,
    is_3d: Res<Is3D>,
) {
    // several requests in one frame collapse into a single rebuild
    let regenerate = !regen_events.is_empty();
    let respawn = !respawn_events.is_empty();
    regen_events.clear();
    respawn_events.clear();

    if !regenerate && !respawn {
        return;
    }

    // cleanup existing city, children are handled automatically
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }

    if regenerate {
        city_gen.generate(&config);
    }

    spawn_city(
        &mut commands,
        &mut meshes,
        &mut materials,
        &city_gen,
        &config,
        is_3d.0,
    );
}

// the 2d/3d toggle only flips block visibility, the layout is untouched
pub fn apply_view_mode(
    is_3d: Res<Is3D>,
    mut query: Query<&mut Visibility, With<BuildingBlock>>,
) {
    if !is_3d.is_changed() {
        return;
    }

    for mut visibility in query.iter_mut() {
        *visibility = if is_3d.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub fn spawn_city(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    city_gen: &CityGenerator,
    config: &CityConfig,
    is_3d: bool,
) {
    let city = city_gen.city();
    if !city.generated {
        return;
    }

    let root = commands
        .spawn((City, Transform::default(), Visibility::default()))
        .id();
    let mut children = Vec::new();

    // roads as flat asphalt ribbons
    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.25, 0.28),
        perceptual_roughness: 1.0,
        ..default()
    });
    for road in &city.roads {
        children.push(
            commands
                .spawn((
                    Mesh3d(meshes.add(mesh_gen::road_mesh(road))),
                    MeshMaterial3d(road_material.clone()),
                    Transform::default(),
                    Visibility::Visible,
                ))
                .id(),
        );
    }

    // parks and fountain as discs at their derived center and radius
    let park_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.8, 0.3),
        perceptual_roughness: 1.0,
        ..default()
    });
    for park in city.parks.iter().filter(|p| !p.is_empty()) {
        let (center, radius) = circle_center_radius(park);
        children.push(
            commands
                .spawn((
                    Mesh3d(meshes.add(mesh_gen::disc_mesh(radius))),
                    MeshMaterial3d(park_material.clone()),
                    Transform::from_translation(mesh_gen::world_pos(
                        center.x, center.y, PARK_LAYER,
                    )),
                    Visibility::Visible,
                ))
                .id(),
        );
    }

    if let Some(fountain) = city.fountain.as_ref().filter(|f| !f.is_empty()) {
        let (center, radius) = circle_center_radius(fountain);
        let fountain_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.7, 1.0),
            perceptual_roughness: 0.3,
            ..default()
        });
        children.push(
            commands
                .spawn((
                    Mesh3d(meshes.add(mesh_gen::disc_mesh(radius))),
                    MeshMaterial3d(fountain_material),
                    Transform::from_translation(mesh_gen::world_pos(
                        center.x,
                        center.y,
                        FOUNTAIN_LAYER,
                    )),
                    Visibility::Visible,
                ))
                .id(),
        );
    }

    // buildings: a footprint quad always, the extruded block only in 3d view
    let mut rng = StdRng::from_os_rng();
    for building in &city.buildings {
        let (r, g, b) = building_color(config.theme, building.kind);

        // slight tint variation per building
        let mut jitter = |c: f32| (c + rng.random_range(-0.04..0.04)).clamp(0.0, 1.0);
        let (r, g, b) = (jitter(r), jitter(g), jitter(b));

        let footprint_material = materials.add(StandardMaterial {
            base_color: Color::srgb(r * 0.8, g * 0.8, b * 0.8),
            perceptual_roughness: 1.0,
            ..default()
        });
        let block_material = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            ..default()
        });

        let footprint = commands
            .spawn((
                Mesh3d(meshes.add(mesh_gen::footprint_mesh(building.width, building.depth))),
                MeshMaterial3d(footprint_material),
                Transform::from_translation(mesh_gen::world_pos(
                    building.x,
                    building.y,
                    FOOTPRINT_LAYER,
                )),
                Visibility::Visible,
            ))
            .id();

        let block = commands
            .spawn((
                BuildingBlock,
                Mesh3d(meshes.add(mesh_gen::block_mesh(
                    building.width,
                    building.depth,
                    building.height,
                ))),
                MeshMaterial3d(block_material),
                Transform::from_translation(mesh_gen::world_pos(building.x, building.y, 0.0)),
                if is_3d {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
            ))
            .id();

        children.push(footprint);
        children.push(block);
    }

    commands.entity(root).add_children(&children);
}

// facade palette per texture theme and building class
// brick, concrete and glass base tones
fn building_color(theme: TextureTheme, kind: BuildingKind) -> (f32, f32, f32) {
    const BRICK: (f32, f32, f32) = (0.70, 0.40, 0.30);
    const CONCRETE: (f32, f32, f32) = (0.55, 0.55, 0.55);
    const GLASS: (f32, f32, f32) = (0.55, 0.70, 0.85);

    match theme {
        TextureTheme::Modern => match kind {
            BuildingKind::LowRise => BRICK,
            BuildingKind::MidRise => CONCRETE,
            BuildingKind::HighRise => GLASS,
        },
        TextureTheme::Classic => match kind {
            BuildingKind::LowRise | BuildingKind::MidRise => BRICK,
            BuildingKind::HighRise => CONCRETE,
        },
        // concrete and metal everywhere
        TextureTheme::Industrial => CONCRETE,
        // glass everywhere, even the low-rises
        TextureTheme::Futuristic => GLASS,
    }
}
