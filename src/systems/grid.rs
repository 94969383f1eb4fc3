use bevy::prelude::*;
use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// ground reference grid over the generation canvas
// gives the user a sense of pixel scale and shows the layout bounds
pub struct GridPlugin;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GridGizmoGroup;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GridConfig::default())
            .init_gizmo_group::<GridGizmoGroup>()
            .add_systems(Startup, setup_gizmos)
            .add_systems(Update, draw_grid);
    }
}

// setting these parameters as a resource allows for runtime modifications
#[derive(Resource)]
pub struct GridConfig {
    pub major_spacing: f32,
    pub minor_spacing: f32,
    pub major_color: Color,
    pub minor_color: Color,
    pub border_color: Color,
    pub enabled: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            major_spacing: 100.0,
            minor_spacing: 25.0,
            major_color: Color::srgba(0.5, 0.5, 0.5, 0.15),
            minor_color: Color::srgba(0.3, 0.3, 0.3, 0.05),
            border_color: Color::srgba(0.6, 0.6, 0.7, 0.4),
            enabled: true,
        }
    }
}

fn setup_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<GridGizmoGroup>();
    config.depth_bias = 0.1; // render depth
}

fn draw_grid(mut gizmos: Gizmos<GridGizmoGroup>, params: Res<GridConfig>) {
    if !params.enabled {
        return;
    }

    let half_w = SCREEN_WIDTH as f32 / 2.0;
    let half_h = SCREEN_HEIGHT as f32 / 2.0;

    // minor grid lines
    let mut x = -half_w;
    while x <= half_w {
        // skip the ones that would be major
        if (x % params.major_spacing).abs() > f32::EPSILON {
            gizmos.line(
                Vec3::new(x, -0.01, -half_h),
                Vec3::new(x, -0.01, half_h),
                params.minor_color,
            );
        }
        x += params.minor_spacing;
    }

    let mut z = -half_h;
    while z <= half_h {
        if (z % params.major_spacing).abs() > f32::EPSILON {
            gizmos.line(
                Vec3::new(-half_w, -0.01, z),
                Vec3::new(half_w, -0.01, z),
                params.minor_color,
            );
        }
        z += params.minor_spacing;
    }

    // major grid lines
    let mut x = -half_w;
    while x <= half_w {
        gizmos.line(
            Vec3::new(x, -0.02, -half_h),
            Vec3::new(x, -0.02, half_h),
            params.major_color,
        );
        x += params.major_spacing;
    }

    let mut z = -half_h;
    while z <= half_h {
        gizmos.line(
            Vec3::new(-half_w, -0.02, z),
            Vec3::new(half_w, -0.02, z),
            params.major_color,
        );
        z += params.major_spacing;
    }

    // canvas border
    let corners = [
        Vec3::new(-half_w, 0.0, -half_h),
        Vec3::new(half_w, 0.0, -half_h),
        Vec3::new(half_w, 0.0, half_h),
        Vec3::new(-half_w, 0.0, half_h),
    ];
    for i in 0..corners.len() {
        gizmos.line(corners[i], corners[(i + 1) % corners.len()], params.border_color);
    }
}
