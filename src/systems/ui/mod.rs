use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::systems::city::{
    CityConfig, CityGenerator, RegenerateEvent, RespawnEvent, RoadPattern, SkylineType,
    TextureTheme,
};

pub mod indicator;

// re-export the main items that other modules need
pub use indicator::{StatusChangeEvent, StatusIndicator};
pub use indicator::{render_status_indicator, update_status_indicator};

#[derive(Resource)]
pub struct Is3D(pub bool);

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app.insert_resource(Is3D(false))
            .insert_resource(StatusIndicator::default())
            .add_event::<StatusChangeEvent>()
            .add_systems(Update, update_status_indicator)
            .add_systems(
                EguiPrimaryContextPass,
                (ui_main, fps, render_status_indicator),
            ); // UI rendering here
    }
}

fn ui_main(
    mut contexts: EguiContexts,
    mut config: ResMut<CityConfig>,
    mut is_3d: ResMut<Is3D>,
    city_gen: Res<CityGenerator>,
    mut regen_events: EventWriter<RegenerateEvent>,
    mut respawn_events: EventWriter<RespawnEvent>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::SidePanel::left("config_panel")
            .default_width(220.0)
            .min_width(250.0)
            .max_width(400.0)
            .resizable(true)
            .show(ctx, |ui| {
                let mut regenerate = false;

                // camera
                ui.label("Camera: ");
                ui.label("WASD - Move");
                ui.label("Scroll - Zoom");
                ui.label("MMB - Rotate");

                ui.separator();

                // view mode, only flips rendering, the scene systems swap visibility
                ui.checkbox(&mut is_3d.0, "3D view")
                    .on_hover_text("Toggle between flat footprints and extruded buildings");

                ui.separator();

                ui.label("Generation Parameters:");

                // building parameters
                egui::CollapsingHeader::new("Buildings")
                    .default_open(true)
                    .show(ui, |ui| {
                        regenerate |= ui
                            .add(egui::Slider::new(&mut config.num_buildings, 1..=100)
                                .text("Count"))
                            .on_hover_text("Number of buildings to place. Fewer may fit on a crowded canvas.")
                            .changed();
                        regenerate |= ui
                            .checkbox(&mut config.use_standard_size, "Standard footprint")
                            .on_hover_text("All buildings share one footprint sized to the grid cells")
                            .changed();
                        if config.use_standard_size {
                            ui.label(format!(
                                "Footprint: {}x{} px",
                                config.standard_width as i32, config.standard_depth as i32
                            ));
                        } else {
                            ui.label("Footprint: random 20-60 px");
                        }
                    });

                // road parameters
                egui::CollapsingHeader::new("Roads")
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::ComboBox::from_label("Pattern")
                            .selected_text(config.road_pattern.label())
                            .show_ui(ui, |ui| {
                                for pattern in
                                    [RoadPattern::Grid, RoadPattern::Radial, RoadPattern::Random]
                                {
                                    regenerate |= ui
                                        .selectable_value(
                                            &mut config.road_pattern,
                                            pattern,
                                            pattern.label(),
                                        )
                                        .changed();
                                }
                            });

                        let layout_changed = ui
                            .add(egui::Slider::new(&mut config.layout_size, 5..=20)
                                .text("Layout Size"))
                            .on_hover_text("Grid dimension, spoke count, or random density")
                            .changed();
                        if layout_changed {
                            // keep the standard footprint matched to the cell size
                            config.update_standard_building_size();
                        }
                        regenerate |= layout_changed;

                        regenerate |= ui
                            .add(egui::Slider::new(&mut config.road_width, 2..=20)
                                .text("Road Width (px)"))
                            .changed();
                    });

                // skyline parameters
                egui::CollapsingHeader::new("Skyline")
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::ComboBox::from_label("Distribution")
                            .selected_text(config.skyline.label())
                            .show_ui(ui, |ui| {
                                for skyline in [
                                    SkylineType::LowRise,
                                    SkylineType::MidRise,
                                    SkylineType::Skyscraper,
                                    SkylineType::Mixed,
                                ] {
                                    regenerate |= ui
                                        .selectable_value(
                                            &mut config.skyline,
                                            skyline,
                                            skyline.label(),
                                        )
                                        .changed();
                                }
                            });
                    });

                // park and fountain parameters
                egui::CollapsingHeader::new("Parks & Fountain")
                    .default_open(true)
                    .show(ui, |ui| {
                        regenerate |= ui
                            .add(egui::Slider::new(&mut config.num_parks, 0..=10)
                                .text("Parks"))
                            .on_hover_text("Requested count, crowded layouts may place fewer")
                            .changed();
                        regenerate |= ui
                            .add(egui::Slider::new(&mut config.park_radius, 10..=100)
                                .text("Park Radius (px)"))
                            .changed();

                        ui.horizontal(|ui| {
                            ui.label("Fountain:");
                            regenerate |= ui
                                .selectable_value(&mut config.fountain_radius, 0, "Off")
                                .changed();
                            regenerate |= ui
                                .selectable_value(&mut config.fountain_radius, 25, "Small")
                                .changed();
                            regenerate |= ui
                                .selectable_value(&mut config.fountain_radius, 40, "Large")
                                .changed();
                        });
                    });

                // facade theme only recolors, the layout is untouched
                egui::CollapsingHeader::new("Theme")
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::ComboBox::from_label("Facades")
                            .selected_text(config.theme.label())
                            .show_ui(ui, |ui| {
                                for theme in [
                                    TextureTheme::Modern,
                                    TextureTheme::Classic,
                                    TextureTheme::Industrial,
                                    TextureTheme::Futuristic,
                                ] {
                                    if ui
                                        .selectable_value(&mut config.theme, theme, theme.label())
                                        .changed()
                                    {
                                        respawn_events.write(RespawnEvent);
                                    }
                                }
                            });
                    });

                ui.separator();

                if ui.button("Regenerate").clicked() {
                    regenerate = true;
                }

                // placement report, a shortfall is informational
                if city_gen.has_city() {
                    let city = city_gen.city();
                    ui.separator();
                    ui.label("Current city:");
                    ui.label(format!("Roads: {}", city.roads.len()));

                    let park_color = if city.parks.len() < config.num_parks {
                        egui::Color32::from_rgb(220, 150, 40)
                    } else {
                        egui::Color32::from_rgb(34, 139, 34)
                    };
                    ui.label(
                        egui::RichText::new(format!(
                            "Parks: {}/{}",
                            city.parks.len(),
                            config.num_parks
                        ))
                        .color(park_color),
                    );

                    let building_color = if city.buildings.len() < config.num_buildings {
                        egui::Color32::from_rgb(220, 150, 40)
                    } else {
                        egui::Color32::from_rgb(34, 139, 34)
                    };
                    ui.label(
                        egui::RichText::new(format!(
                            "Buildings: {}/{}",
                            city.buildings.len(),
                            config.num_buildings
                        ))
                        .color(building_color),
                    );

                    ui.label(format!(
                        "Fountain: {}",
                        if city.fountain.is_some() { "yes" } else { "no" }
                    ));
                }

                ui.separator();

                // keyboard shortcuts
                egui::CollapsingHeader::new("Shortcuts")
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label("G - Regenerate");
                        ui.label("V - Toggle 2D/3D view");
                        ui.label("R - Cycle road pattern");
                        ui.label("L - Cycle skyline");
                        ui.label("T - Cycle theme");
                        ui.label("B - Standard/random size");
                        ui.label("F - Fountain size");
                        ui.label("1/2 - Building count");
                        ui.label("3/4 - Layout size");
                        ui.label("5/6 - Road width");
                        ui.label("7/8 - Park radius");
                        ui.label("9/0 - Park count");
                    });

                ui.separator();
                ui.label("ESC - Exit");

                // trigger regeneration on any parameter change
                if regenerate {
                    regen_events.write(RegenerateEvent);
                }
            });
    }
}

fn fps(mut contexts: EguiContexts, diagnostics: Res<DiagnosticsStore>) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                    if let Some(fps_diagnostic) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS)
                    {
                        if let Some(fps) = fps_diagnostic.smoothed() {
                            ui.label(
                                egui::RichText::new(format!("{:.0}", fps))
                                    .size(26.0)
                                    .color(egui::Color32::WHITE),
                            );
                        }
                    }
                });
            });
    }
}
