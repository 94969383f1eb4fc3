use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

// transient top-center flash for keyboard toggles
// tells the user what a cycle key just switched to
#[derive(Resource)]
pub struct StatusIndicator {
    pub text: String,
    pub timer: f32,
    pub duration: f32,
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self {
            text: String::new(),
            timer: 0.0,
            duration: 2.0,
        }
    }
}

#[derive(Event)]
pub struct StatusChangeEvent(pub String);

pub fn update_status_indicator(
    mut indicator: ResMut<StatusIndicator>,
    mut events: EventReader<StatusChangeEvent>,
    time: Res<Time>,
) {
    for event in events.read() {
        indicator.text = event.0.clone();
        indicator.timer = indicator.duration;
    }

    if indicator.timer > 0.0 {
        indicator.timer -= time.delta_secs();
        if indicator.timer < 0.0 {
            indicator.timer = 0.0;
        }
    }
}

pub fn render_status_indicator(indicator: Res<StatusIndicator>, mut contexts: EguiContexts) {
    if indicator.timer <= 0.0 {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        let alpha = (indicator.timer / indicator.duration).clamp(0.0, 1.0);
        let bg_color = egui::Color32::from_rgb(45, 72, 116);

        egui::Area::new(egui::Id::new("status_indicator"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
            .show(ctx, |ui| {
                let frame = egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        bg_color.r(),
                        bg_color.g(),
                        bg_color.b(),
                        (200.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.5,
                        egui::Color32::from_rgba_unmultiplied(
                            255,
                            255,
                            255,
                            (180.0 * alpha) as u8,
                        ),
                    ))
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .corner_radius(egui::CornerRadius::same(6));

                frame.show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&indicator.text)
                            .size(14.0)
                            .color(egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ))
                            .strong(),
                    );
                });
            });
    }
}
