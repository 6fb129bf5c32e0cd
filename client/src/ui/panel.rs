//! Debug panel for the wave parameters.
//!
//! Writes straight into the [`WaveParameters`] resource; the uniform sync
//! system picks up whatever value is current at its next run. Slider
//! ranges are UI clamps only, nothing downstream validates them.

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiContexts;
use egui::Slider;

use sim::waves::WaveParameters;

pub fn wave_panel_ui(mut contexts: EguiContexts, mut params: ResMut<WaveParameters>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Window::new("Water").show(ctx, |ui| {
        ui.add(Slider::new(&mut params.big_elevation, 0.0..=1.0).text("big waves elevation"));
        ui.add(Slider::new(&mut params.big_frequency.x, 0.0..=10.0).text("big waves frequency x"));
        ui.add(Slider::new(&mut params.big_frequency.y, 0.0..=10.0).text("big waves frequency y"));
        ui.add(Slider::new(&mut params.big_speed, 0.0..=4.0).text("big waves speed"));

        ui.separator();
        ui.add(Slider::new(&mut params.small_elevation, 0.0..=1.0).text("small waves elevation"));
        ui.add(Slider::new(&mut params.small_frequency, 0.0..=30.0).text("small waves frequency"));
        ui.add(Slider::new(&mut params.small_speed, 0.0..=4.0).text("small waves speed"));
        ui.add(Slider::new(&mut params.small_iterations, 0..=5).text("small iterations"));

        ui.separator();
        ui.add(Slider::new(&mut params.color_offset, 0.0..=1.0).text("color offset"));
        ui.add(Slider::new(&mut params.color_multiplier, 0.0..=10.0).text("color multiplier"));

        ui.horizontal(|ui| {
            let mut depth = params.depth_color.to_array();
            if ui.color_edit_button_rgba_unmultiplied(&mut depth).changed() {
                params.depth_color = Vec4::from_array(depth);
            }
            ui.label("depth color");
        });
        ui.horizontal(|ui| {
            let mut surface = params.surface_color.to_array();
            if ui.color_edit_button_rgba_unmultiplied(&mut surface).changed() {
                params.surface_color = Vec4::from_array(surface);
            }
            ui.label("surface color");
        });

        ui.separator();
        ui.label(format!("simulation time: {:.1}s", params.time));
    });
}
