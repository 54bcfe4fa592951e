use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{
    AZIMUTH_RANGE, DISTANCE_RANGE, ELEVATION_RANGE, HEIGHT_RANGE, LATITUDE_RANGE, LayoutConfig,
    LONGITUDE_RANGE, PANEL_HEIGHT_RANGE, PANEL_WIDTH_RANGE, PANELS_IN_ROW_RANGE, ROWS_RANGE,
    SLOPE_RANGE, SunConfig,
};
use crate::simulation::DaySimulation;

/// Side panel with the layout sliders, sun parameters, and the simulation
/// action buttons. Any layout edit marks the scene dirty.
pub fn parameter_panel_system(
    mut contexts: EguiContexts,
    mut layout: ResMut<LayoutConfig>,
    mut sun: ResMut<SunConfig>,
    mut simulation: ResMut<DaySimulation>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::SidePanel::left("parameters")
        .min_width(280.0)
        .show(ctx, |ui| {
            layout_section(ui, layout.as_mut());
            ui.separator();
            sun_section(ui, sun.as_mut());
            ui.separator();
            action_section(ui, &sun, &mut simulation);
        });

    Ok(())
}

fn layout_section(ui: &mut egui::Ui, layout: &mut LayoutConfig) {
    ui.heading("Array layout");
    ui.separator();

    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Panel width (m):");
        changed |= ui
            .add(egui::Slider::new(&mut layout.panel_width, PANEL_WIDTH_RANGE).step_by(0.1))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Panel height (m):");
        changed |= ui
            .add(egui::Slider::new(&mut layout.panel_height, PANEL_HEIGHT_RANGE).step_by(0.1))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Rows:");
        changed |= ui
            .add(egui::Slider::new(&mut layout.rows, ROWS_RANGE))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Panels in row:");
        changed |= ui
            .add(egui::Slider::new(&mut layout.panels_in_row, PANELS_IN_ROW_RANGE))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Height above ground (m):");
        changed |= ui
            .add(egui::Slider::new(&mut layout.height, HEIGHT_RANGE).step_by(0.1))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Slope (deg):");
        changed |= ui
            .add(egui::Slider::new(&mut layout.slope, SLOPE_RANGE).step_by(1.0))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("Row distance (m):");
        changed |= ui
            .add(egui::Slider::new(&mut layout.distance, DISTANCE_RANGE).step_by(0.1))
            .changed();
    });

    if changed {
        layout.needs_rebuild = true;
    }
}

fn sun_section(ui: &mut egui::Ui, sun: &mut SunConfig) {
    ui.heading("Sun");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Azimuth (deg):");
        ui.add(egui::Slider::new(&mut sun.azimuth, AZIMUTH_RANGE).step_by(1.0));
    });
    ui.horizontal(|ui| {
        ui.label("Elevation (deg):");
        ui.add(egui::Slider::new(&mut sun.elevation, ELEVATION_RANGE).step_by(1.0));
    });
    ui.horizontal(|ui| {
        ui.label("Latitude:");
        ui.add(egui::DragValue::new(&mut sun.latitude).speed(0.1).range(LATITUDE_RANGE));
        ui.label("Longitude:");
        ui.add(egui::DragValue::new(&mut sun.longitude).speed(0.1).range(LONGITUDE_RANGE));
    });
    ui.horizontal(|ui| {
        ui.label("Date (Y/M/D):");
        ui.add(egui::DragValue::new(&mut sun.year).range(1900..=2100));
        ui.add(egui::DragValue::new(&mut sun.month).range(1..=12));
        ui.add(egui::DragValue::new(&mut sun.day).range(1..=31));
    });
}

fn action_section(ui: &mut egui::Ui, sun: &SunConfig, simulation: &mut DaySimulation) {
    ui.horizontal(|ui| {
        if ui.button("Render sun position").clicked() {
            // Direct azimuth/elevation takes over from any running simulation.
            simulation.stop();
        }
        if ui.button("Simulate day").clicked() {
            simulation.start();
        }
        if ui.button("Stop").clicked() {
            simulation.stop();
        }
    });

    if simulation.running() {
        let time_label = simulation
            .current_time()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "starting".to_string());
        ui.label(format!(
            "Simulating {:04}-{:02}-{:02} at {}",
            sun.year, sun.month, sun.day, time_label
        ));
    }
}
