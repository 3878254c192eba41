use egui_plot::{Bar, BarChart, Plot};
use glam::Vec2;
use vitalview_core::consts::TUMOR_STAGE_COUNT;
use vitalview_core::lighting::EnvironmentPreset;
use vitalview_core::render::{project_point, project_scene, Viewport};
use vitalview_core::tumor::TumorStage;

use crate::app::VitalViewApp;
use crate::convert::triangles_to_mesh;
use crate::panels::helpers::{enum_combo, section_header};
use crate::states::{LoadStatus, ViewerState};

/// Radians of orbit per dragged pixel.
const ORBIT_SPEED: f32 = 0.01;
const CHART_HEIGHT: f32 = 110.0;

pub fn show(ui: &mut egui::Ui, app: &mut VitalViewApp) {
    let viewer = &mut app.viewer;
    let size = egui::vec2(ui.available_width(), viewer.height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;
    painter.rect_filled(rect, 8.0, viewer.background);

    match viewer.status {
        LoadStatus::Idle | LoadStatus::Loading { .. } => {
            show_loading(ui, &painter, rect, viewer.percent_loaded());
        }
        LoadStatus::Failed(ref message) => {
            show_error(&painter, rect, message);
        }
        LoadStatus::Ready => {
            handle_input(ui, &response, viewer);
            let dt = ui.input(|i| i.stable_dt);
            if viewer.camera.tick(dt) {
                ui.ctx().request_repaint();
            }
            draw_scene(&painter, rect, viewer);
        }
    }

    ui.add_space(8.0);
    show_controls(ui, viewer);
    ui.add_space(8.0);
    show_stage_slider(ui, viewer);
    show_stage_chart(ui, viewer);
}

fn show_loading(ui: &mut egui::Ui, painter: &egui::Painter, rect: egui::Rect, percent: f32) {
    let spinner_rect = egui::Rect::from_center_size(
        rect.center() - egui::vec2(0.0, 14.0),
        egui::vec2(32.0, 32.0),
    );
    ui.put(spinner_rect, egui::Spinner::new().size(32.0));
    painter.text(
        rect.center() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        format!("{percent:.0}% loaded"),
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(110),
    );
}

fn show_error(painter: &egui::Painter, rect: egui::Rect, message: &str) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("Failed to load model: {message}"),
        egui::FontId::proportional(14.0),
        egui::Color32::from_rgb(200, 40, 40),
    );
}

/// Drag orbits, secondary drag pans, scroll zooms, double-click resets.
fn handle_input(ui: &mut egui::Ui, response: &egui::Response, viewer: &mut ViewerState) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        viewer
            .camera
            .orbit(-delta.x * ORBIT_SPEED, -delta.y * ORBIT_SPEED);
    }
    if response.dragged_by(egui::PointerButton::Secondary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        let delta = response.drag_delta();
        viewer.camera.pan(Vec2::new(delta.x, delta.y));
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            viewer.camera.zoom_by(scroll);
            // Keep the page from scrolling underneath the viewer.
            ui.input_mut(|i| i.smooth_scroll_delta = egui::Vec2::ZERO);
        }
    }

    if response.double_clicked() {
        viewer.camera.reset();
    }
}

fn draw_scene(painter: &egui::Painter, rect: egui::Rect, viewer: &ViewerState) {
    let viewport = Viewport::new(rect.width(), rect.height());
    let triangles = project_scene(&viewer.scene, &viewer.camera, &viewer.lighting, viewport);
    painter.add(egui::Shape::mesh(triangles_to_mesh(&triangles, rect.min)));

    let tumor_center = viewer.scene.tumor().and_then(|t| t.bounds()).map(|b| b.center());
    if let Some(anchor) = tumor_center.and_then(|c| project_point(&viewer.camera, viewport, c)) {
        painter.text(
            rect.min + egui::vec2(anchor.x, anchor.y) + egui::vec2(12.0, -12.0),
            egui::Align2::LEFT_BOTTOM,
            viewer.stage.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::from_rgb(200, 40, 40),
        );
    }
}

fn show_controls(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(viewer.camera.auto_rotate, "\u{27f3} Auto-rotate")
            .on_hover_text("Toggle auto-rotate")
            .clicked()
        {
            viewer.camera.toggle_auto_rotate();
        }
        if ui.button("Reset").on_hover_text("Reset view").clicked() {
            viewer.camera.reset();
        }
        if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
            viewer.camera.zoom_out();
        }
        if ui.button("+").on_hover_text("Zoom in").clicked() {
            viewer.camera.zoom_in();
        }

        let mut show_tumor = viewer.show_tumor;
        if ui.checkbox(&mut show_tumor, "Tumor").changed() {
            viewer.set_tumor_visible(show_tumor);
        }

        ui.separator();
        let mut environment = viewer.environment;
        if enum_combo(ui, "Lighting", &mut environment, EnvironmentPreset::ALL) {
            viewer.set_environment(environment);
        }
    });
}

fn show_stage_slider(ui: &mut egui::Ui, viewer: &mut ViewerState) {
    let mut index = viewer.stage.index();
    let enabled = viewer.stages.is_some();
    let slider = egui::Slider::new(&mut index, 0..=TUMOR_STAGE_COUNT - 1).text("Tumor stage");
    if ui.add_enabled(enabled, slider).changed() {
        if let Ok(stage) = TumorStage::new(index) {
            viewer.set_stage(stage);
        }
    }
}

/// Bounding size of each tumor stage; the shown stage is highlighted.
fn show_stage_chart(ui: &mut egui::Ui, viewer: &ViewerState) {
    let Some(ref stages) = viewer.stages else {
        return;
    };
    ui.add_space(6.0);
    section_header(ui, "Tumor size by stage", Some(&viewer.stage.to_string()));

    let current = viewer.stage.index();
    let bars: Vec<Bar> = stages
        .sizes()
        .into_iter()
        .enumerate()
        .map(|(i, size)| {
            let color = if i == current {
                egui::Color32::from_rgb(255, 68, 68)
            } else {
                egui::Color32::from_gray(180)
            };
            Bar::new(i as f64, size as f64).fill(color).width(0.7)
        })
        .collect();

    Plot::new("tumor_stage_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .include_y(0.0)
        .x_axis_label("stage")
        .y_axis_label("size")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("size", bars));
        });
}
