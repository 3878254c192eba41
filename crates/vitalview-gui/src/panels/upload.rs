use vitalview_core::upload::UploadedFile;

use crate::app::VitalViewApp;
use crate::panels::nav_bar::open_scan;

const DROPZONE_HEIGHT: f32 = 180.0;

/// Dashed dropzone: click for the file dialog, or drop a file anywhere on
/// the window.
pub fn show(ui: &mut egui::Ui, app: &mut VitalViewApp) {
    let ctx = ui.ctx().clone();
    let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
    if let Some(file) = take_dropped_file(&ctx) {
        app.select_scan(file);
        return;
    }

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Upload Your CT Scans")
                .size(28.0)
                .strong(),
        );
    });
    ui.add_space(24.0);

    let width = ui.available_width().min(640.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), DROPZONE_HEIGHT),
        egui::Sense::click(),
    );
    let zone = egui::Rect::from_center_size(rect.center(), egui::vec2(width, DROPZONE_HEIGHT));

    let border = if hovering || response.hovered() {
        egui::Color32::from_rgb(139, 92, 246)
    } else {
        egui::Color32::from_rgb(203, 213, 225)
    };
    let painter = ui.painter();
    painter.rect_filled(zone, 12.0, egui::Color32::WHITE);
    let dashes = egui::Shape::dashed_line(
        &[
            zone.left_top(),
            zone.right_top(),
            zone.right_bottom(),
            zone.left_bottom(),
            zone.left_top(),
        ],
        egui::Stroke::new(3.0, border),
        10.0,
        6.0,
    );
    painter.extend(dashes);
    painter.text(
        zone.center() - egui::vec2(0.0, 10.0),
        egui::Align2::CENTER_CENTER,
        "Click or Drag and Drop to Upload CT Scan",
        egui::FontId::proportional(18.0),
        egui::Color32::from_rgb(51, 65, 85),
    );
    painter.text(
        zone.center() + egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        app.ui_state.upload.filter().hint(),
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(140),
    );

    if response.clicked() {
        open_scan(app);
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand);
}

/// First file dropped on the window this frame, if any.
fn take_dropped_file(ctx: &egui::Context) -> Option<UploadedFile> {
    ctx.input(|i| {
        i.raw.dropped_files.first().map(|f| match f.path {
            Some(ref path) => UploadedFile::from_path(path),
            None => UploadedFile::new(f.name.clone(), None),
        })
    })
}
