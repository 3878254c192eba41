use crate::app::VitalViewApp;
use crate::states::LoadStatus;

pub fn show(ctx: &egui::Context, app: &mut VitalViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Model loading progress
        if let LoadStatus::Loading {
            items_done,
            items_total,
        } = app.viewer.status
        {
            let fraction = app.viewer.percent_loaded() / 100.0;
            let detail = if items_total > 0 {
                format!("Loading model ({items_done}/{items_total})")
            } else {
                "Loading model...".to_string()
            };
            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            // Invisible placeholder, same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            match app.ui_state.upload.file() {
                Some(file) => ui.label(format!("Scan: {}", file.name)),
                None => ui.label("No scan"),
            };
            ui.separator();
            ui.label(app.viewer.stage.to_string());
            ui.separator();
            let camera = &app.viewer.camera;
            ui.label(format!(
                "Distance: {:.2} ({:.2}..{:.2})",
                camera.radius(),
                camera.limits().min,
                camera.limits().max
            ));
            ui.separator();
            ui.label(format!("Lighting: {}", app.viewer.environment));
            if camera.auto_rotate {
                ui.separator();
                ui.label("Auto-rotate");
            }
        });

        ui.add_space(2.0);
    });
}
