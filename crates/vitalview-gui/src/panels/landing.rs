use crate::app::VitalViewApp;
use crate::panels::helpers::accent_button;
use crate::states::Page;

const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
const HEADING: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
const BODY: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);

const FEATURES: [(&str, &str); 3] = [
    (
        "Upload Scans Easily",
        "Upload your CT or MRI scans in DICOM, NIfTI, or common image formats \
         with a simple drag and drop interface.",
    ),
    (
        "3D Visualization",
        "View your lungs in an interactive 3D model to better understand your \
         scans and results. Rotate, zoom, and explore from any angle.",
    ),
    (
        "In depth Analysis",
        "Get detailed insights about your scan with our AI analysis that \
         identifies areas of concern and provides explanations.",
    ),
];

pub fn show(ctx: &egui::Context, app: &mut VitalViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(PAGE_BACKGROUND).inner_margin(32.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(720.0);
                    ui.add_space(24.0);
                    ui.label(
                        egui::RichText::new("Visualize Your Health")
                            .size(36.0)
                            .strong()
                            .color(egui::Color32::BLACK),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "VitalView helps you visualize and understand your lung scans \
                             with 3D models and analysis",
                        )
                        .size(18.0)
                        .color(BODY),
                    );
                    ui.add_space(16.0);

                    if accent_button(ui, "Start Visualizing Your Scans  \u{2192}").clicked() {
                        app.navigate(Page::Report);
                    }
                    ui.add_space(32.0);
                    ui.separator();
                    ui.add_space(16.0);

                    for (title, body) in FEATURES {
                        feature(ui, title, body);
                        ui.add_space(28.0);
                    }
                });
            });
        });
}

fn feature(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).size(20.0).strong().color(HEADING));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(body).color(BODY));
    });
}
