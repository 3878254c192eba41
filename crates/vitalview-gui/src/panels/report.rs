use std::time::Instant;

use vitalview_core::report::{MockReport, ReportPhase};

use crate::app::VitalViewApp;
use crate::panels::helpers::{accent_button, card};
use crate::panels::nav_bar::download_report;
use crate::panels::{upload, viewer};

const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
const BODY: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);

pub fn show(ctx: &egui::Context, app: &mut VitalViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(PAGE_BACKGROUND).inner_margin(24.0))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if !app.ui_state.upload.is_complete() {
                    ui.add_space(40.0);
                    upload::show(ui, app);
                    return;
                }

                show_header(ui, app);
                ui.add_space(16.0);

                ui.columns(2, |columns| {
                    card(&mut columns[0], |ui| show_analysis(ui, app));
                    card(&mut columns[1], |ui| viewer::show(ui, app));
                });
            });
        });
}

fn show_header(ui: &mut egui::Ui, app: &mut VitalViewApp) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("View Your Vitals").size(28.0).strong());
        if let Some(file) = app.ui_state.upload.file() {
            ui.label(
                egui::RichText::new(format!("{} \u{2022} {}", file.name, file.kind))
                    .size(16.0)
                    .color(BODY),
            );
        }
        ui.add_space(4.0);
        if ui.small_button("Change Scan").clicked() {
            app.ui_state.clear_scan();
        }
    });
}

/// Spinner for the analysis delay, then the static report.
fn show_analysis(ui: &mut egui::Ui, app: &mut VitalViewApp) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Analysis Report").size(20.0).strong());
    });
    ui.add_space(12.0);

    let Some(timer) = app.ui_state.report_timer else {
        return;
    };
    let now = Instant::now();
    match timer.phase(now) {
        ReportPhase::Loading { remaining } => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Analyzing scan...").color(BODY));
                ui.add(
                    egui::ProgressBar::new(timer.progress(now))
                        .desired_width(200.0)
                        .show_percentage(),
                );
                ui.add_space(24.0);
            });
            ui.ctx().request_repaint_after(remaining);
        }
        ReportPhase::Ready => {
            show_report(ui, &app.config.app.report.mock);
            ui.add_space(16.0);
            if accent_button(ui, "Download Report").clicked() {
                download_report(app);
            }
        }
    }
}

fn show_report(ui: &mut egui::Ui, report: &MockReport) {
    ui.label(egui::RichText::new(&report.general_description).color(BODY));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label("\u{2022}");
        ui.label(&report.detailed_analysis);
    });
    ui.add_space(12.0);

    egui::Grid::new("report_metrics")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Nodule size").color(BODY));
            ui.strong(format!("{:.1} mm", report.nodule_size_mm));
            ui.end_row();

            ui.label(egui::RichText::new("Density").color(BODY));
            ui.strong(&report.density);
            ui.end_row();

            ui.label(egui::RichText::new("Risk").color(BODY));
            ui.strong(format!("{:.0}%", report.risk_percent));
            ui.end_row();
        });
}
