use std::sync::mpsc;

use tracing::warn;
use vitalview_core::lighting::EnvironmentPreset;

use crate::app::VitalViewApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::Page;

pub fn show(ctx: &egui::Context, app: &mut VitalViewApp) {
    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        egui::MenuBar::new().ui(ui, |ui| {
            if ui
                .add(egui::Button::new(
                    egui::RichText::new("VitalView").strong().monospace().size(18.0),
                ).frame(false))
                .clicked()
            {
                app.navigate(Page::Landing);
            }
            ui.separator();

            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Scan...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_scan(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Download Report...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    download_report(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Home").clicked() {
                    ui.close();
                    app.navigate(Page::Landing);
                }
                if ui.button("Report").clicked() {
                    ui.close();
                    app.navigate(Page::Report);
                }
                ui.separator();
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.viewer.camera.reset();
                }
                if ui.checkbox(&mut app.viewer.camera.auto_rotate, "Auto-Rotate").clicked() {
                    ui.close();
                }
                ui.menu_button("Lighting", |ui| {
                    for &preset in EnvironmentPreset::ALL {
                        if ui
                            .radio(app.viewer.environment == preset, preset.to_string())
                            .clicked()
                        {
                            ui.close();
                            app.viewer.set_environment(preset);
                        }
                    }
                });
                ui.separator();
                if ui.button("Reload Model").clicked() {
                    ui.close();
                    app.load_scene();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.config.path = None;
                    app.apply_config(Default::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });
        ui.add_space(4.0);

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_scan(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            download_report(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Channels a native dialog thread uses once the user has picked a path.
struct DialogLink {
    cmd_tx: mpsc::Sender<WorkerCommand>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
}

impl DialogLink {
    fn new(app: &VitalViewApp) -> Self {
        Self {
            cmd_tx: app.cmd_tx.clone(),
            result_tx: app.result_tx.clone(),
            ctx: app.ctx.clone(),
        }
    }

    /// Hand work to the worker, or tell the UI it was dropped.
    fn command(&self, cmd: WorkerCommand) {
        if let Err(mpsc::SendError(cmd)) = self.cmd_tx.send(cmd) {
            warn!(action = cmd.label(), "Worker unavailable, command dropped");
            self.result(WorkerResult::Error {
                message: format!("{} not run: background worker stopped", cmd.label()),
            });
        }
    }

    fn result(&self, result: WorkerResult) {
        if self.result_tx.send(result).is_err() {
            warn!("Window closed before the dialog result arrived");
        }
        self.ctx.request_repaint();
    }
}

/// Native file picker, filtered to the accepted scan types. The pick goes
/// straight to the UI; scans are never opened.
pub(crate) fn open_scan(app: &mut VitalViewApp) {
    let link = DialogLink::new(app);
    let extensions = app.ui_state.upload.filter().dialog_extensions();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Scans", extensions.as_slice())
            .add_filter("All files", &["*"])
            .pick_file()
        {
            link.result(WorkerResult::ScanSelected { path });
        }
    });
}

/// Save the rendered report text through the native save dialog.
pub(crate) fn download_report(app: &mut VitalViewApp) {
    if !app.ui_state.report_ready(std::time::Instant::now()) {
        app.ui_state
            .add_log("No report yet: upload a scan and wait for the analysis".into());
        return;
    }
    let text = app
        .config
        .app
        .report
        .mock
        .render_text(app.ui_state.upload.file());

    let link = DialogLink::new(app);
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("vitalview_report.txt")
            .save_file()
        {
            link.command(WorkerCommand::SaveReport { path, text });
        }
    });
}

fn import_config(app: &mut VitalViewApp) {
    let link = DialogLink::new(app);
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            link.command(WorkerCommand::ImportConfig { path });
        }
    });
}

fn export_config(app: &mut VitalViewApp) {
    let config = Box::new(app.config.app.clone());
    let link = DialogLink::new(app);
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("vitalview.toml")
            .save_file()
        {
            link.command(WorkerCommand::ExportConfig { path, config });
        }
    });
}
