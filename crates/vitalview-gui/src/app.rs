use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{error, warn};
use vitalview_core::config::AppConfig;
use vitalview_core::report::AnalysisTimer;
use vitalview_core::upload::{UploadState, UploadedFile};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{ConfigState, Page, UIState, ViewerState};
use crate::worker;

pub struct VitalViewApp {
    pub ctx: egui::Context,
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Dialog threads report straight to the UI through this sender.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    worker: Option<JoinHandle<()>>,
    worker_down: bool,
    pub ui_state: UIState,
    pub viewer: ViewerState,
    pub config: ConfigState,
}

impl VitalViewApp {
    pub fn new(ctx: &egui::Context, config: ConfigState) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let (cmd_tx, worker) = worker::spawn_worker(result_tx.clone(), ctx.clone());
        Self::with_channels(ctx, cmd_tx, (result_tx, result_rx), Some(worker), config)
    }

    fn with_channels(
        ctx: &egui::Context,
        cmd_tx: mpsc::Sender<WorkerCommand>,
        (result_tx, result_rx): (mpsc::Sender<WorkerResult>, mpsc::Receiver<WorkerResult>),
        worker: Option<JoinHandle<()>>,
        config: ConfigState,
    ) -> Self {
        let mut app = Self {
            ctx: ctx.clone(),
            cmd_tx,
            result_tx,
            result_rx,
            worker,
            worker_down: false,
            ui_state: UIState::new(config.app.upload.filter()),
            viewer: ViewerState::new(&config.app.viewer),
            config,
        };
        app.ui_state
            .add_log(format!("Config: {}", app.config.source_label()));
        app.load_scene();
        app
    }

    /// Ask the worker to (re)load the configured model and tumor.
    pub fn load_scene(&mut self) {
        let viewer = &self.config.app.viewer;
        let cmd = WorkerCommand::LoadScene {
            model_paths: viewer.model_paths.clone(),
            tumor_geometry: viewer.tumor_geometry.clone(),
        };
        self.viewer.begin_loading();
        self.send_command(cmd);
    }

    /// Replace the active configuration and rebuild what depends on it.
    /// The selected scan survives; the report delay restarts.
    pub fn apply_config(&mut self, config: AppConfig) {
        let file = self.ui_state.upload.file().cloned();
        self.config.app = config;
        self.viewer = ViewerState::new(&self.config.app.viewer);
        self.ui_state.upload = UploadState::new(self.config.app.upload.filter());
        self.ui_state.report_timer = None;
        if let Some(file) = file {
            self.ui_state.upload.select(file);
            self.ui_state.report_timer = Some(AnalysisTimer::start(
                Instant::now(),
                self.config.app.report.delay(),
            ));
        }
        self.load_scene();
    }

    pub fn select_scan(&mut self, file: UploadedFile) {
        self.ui_state
            .select_scan(file, &self.config.app.report, Instant::now());
    }

    pub fn navigate(&mut self, page: Page) {
        self.ui_state
            .navigate(page, &self.config.app.report, Instant::now());
    }

    /// Drain all pending results, then check the worker is still running.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::TumorReady { stages } => {
                    self.ui_state
                        .add_log(format!("Tumor stages ready ({})", stages.len()));
                    self.viewer.set_stages(stages);
                }
                WorkerResult::ModelLoaded { meshes, elapsed } => {
                    self.viewer.set_model(meshes);
                    self.ui_state
                        .add_log(format!("Model ready in {}", format_duration(elapsed)));
                }
                WorkerResult::ModelFailed { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.viewer.fail(message);
                }
                WorkerResult::Progress {
                    items_done,
                    items_total,
                } => {
                    self.viewer.set_progress(items_done, items_total);
                }
                WorkerResult::ScanSelected { path } => {
                    self.select_scan(UploadedFile::from_path(&path));
                }
                WorkerResult::ReportSaved { path } => {
                    self.ui_state
                        .add_log(format!("Report saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { path, config } => {
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                    self.config.path = Some(path);
                    self.apply_config(*config);
                }
                WorkerResult::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config exported: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
        self.check_worker();
    }

    /// Queue a command for the worker. Returns false when the worker is gone.
    pub fn send_command(&mut self, cmd: WorkerCommand) -> bool {
        match self.cmd_tx.send(cmd) {
            Ok(()) => true,
            Err(mpsc::SendError(cmd)) => {
                warn!(action = cmd.label(), "Worker unavailable, command dropped");
                self.ui_state.add_log(format!(
                    "ERROR: {} not run: background worker stopped",
                    cmd.label()
                ));
                self.worker_stopped("command channel closed");
                false
            }
        }
    }

    fn check_worker(&mut self) {
        if !self.worker.as_ref().is_some_and(JoinHandle::is_finished) {
            return;
        }
        let Some(handle) = self.worker.take() else {
            return;
        };
        let reason = match handle.join() {
            Ok(()) => "worker exited".to_string(),
            Err(payload) => worker::panic_message(payload.as_ref()),
        };
        self.worker_stopped(&reason);
    }

    /// A pending model load can no longer finish. Logged once.
    fn worker_stopped(&mut self, reason: &str) {
        if !self.viewer.is_ready() {
            self.viewer
                .fail(format!("background worker stopped ({reason})"));
        }
        if self.worker_down {
            return;
        }
        self.worker_down = true;
        error!("Background worker stopped: {reason}");
        self.ui_state
            .add_log(format!("ERROR: background worker stopped: {reason}"));
    }
}

impl eframe::App for VitalViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::nav_bar::show(ctx, self);
        panels::status::show(ctx, self);
        match self.ui_state.page {
            Page::Landing => panels::landing::show(ctx, self),
            Page::Report => panels::report::show(ctx, self),
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About VitalView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("VitalView");
                        ui.label("Visualize and understand your lung scans");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::states::LoadStatus;

    fn app_with_worker(
        cmd_tx: mpsc::Sender<WorkerCommand>,
        worker: Option<JoinHandle<()>>,
    ) -> VitalViewApp {
        VitalViewApp::with_channels(
            &egui::Context::default(),
            cmd_tx,
            mpsc::channel(),
            worker,
            ConfigState::default(),
        )
    }

    fn stop_count(app: &VitalViewApp) -> usize {
        app.ui_state
            .log_messages
            .iter()
            .filter(|m| m.contains("background worker stopped:"))
            .count()
    }

    #[test]
    fn panicked_worker_fails_pending_load_once() {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let worker = std::thread::spawn(|| panic!("index 9 out of range"));
        while !worker.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
        }

        let mut app = app_with_worker(cmd_tx, Some(worker));
        assert!(matches!(app.viewer.status, LoadStatus::Loading { .. }));

        app.poll_results();
        match app.viewer.status {
            LoadStatus::Failed(ref message) => assert!(message.contains("index 9 out of range")),
            ref other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(stop_count(&app), 1);

        app.poll_results();
        assert_eq!(stop_count(&app), 1);
    }

    #[test]
    fn command_to_stopped_worker_is_reported() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);

        let mut app = app_with_worker(cmd_tx, None);
        assert!(matches!(app.viewer.status, LoadStatus::Failed(_)));
        assert!(app
            .ui_state
            .log_messages
            .iter()
            .any(|m| m.contains("Scene load not run")));

        assert!(!app.send_command(WorkerCommand::ImportConfig {
            path: PathBuf::from("vitalview.toml"),
        }));
        assert!(app
            .ui_state
            .log_messages
            .iter()
            .any(|m| m.contains("Config import not run")));
        assert_eq!(stop_count(&app), 1);
    }

    #[test]
    fn scan_selection_does_not_need_the_worker() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let mut app = app_with_worker(cmd_tx, None);

        app.result_tx
            .send(WorkerResult::ScanSelected {
                path: PathBuf::from("chest.dcm"),
            })
            .unwrap();
        app.poll_results();

        assert!(app.ui_state.upload.is_complete());
        assert_eq!(app.ui_state.page, Page::Report);
    }
}
