use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::error;
use vitalview_core::asset::{load_geometry, load_models};
use vitalview_core::config::AppConfig;
use vitalview_core::geometry::Mesh;
use vitalview_core::tumor::{default_geometry, TumorStages};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::progress::ChannelProgressReporter;

/// Spawn the worker thread. Returns the command sender and the thread handle,
/// which the UI polls to notice a worker that has died.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> (mpsc::Sender<WorkerCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    let handle = std::thread::Builder::new()
        .name("vitalview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    (cmd_tx, handle)
}

/// Text of a panic payload from a joined thread.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".into()
    }
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadScene {
                model_paths,
                tumor_geometry,
            } => {
                handle_load_tumor(tumor_geometry.as_deref(), &tx, &ctx);
                handle_load_models(&model_paths, &tx, &ctx);
            }
            WorkerCommand::SaveReport { path, text } => {
                match std::fs::write(&path, text) {
                    Ok(()) => send(&tx, &ctx, WorkerResult::ReportSaved { path }),
                    Err(e) => send_error(
                        &tx,
                        &ctx,
                        format!("Failed to save report to {}: {e}", path.display()),
                    ),
                }
            }
            WorkerCommand::ImportConfig { path } => {
                handle_import_config(path, &tx, &ctx);
            }
            WorkerCommand::ExportConfig { path, config } => {
                handle_export_config(path, &config, &tx, &ctx);
            }
        }
    }
}

/// Build the tumor stages. Failures are logged and the tumor stays absent.
fn handle_load_tumor(path: Option<&Path>, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let base = match path {
        Some(path) => load_geometry(path),
        None => default_geometry(),
    };
    match base {
        Ok(base) => {
            let stages = TumorStages::generate(&base);
            send(tx, ctx, WorkerResult::TumorReady { stages });
        }
        Err(e) => {
            error!("Tumor geometry unavailable: {e}");
            send_log(tx, ctx, format!("Tumor geometry unavailable: {e}"));
        }
    }
}

fn handle_load_models(paths: &[PathBuf], tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());

    match load_models(paths, &reporter) {
        Ok(meshes) => {
            send_log(tx, ctx, model_summary(paths, &meshes));
            send(
                tx,
                ctx,
                WorkerResult::ModelLoaded {
                    meshes,
                    elapsed: start.elapsed(),
                },
            );
        }
        Err(e) => {
            error!("Model load failed: {e}");
            send(
                tx,
                ctx,
                WorkerResult::ModelFailed {
                    message: e.to_string(),
                },
            );
        }
    }
}

fn model_summary(paths: &[PathBuf], meshes: &[Mesh]) -> String {
    let triangles: usize = meshes.iter().map(Mesh::triangle_count).sum();
    format!(
        "Loaded {} file(s): {} mesh(es), {} triangles",
        paths.len(),
        meshes.len(),
        triangles
    )
}

fn handle_import_config(path: PathBuf, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| toml::from_str::<AppConfig>(&content).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => send(
            tx,
            ctx,
            WorkerResult::ConfigImported {
                path,
                config: Box::new(config),
            },
        ),
        Err(e) => send_error(
            tx,
            ctx,
            format!("Failed to import config {}: {e}", path.display()),
        ),
    }
}

fn handle_export_config(
    path: PathBuf,
    config: &AppConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let written = toml::to_string_pretty(config)
        .map_err(|e| e.to_string())
        .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
    match written {
        Ok(()) => send(tx, ctx, WorkerResult::ConfigExported { path }),
        Err(e) => send_error(
            tx,
            ctx,
            format!("Failed to export config to {}: {e}", path.display()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let handle = std::thread::spawn(|| panic!("static message"));
        let payload = handle.join().unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let handle = std::thread::spawn(|| panic!("index {} out of range", 9));
        let payload = handle.join().unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "index 9 out of range");
    }
}
