use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use vitalview_core::report::{AnalysisTimer, ReportPhase};
use vitalview_core::upload::{UploadState, UploadedFile};

use super::load_config;

#[derive(Args)]
pub struct ReportArgs {
    /// Scan file the report is for
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the analysis delay
    #[arg(long)]
    pub no_delay: bool,
}

pub fn run(args: &ReportArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut upload = UploadState::new(config.upload.filter());
    if let Some(ref path) = args.file {
        upload.select(UploadedFile::from_path(path));
    }

    if !args.no_delay {
        wait_for_analysis(config.report.delay())?;
    }

    let text = config.report.mock.render_text(upload.file());
    if let Some(ref path) = args.output {
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn wait_for_analysis(delay: Duration) -> Result<()> {
    let timer = AnalysisTimer::start(Instant::now(), delay);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));

    while let ReportPhase::Loading { remaining } = timer.phase(Instant::now()) {
        pb.set_message(format!("Analyzing scan... {:.1}s", remaining.as_secs_f32()));
        std::thread::sleep(remaining.min(Duration::from_millis(50)));
    }

    pb.finish_and_clear();
    Ok(())
}
