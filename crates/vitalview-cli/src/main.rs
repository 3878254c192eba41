mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vitalview", about = "Medical scan report and 3D tumor viewer tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show mesh statistics for a glTF/GLB model or JSON geometry
    Info(commands::info::InfoArgs),
    /// Load the configured scene and print what the viewer would show
    Scene(commands::scene::SceneArgs),
    /// List the tumor shrinkage stages
    Stages(commands::stages::StagesArgs),
    /// Produce the mock analysis report
    Report(commands::report::ReportArgs),
    /// Check scan files against the accepted upload types
    Check(commands::check::CheckArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Scene(args) => commands::scene::run(args),
        Commands::Stages(args) => commands::stages::run(args),
        Commands::Report(args) => commands::report::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
