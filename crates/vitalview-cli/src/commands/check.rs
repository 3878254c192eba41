use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use vitalview_core::upload::UploadedFile;

use super::load_config;

#[derive(Args)]
pub struct CheckArgs {
    /// Scan files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML) with a custom accepted-type list
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Types are advisory: a mismatch is reported, never rejected.
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let filter = config.upload.filter();
    let ok = Style::new().green();
    let warn = Style::new().yellow();

    println!("Accepted: {}", filter.hint());
    println!();
    for path in &args.files {
        let file = UploadedFile::from_path(path);
        let status = if filter.matches(path) {
            ok.apply_to("accepted")
        } else {
            warn.apply_to("unlisted type")
        };
        println!("{:<32}  {:<14}  {}", file.name, file.kind.to_string(), status);
    }

    Ok(())
}
