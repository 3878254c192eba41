use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=data/");

    let source = Path::new("data");
    if !source.exists() {
        return;
    }

    if let Err(e) = copy_data(source) {
        println!("cargo:warning=failed to copy data/: {e}");
    }
}

/// Mirror `data/` next to the built binaries (target/<profile>/data).
fn copy_data(source: &Path) -> io::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(io::Error::other)?);
    let Some(target_dir) = out_dir.ancestors().nth(3) else {
        return Ok(());
    };

    let destination = target_dir.join("data");
    if destination.exists() {
        fs::remove_dir_all(&destination)?;
    }
    fs::create_dir_all(&destination)?;

    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if let (true, Some(name)) = (path.is_file(), path.file_name()) {
            fs::copy(&path, destination.join(name))?;
        }
    }
    Ok(())
}
