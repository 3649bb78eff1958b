//! Clean command implementation
//!
//! Removes the download directory, including a cached remote registry.

use log::info;

use crate::config::Settings;
use crate::error::Result;

pub fn run(settings: &Settings) -> Result<()> {
    let dir = &settings.download_dir;

    if !dir.exists() {
        println!("Nothing to clean.");
        return Ok(());
    }

    info!("removing {}", dir.display());
    std::fs::remove_dir_all(dir)?;
    println!("Removed {}", dir.display());

    Ok(())
}
