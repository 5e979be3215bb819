use std::path::Path;

use crate::error::Result;
use crate::settings::{save_settings_to, Settings};

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Settings already exist at {}", path.display());
        return Ok(());
    }
    save_settings_to(path, &Settings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
