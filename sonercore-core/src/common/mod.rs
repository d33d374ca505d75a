pub mod handlebars;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

pub fn create_path_if_not_exists(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating path: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn write_string_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    create_path_if_not_exists(path)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
