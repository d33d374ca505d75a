use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("resources")
        .join("test-fixtures")
}

pub fn load_fixture(relative_path: &str) -> io::Result<Vec<u8>> {
    let path = fixtures_root().join(relative_path);
    fs::read(path)
}

pub fn load_fixture_json(relative_path: &str) -> io::Result<Value> {
    let bytes = load_fixture(relative_path)?;
    serde_json::from_slice(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
