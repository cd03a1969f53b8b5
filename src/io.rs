use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{HuffmanError, Result};

pub fn read_all_text(path: &Path) -> Result<String> {
    info!("Reading input file: {}", path.display());
    let content = fs::read(path).map_err(|source| HuffmanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Total file size: {} bytes", content.len());

    String::from_utf8(content).map_err(|source| HuffmanError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_all_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    info!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes).map_err(|source| HuffmanError::Write {
        path: path.to_path_buf(),
        source,
    })
}
