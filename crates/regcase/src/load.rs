//! Loading register databases from disk.

use std::path::Path;

use regcase_db::RegisterDatabase;
use tracing::{debug, info};

use crate::error::{GenError, Result};

/// Read and decode a register database file.
///
/// The whole file is read before decoding starts, so the handle is closed
/// by the time any code is emitted.
pub fn load_database(path: &Path) -> Result<RegisterDatabase> {
    info!("Loading register database: {:?}", path);

    let text = std::fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes", text.len());

    let db = parse_database(&text)?;
    info!("Loaded {} register mappings", db.len());
    Ok(db)
}

/// Decode a register database from JSON text
pub fn parse_database(text: &str) -> Result<RegisterDatabase> {
    Ok(serde_json::from_str(text)?)
}
