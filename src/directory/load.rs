// src/directory/load.rs

use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

use super::model::{ClientDirectory, ClientEntry};

/// Parse the client list. Plain JSON is accepted; JSON5 extras (comments,
/// trailing commas) are tolerated for hand-edited files.
pub fn parse_directory(s: &str) -> AppResult<ClientDirectory> {
    let clients: Vec<ClientEntry> =
        json5::from_str(s).map_err(|e| AppError::DirectoryLoad(e.to_string()))?;
    Ok(ClientDirectory::new(clients))
}

pub fn load_directory(path: impl AsRef<Path>) -> AppResult<ClientDirectory> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| AppError::DirectoryLoad(format!("{}: {e}", path.display())))?;
    parse_directory(&s)
}

/// Startup loader: a missing or malformed file leaves the directory empty.
pub fn load_directory_or_empty(path: impl AsRef<Path>) -> ClientDirectory {
    let path = path.as_ref();
    match load_directory(path) {
        Ok(dir) => {
            tracing::info!(clients = dir.len(), path = %path.display(), "client directory loaded");
            dir
        }
        Err(e) => {
            tracing::error!(error = %e, "error loading clients");
            ClientDirectory::default()
        }
    }
}
