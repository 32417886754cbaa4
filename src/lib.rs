// src/lib.rs

pub mod command;
pub mod command_state;
pub mod context;
pub mod directory;
pub mod error;
pub mod form;
pub mod router;
pub mod template;
pub mod types;

use crate::context::AppCtx;
use crate::error::AppError;
use crate::types::AppState;

/// Create the data directory and load the client list. A missing or broken
/// client list is not fatal; the form then starts with an empty directory.
pub fn init_state(ctx: &AppCtx) -> Result<AppState, AppError> {
    std::fs::create_dir_all(&ctx.app_data_dir)?;

    let directory = directory::load_directory_or_empty(ctx.clients_path());
    Ok(AppState::new(directory))
}

impl AppState {
    pub fn new_for_tests(ctx: &AppCtx) -> Result<Self, AppError> {
        crate::init_state(ctx)
    }
}
