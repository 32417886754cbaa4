// src/command/session.rs

use crate::command_state::lock_session;
use crate::error::{AppError, AppResult};
use crate::types::{AppState, UNKNOWN_USER};

pub fn get_status(state: &AppState) -> AppResult<bool> {
    let session = lock_session(state)?;
    Ok(session.current_user.is_some())
}

pub fn login(state: &AppState, user: &str) -> AppResult<()> {
    let user = user.trim();
    if user.is_empty() {
        return Err(AppError::EmptyUserName);
    }

    let mut session = lock_session(state)?;
    session.current_user = Some(user.to_string());
    tracing::info!(user, "logged in");
    Ok(())
}

pub fn logout(state: &AppState) -> AppResult<()> {
    let mut session = lock_session(state)?;
    if let Some(user) = session.current_user.take() {
        tracing::info!(user = %user, "logged out");
    }
    Ok(())
}

/// Name for the header bar; never fails.
pub fn current_user_or_placeholder(state: &AppState) -> String {
    lock_session(state)
        .ok()
        .and_then(|s| s.current_user.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

// ======================================================
// Unit Tests
// ======================================================
