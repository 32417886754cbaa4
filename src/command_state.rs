// src/command_state.rs

use crate::{
    directory::ClientDirectory,
    error::{AppError, AppResult},
    types::{AppState, SessionState},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_session<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, SessionState>> {
    state
        .session
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_directory<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, ClientDirectory>> {
    state
        .directory
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn with_directory<T>(state: &AppState, f: impl FnOnce(&ClientDirectory) -> T) -> AppResult<T> {
    let guard = lock_directory(state)?;
    Ok(f(&guard))
}

pub fn current_user(state: &AppState) -> AppResult<Option<String>> {
    Ok(lock_session(state)?.current_user.clone())
}

// ======================================================
// generation lock
// ======================================================

/// Held for the duration of one generation. A second `acquire` while a
/// guard is alive fails with `GenerationInProgress`; dropping releases.
#[derive(Debug)]
pub struct GenerationGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> GenerationGuard<'a> {
    pub fn acquire(state: &'a AppState) -> AppResult<Self> {
        state
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::GenerationInProgress)?;

        Ok(Self {
            flag: &state.generating,
        })
    }
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub fn generation_running(state: &AppState) -> bool {
    state.generating.load(Ordering::Acquire)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn mk_state() -> AppState {
        AppState::new(ClientDirectory::default())
    }

    #[test]
    fn generation_guard_is_exclusive_until_dropped() {
        let state = mk_state();

        let first = GenerationGuard::acquire(&state).unwrap();
        assert!(generation_running(&state));
        assert_matches!(
            GenerationGuard::acquire(&state),
            Err(AppError::GenerationInProgress)
        );

        drop(first);
        assert!(!generation_running(&state));
        assert!(GenerationGuard::acquire(&state).is_ok());
    }

    #[test]
    fn current_user_reads_session() {
        let state = mk_state();
        assert_eq!(current_user(&state).unwrap(), None);

        lock_session(&state).unwrap().current_user = Some("Sam Patel".into());
        assert_eq!(current_user(&state).unwrap().as_deref(), Some("Sam Patel"));
    }

    #[test]
    fn with_directory_exposes_loaded_clients() {
        let state = mk_state();
        let n = with_directory(&state, |d| d.len()).unwrap();
        assert_eq!(n, 0);
    }
}
