// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use proposal_writer_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn resolve_data_dir() -> PathBuf {
    if let Ok(p) = env::var("PROPOSAL_DATA_DIR") {
        return PathBuf::from(p);
    }

    if cfg!(debug_assertions) {
        // dev-only sandbox
        if let Ok(home) = env::var("HOME") {
            return PathBuf::from(home).join(".local/share/proposal-writer-dev");
        }
    }

    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
        .map(|proj| proj.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("proposal-writer-data"))
}

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proposal_writer=info,proposal_writer_lib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_data_dir = resolve_data_dir();
    tracing::info!(data_dir = %app_data_dir.display(), "starting proposal writer");

    let ctx = Arc::new(AppCtx::new(app_data_dir));

    let state = proposal_writer_lib::init_state(&ctx).expect("failed to init app state");
    let state = Arc::new(state);

    eframe::run_native(
        "Proposal Writer",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
