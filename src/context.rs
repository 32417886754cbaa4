// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "com";
pub const APP_ORG: &str = "proposal-writer";
pub const APP_ID: &str = "proposal-writer";

pub const CLIENTS_FILE_NAME: &str = "clients.json";
pub const TEMPLATE_FILE_NAME: &str = "Proposal Template.docx";
pub const OUTPUT_DIR: &str = "output";

const DEFAULT_USERS: [&str; 3] = ["Alex Morgan", "Jordan Reyes", "Sam Patel"];

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub debug_ui: bool,
    users: Vec<String>,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var("PROPOSAL_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let users = std::env::var("PROPOSAL_USERS")
            .ok()
            .map(|v| parse_user_list(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_USERS.iter().map(|s| s.to_string()).collect());

        Self {
            app_data_dir,
            debug_ui,
            users,
        }
    }

    /// <app_data>/clients.json
    pub fn clients_path(&self) -> PathBuf {
        self.app_data_dir.join(CLIENTS_FILE_NAME)
    }

    /// <app_data>/Proposal Template.docx
    pub fn template_path(&self) -> PathBuf {
        self.app_data_dir.join(TEMPLATE_FILE_NAME)
    }

    /// <app_data>/output
    pub fn output_dir(&self) -> PathBuf {
        self.app_data_dir.join(OUTPUT_DIR)
    }

    /// Names offered on the login screen.
    pub fn users(&self) -> &[String] {
        &self.users
    }
}

fn parse_user_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
