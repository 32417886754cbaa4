// src/types.rs

use std::sync::atomic::AtomicBool;
use std::sync::Mutex;

use crate::directory::ClientDirectory;

/// Fallback identity stamped into proposals when nobody is logged in.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Title printed under the signer's name.
pub const DEFAULT_USER_TITLE: &str = "Principal";

/// Jurisdiction used when the field is left blank.
pub const DEFAULT_JURISDICTION: &str = "local";

pub const FEE_HOURLY_NTE: &str = "Hourly - NTE";
pub const FEE_PERCENT_COMPLETE: &str = "Percent Complete";

pub const FEE_TYPES: [&str; 4] = ["Lump Sum", FEE_HOURLY_NTE, FEE_PERCENT_COMPLETE, "Hourly"];

/// Phase value and the label shown in the dropdown.
pub const PHASE_NAMES: [(&str, &str); 15] = [
    ("Scoping", "01 Scoping"),
    ("Pre-design", "02 Pre-design"),
    ("Schematic Design", "03 Schematic Design"),
    ("Project Planning", "03.5 Project Planning"),
    ("Design Development", "04 Design Development"),
    ("Bridging Documents", "04.5 Bridging Documents"),
    ("Construction Documents", "05 Construction Documents"),
    ("Agency Approval", "05.5 Agency Approval"),
    ("Bidding", "06 Bidding"),
    ("Construction Support", "07 Construction Support"),
    ("Project Completion", "08 Project Completion"),
    ("Repair Period", "08.5 Repair Period"),
    ("Commissioning", "09 Commissioning"),
    ("Study", "10 Study"),
    ("Consulting", "11 Consulting"),
];

pub fn phase_label(value: &str) -> &str {
    PHASE_NAMES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

pub struct SessionState {
    pub current_user: Option<String>,
}

pub struct AppState {
    pub session: Mutex<SessionState>,

    // loaded once at startup, read-only afterwards
    pub directory: Mutex<ClientDirectory>,

    // set while a proposal is being generated
    pub generating: AtomicBool,
}

impl AppState {
    pub fn new(directory: ClientDirectory) -> Self {
        Self {
            session: Mutex::new(SessionState { current_user: None }),
            directory: Mutex::new(directory),
            generating: AtomicBool::new(false),
        }
    }
}
