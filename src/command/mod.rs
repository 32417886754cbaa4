// src/command/mod.rs

pub mod form_commands;
pub mod generate;
pub mod session;

// --- Public façade ---

pub use form_commands::{apply, apply_all, FormCommand};
pub use generate::{
    generate_proposal, generate_proposal_at, proposal_file_name, sanitize_file_stem,
    write_proposal, write_proposal_to, GeneratedProposal,
};
pub use session::{current_user_or_placeholder, get_status, login, logout};
