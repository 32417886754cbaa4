// src/directory/mod.rs

mod load;
mod model;

pub use load::{load_directory, load_directory_or_empty, parse_directory};
pub use model::{ClientDirectory, ClientEntry, ContactEntry, ContactOption};
