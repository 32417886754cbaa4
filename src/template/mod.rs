// src/template/mod.rs

mod docx;
mod render;
mod tags;
mod xml;

pub use docx::{render_docx, render_docx_value, template_names, unmatched_names};
pub use render::{part_names, render_part};
