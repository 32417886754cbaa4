// src/form/mod.rs

pub mod autofill;
pub mod phases;
pub mod record;
pub mod rich_text;
pub mod state;
pub mod subconsultants;

pub use phases::{format_grouped, parse_fee, sanitize_fee, PhaseFee, PhaseRow, PhaseRowId, PhaseTable};
pub use record::{build_record, first_name, format_letter_date, ProposalRecord};
pub use rich_text::{PlainTextEditor, RichTextEditor};
pub use state::{ClientPicker, EditorSlot, ProposalForm, ScopeItem, ScopeSet, TextField};
pub use subconsultants::{SubConsultant, SubConsultantSet};
