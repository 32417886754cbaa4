// src/form/phases.rs

//! Fee table rows. The total is never stored; it is recomputed from the rows
//! on every read, so it cannot drift after an edit or removal.

use serde::Serialize;

use crate::types::PHASE_NAMES;

pub type PhaseRowId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseRow {
    pub id: PhaseRowId,
    pub name: String,
    /// Digits only.
    fee: String,
}

impl PhaseRow {
    pub fn fee(&self) -> &str {
        &self.fee
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.fee.is_empty()
    }
}

/// One fee line as it appears in the generated document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhaseFee {
    pub name: String,
    pub fee: String,
}

#[derive(Clone, Debug, Default)]
pub struct PhaseTable {
    rows: Vec<PhaseRow>,
    next_id: PhaseRowId,
}

impl PhaseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PhaseRow] {
        &self.rows
    }

    /// Appends a row preset to the first phase name with an empty fee.
    pub fn add_row(&mut self) -> PhaseRowId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.rows.push(PhaseRow {
            id,
            name: PHASE_NAMES[0].0.to_string(),
            fee: String::new(),
        });
        id
    }

    pub fn remove_row(&mut self, id: PhaseRowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    pub fn set_row_name(&mut self, id: PhaseRowId, name: &str) -> bool {
        match self.row_mut(id) {
            Some(r) => {
                r.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Stores `raw` with every non-digit character stripped.
    pub fn set_row_fee(&mut self, id: PhaseRowId, raw: &str) -> bool {
        match self.row_mut(id) {
            Some(r) => {
                r.fee = sanitize_fee(raw);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .filter(|r| r.is_valid())
            .fold(0u64, |acc, r| acc.saturating_add(parse_fee(&r.fee)))
    }

    /// Total as shown in the read-only total field, e.g. `$3,500`.
    pub fn display_total(&self) -> String {
        format!("${}", format_grouped(self.total()))
    }

    pub fn valid_phases(&self) -> Vec<PhaseFee> {
        self.rows
            .iter()
            .filter(|r| r.is_valid())
            .map(|r| PhaseFee {
                name: r.name.clone(),
                fee: format_grouped(parse_fee(&r.fee)),
            })
            .collect()
    }

    fn row_mut(&mut self, id: PhaseRowId) -> Option<&mut PhaseRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }
}

pub fn sanitize_fee(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Comma separators are ignored; anything else unparseable counts as zero.
pub fn parse_fee(text: &str) -> u64 {
    let clean: String = text.chars().filter(|c| *c != ',').collect();
    let clean = clean.trim();
    if clean.is_empty() {
        return 0;
    }

    match clean.parse::<u64>() {
        Ok(v) => v,
        // all digits but too long for u64
        Err(_) if clean.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
        Err(_) => 0,
    }
}

/// en-US thousands grouping, no decimals: 1234567 -> "1,234,567".
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
