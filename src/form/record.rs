// src/form/record.rs

use serde::Serialize;

use crate::types::{
    DEFAULT_JURISDICTION, DEFAULT_USER_TITLE, FEE_HOURLY_NTE, FEE_PERCENT_COMPLETE, UNKNOWN_USER,
};

use super::phases::PhaseFee;
use super::rich_text::{has_content, non_blank_lines, RichTextEditor};
use super::state::ProposalForm;
use super::subconsultants::SubConsultant;

/// Snapshot handed to the template renderer. Field names are the template
/// placeholder names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProposalRecord {
    pub date: String,
    pub client_name: String,
    pub client_first_name: String,
    pub client_title: String,
    pub firm_name: String,
    pub firm_address: String,
    pub firm_city_state_zip: String,
    pub project_name: String,
    pub project_summary: String,
    pub mechanical_summary: Vec<String>,
    pub plumbing_summary: Vec<String>,
    pub jurisdiction: String,
    pub user_name: String,
    pub user_title: String,
    pub fee_type: String,
    pub total_fee: String,
    pub include_mechanical: bool,
    pub include_plumbing: bool,

    pub has_subconsultants: bool,
    pub is_hourly_nte: bool,
    pub is_percent_complete: bool,

    pub sub_none: bool,
    pub sub_electrical: bool,
    pub sub_fire_sprinkler: bool,
    pub sub_test_balance: bool,
    pub sub_architectural: bool,
    pub sub_structural: bool,

    pub scope_schematic: bool,
    pub scope_dd: bool,
    pub scope_cd: bool,
    pub scope_ca: bool,

    pub phases: Vec<PhaseFee>,
}

/// Build the record from the current form. Never fails: anything missing
/// becomes an empty string or `false`.
pub fn build_record<E: RichTextEditor>(
    form: &ProposalForm<E>,
    session_user: Option<&str>,
    date: &str,
) -> ProposalRecord {
    let project_text = form.project_summary.plain_text();
    let mechanical_text = form.mechanical_summary.plain_text();
    let plumbing_text = form.plumbing_summary.plain_text();

    let subs = &form.subs;

    ProposalRecord {
        date: date.to_string(),
        client_name: form.client_name.clone(),
        client_first_name: first_name(&form.client_name),
        client_title: form.client_title.clone(),
        firm_name: form.firm_name.clone(),
        firm_address: form.firm_address.clone(),
        firm_city_state_zip: form.firm_city_state_zip.clone(),
        project_name: form.project_name.clone(),
        project_summary: non_blank_lines(&project_text).join("\n"),
        mechanical_summary: non_blank_lines(&mechanical_text),
        plumbing_summary: non_blank_lines(&plumbing_text),
        jurisdiction: jurisdiction_or_default(&form.jurisdiction),
        user_name: session_user
            .filter(|u| !u.is_empty())
            .unwrap_or(UNKNOWN_USER)
            .to_string(),
        user_title: DEFAULT_USER_TITLE.to_string(),
        fee_type: form.fee_type.clone(),
        total_fee: strip_currency_symbol(&form.phases.display_total()).to_string(),
        include_mechanical: has_content(&mechanical_text),
        include_plumbing: has_content(&plumbing_text),

        has_subconsultants: subs.any(),
        is_hourly_nte: form.fee_type == FEE_HOURLY_NTE,
        is_percent_complete: form.fee_type == FEE_PERCENT_COMPLETE,

        sub_none: subs.none(),
        sub_electrical: subs.is_set(SubConsultant::Electrical),
        sub_fire_sprinkler: subs.is_set(SubConsultant::FireSprinkler),
        sub_test_balance: subs.is_set(SubConsultant::TestBalance),
        sub_architectural: subs.is_set(SubConsultant::Architectural),
        sub_structural: subs.is_set(SubConsultant::Structural),

        scope_schematic: form.scope.schematic,
        scope_dd: form.scope.dd,
        scope_cd: form.scope.cd,
        scope_ca: form.scope.ca,

        phases: form.phases.valid_phases(),
    }
}

/// First whitespace-delimited token of the trimmed name ("" for blank input).
pub fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn jurisdiction_or_default(raw: &str) -> String {
    match raw.trim() {
        "" => DEFAULT_JURISDICTION.to_string(),
        s => s.to_string(),
    }
}

/// Drops the leading character of the display total (`$3,500` -> `3,500`).
fn strip_currency_symbol(display: &str) -> &str {
    let mut chars = display.chars();
    chars.next();
    chars.as_str()
}

/// Today's date the way it appears in the letter heading.
pub fn format_letter_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
