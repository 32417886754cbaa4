// src/command/generate.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::command_state::{current_user, GenerationGuard};
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::form::{build_record, format_letter_date, ProposalForm, ProposalRecord, RichTextEditor};
use crate::template::{render_docx_value, template_names, unmatched_names};
use crate::types::AppState;

/// A rendered proposal that has not been written anywhere yet.
#[derive(Debug)]
pub struct GeneratedProposal {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub record: ProposalRecord,
}

fn unsafe_file_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").expect("static pattern"))
}

/// Every character outside `[A-Za-z0-9]` becomes `_`, one for one.
pub fn sanitize_file_stem(project_name: &str) -> String {
    unsafe_file_chars()
        .replace_all(project_name, "_")
        .into_owned()
}

pub fn proposal_file_name(project_name: &str, epoch_millis: i64) -> String {
    format!(
        "Proposal_{}_{epoch_millis}.docx",
        sanitize_file_stem(project_name)
    )
}

pub fn generate_proposal<E: RichTextEditor>(
    state: &AppState,
    ctx: &AppCtx,
    form: &ProposalForm<E>,
) -> AppResult<GeneratedProposal> {
    generate_proposal_at(state, ctx, form, Local::now())
}

/// Same as `generate_proposal` with the clock supplied by the caller.
pub fn generate_proposal_at<E: RichTextEditor>(
    state: &AppState,
    ctx: &AppCtx,
    form: &ProposalForm<E>,
    now: DateTime<Local>,
) -> AppResult<GeneratedProposal> {
    let _guard = GenerationGuard::acquire(state)?;

    let user = current_user(state)?;
    let record = build_record(form, user.as_deref(), &format_letter_date(now.date_naive()));

    let template_path = ctx.template_path();
    let template = fs::read(&template_path)
        .map_err(|e| AppError::TemplateRead(format!("{}: {e}", template_path.display())))?;

    let data = serde_json::to_value(&record).map_err(|e| AppError::RecordEncode(e.to_string()))?;
    warn_unmatched_placeholders(&template, &data);

    let bytes = render_docx_value(&template, &data).inspect_err(|e| {
        tracing::error!(error = %e, "proposal render failed");
    })?;

    let file_name = proposal_file_name(&record.project_name, now.timestamp_millis());
    tracing::info!(file = %file_name, size = bytes.len(), "proposal generated");

    Ok(GeneratedProposal {
        file_name,
        bytes,
        record,
    })
}

// Placeholders the record does not provide still render (as ""); they are
// only logged here so template drift shows up in the log.
fn warn_unmatched_placeholders(template: &[u8], data: &serde_json::Value) {
    let Ok(names) = template_names(template) else {
        return;
    };
    for name in unmatched_names(&names, data) {
        tracing::warn!(placeholder = %name, "template placeholder has no record field");
    }
}

/// Write into `out_dir` under the generated file name.
pub fn write_proposal(out_dir: &Path, generated: &GeneratedProposal) -> AppResult<PathBuf> {
    fs::create_dir_all(out_dir)
        .map_err(|e| AppError::OutputWrite(format!("{}: {e}", out_dir.display())))?;
    let path = out_dir.join(&generated.file_name);
    write_proposal_to(&path, generated)?;
    Ok(path)
}

/// Write to an exact path (save dialog target).
pub fn write_proposal_to(path: &Path, generated: &GeneratedProposal) -> AppResult<()> {
    fs::write(path, &generated.bytes)
        .map_err(|e| AppError::OutputWrite(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "proposal saved");
    Ok(())
}

// ======================================================
// Unit Tests
// ======================================================
