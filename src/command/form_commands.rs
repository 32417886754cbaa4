// src/command/form_commands.rs

use crate::directory::ClientDirectory;
use crate::form::autofill::autofill_project_info;
use crate::form::{
    EditorSlot, PhaseRowId, ProposalForm, RichTextEditor, ScopeItem, SubConsultant, TextField,
};

/// One user edit on the proposal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    SetField(TextField, String),
    SetFeeType(String),
    AddPhaseRow,
    RemovePhaseRow(PhaseRowId),
    SetPhaseName(PhaseRowId, String),
    SetPhaseFee(PhaseRowId, String),
    ToggleSubConsultant(SubConsultant),
    SetSubNone(bool),
    ToggleScope(ScopeItem),
    SelectClient(Option<usize>),
    SelectContact(Option<usize>),
    SetEditorText(EditorSlot, String),
    Autofill,
    Reset,
}

/// Apply one command. Commands naming a row that no longer exists are ignored.
pub fn apply<E: RichTextEditor>(form: &mut ProposalForm<E>, dir: &ClientDirectory, cmd: FormCommand) {
    use FormCommand::*;

    match cmd {
        SetField(field, value) => *form.field_mut(field) = value,
        SetFeeType(fee_type) => form.fee_type = fee_type,

        AddPhaseRow => {
            form.phases.add_row();
        }
        RemovePhaseRow(id) => {
            form.phases.remove_row(id);
        }
        SetPhaseName(id, name) => {
            form.phases.set_row_name(id, &name);
        }
        SetPhaseFee(id, raw) => {
            form.phases.set_row_fee(id, &raw);
        }

        ToggleSubConsultant(sub) => form.subs.toggle(sub),
        SetSubNone(checked) => form.subs.set_none(checked),
        ToggleScope(item) => form.scope.toggle(item),

        SelectClient(index) => form.select_client(dir, index),
        SelectContact(index) => form.select_contact(dir, index),

        SetEditorText(slot, text) => form.editor_mut(slot).set_plain_text(&text),

        Autofill => autofill_project_info(form),
        Reset => form.reset(),
    }
}

/// Apply commands in order.
pub fn apply_all<E: RichTextEditor>(
    form: &mut ProposalForm<E>,
    dir: &ClientDirectory,
    cmds: impl IntoIterator<Item = FormCommand>,
) {
    for cmd in cmds {
        apply(form, dir, cmd);
    }
}

// ======================================================
// Unit Tests
// ======================================================
