// tests/phase_fees.rs

mod common;

use common::*;
use proposal_writer_lib::command::{self, FormCommand};
use proposal_writer_lib::command_state::with_directory;
use proposal_writer_lib::form::{build_record, ProposalForm};

fn run(env: &TestEnv, form: &mut ProposalForm, cmds: Vec<FormCommand>) {
    with_directory(&env.state, |d| command::apply_all(form, d, cmds)).expect("directory");
}

#[test]
fn add_edit_remove_keeps_total_current() {
    let env = setup(None, None);
    let mut form = ProposalForm::new();

    run(&env, &mut form, vec![FormCommand::AddPhaseRow, FormCommand::AddPhaseRow]);
    let ids: Vec<_> = form.phases.rows().iter().map(|r| r.id).collect();

    run(
        &env,
        &mut form,
        vec![
            FormCommand::SetPhaseName(ids[0], "Scoping".into()),
            FormCommand::SetPhaseFee(ids[0], "1000".into()),
            FormCommand::SetPhaseName(ids[1], "Bidding".into()),
            FormCommand::SetPhaseFee(ids[1], "2,500".into()),
        ],
    );
    assert_eq!(form.phases.display_total(), "$3,500");

    run(&env, &mut form, vec![FormCommand::RemovePhaseRow(ids[1])]);
    assert_eq!(form.phases.display_total(), "$1,000");

    let record = build_record(&form, None, "d");
    assert_eq!(record.total_fee, "1,000");
    assert_eq!(record.phases.len(), 1);
    assert_eq!(record.phases[0].name, "Scoping");
    assert_eq!(record.phases[0].fee, "1,000");
}

#[test]
fn fee_input_keeps_digits_only() {
    let env = setup(None, None);
    let mut form = ProposalForm::new();

    run(&env, &mut form, vec![FormCommand::AddPhaseRow]);
    let id = form.phases.rows()[0].id;

    run(&env, &mut form, vec![FormCommand::SetPhaseFee(id, "1,2a3.4".into())]);
    assert_eq!(form.phases.rows()[0].fee(), "1234");
    assert_eq!(form.phases.display_total(), "$1,234");
}

#[test]
fn rows_without_fee_are_left_out() {
    let env = setup(None, None);
    let mut form = ProposalForm::new();

    run(&env, &mut form, vec![FormCommand::AddPhaseRow, FormCommand::AddPhaseRow]);
    let ids: Vec<_> = form.phases.rows().iter().map(|r| r.id).collect();
    run(
        &env,
        &mut form,
        vec![
            FormCommand::SetPhaseName(ids[0], "Study".into()),
            FormCommand::SetPhaseFee(ids[0], "abc".into()),
            FormCommand::SetPhaseName(ids[1], "Consulting".into()),
            FormCommand::SetPhaseFee(ids[1], "12000".into()),
        ],
    );

    let record = build_record(&form, None, "d");
    assert_eq!(record.phases.len(), 1);
    assert_eq!(record.phases[0].name, "Consulting");
    assert_eq!(record.total_fee, "12,000");
}

#[test]
fn empty_table_totals_zero() {
    let form = ProposalForm::new();
    assert_eq!(form.phases.display_total(), "$0");
    assert_eq!(build_record(&form, None, "d").total_fee, "0");
}
