// src/ui/panel_proposal.rs

use eframe::egui;
use proposal_writer_lib::{
    command::{self, FormCommand},
    command_state::{generation_running, with_directory},
    context::AppCtx,
    form::{EditorSlot, ProposalForm, RichTextEditor, ScopeItem, SubConsultant, TextField},
    types::{phase_label, AppState, FEE_TYPES, PHASE_NAMES},
};

use super::message::PanelMsgState;
use super::widgets;

pub struct ProposalPanel {
    form: ProposalForm,
    msg: PanelMsgState,
    last_saved: Option<String>,
}

impl ProposalPanel {
    pub fn new() -> Self {
        Self {
            form: ProposalForm::new(),
            msg: PanelMsgState::default(),
            last_saved: None,
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.form.reset();
        self.last_saved = None;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) {
        widgets::panel_title(ui, "Proposal Generator");
        ui.separator();
        ui.add_space(6.0);

        let mut cmds: Vec<FormCommand> = Vec::new();
        let mut generate_clicked = false;

        let client_names: Vec<String> = with_directory(state, |d| {
            d.client_names().map(|(_, n)| n.to_string()).collect()
        })
        .unwrap_or_default();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Autofill sample project").clicked() {
                        cmds.push(FormCommand::Autofill);
                    }
                    if ui.button("Clear form").clicked() {
                        cmds.push(FormCommand::Reset);
                    }
                });
                ui.add_space(8.0);

                widgets::section(ui, "Client", |ui| {
                    Self::ui_client_picker(ui, &self.form, &client_names, &mut cmds);
                    ui.add_space(6.0);
                    Self::ui_text_fields(
                        ui,
                        "client_fields",
                        &self.form,
                        &[
                            (TextField::FirmName, "Firm name"),
                            (TextField::FirmAddress, "Address"),
                            (TextField::FirmCityStateZip, "City, State ZIP"),
                            (TextField::ClientName, "Contact name"),
                            (TextField::ClientTitle, "Contact title"),
                        ],
                        &mut cmds,
                    );
                });

                widgets::section(ui, "Project", |ui| {
                    Self::ui_text_fields(
                        ui,
                        "project_fields",
                        &self.form,
                        &[
                            (TextField::ProjectName, "Project name"),
                            (TextField::Jurisdiction, "Jurisdiction"),
                        ],
                        &mut cmds,
                    );
                    ui.add_space(6.0);
                    Self::ui_editor(ui, &self.form, EditorSlot::ProjectSummary, "Project summary", &mut cmds);
                    Self::ui_editor(ui, &self.form, EditorSlot::MechanicalSummary, "Mechanical scope", &mut cmds);
                    Self::ui_editor(ui, &self.form, EditorSlot::PlumbingSummary, "Plumbing scope", &mut cmds);
                });

                widgets::section(ui, "Scope of services", |ui| {
                    for item in ScopeItem::ALL {
                        let mut checked = self.form.scope.get(item);
                        if ui.checkbox(&mut checked, item.label()).changed() {
                            cmds.push(FormCommand::ToggleScope(item));
                        }
                    }
                });

                widgets::section(ui, "Sub-consultants", |ui| {
                    let mut none = self.form.subs.none();
                    if ui.checkbox(&mut none, "None").changed() {
                        cmds.push(FormCommand::SetSubNone(none));
                    }
                    for sub in SubConsultant::ALL {
                        let mut checked = self.form.subs.is_set(sub);
                        if ui.checkbox(&mut checked, sub.label()).changed() {
                            cmds.push(FormCommand::ToggleSubConsultant(sub));
                        }
                    }
                });

                widgets::section(ui, "Fees", |ui| {
                    Self::ui_fees(ui, &self.form, &mut cmds);
                });

                ui.add_space(6.0);

                let busy = generation_running(state);
                generate_clicked = ui
                    .add_enabled(!busy, widgets::large_button("Generate Proposal"))
                    .clicked();

                ui.add_space(8.0);
                self.msg.show(ui, ctx.debug_ui);

                if let Some(path) = &self.last_saved {
                    ui.label(format!("Saved to {path}"));
                }
            });

        if !cmds.is_empty() {
            let form = &mut self.form;
            if let Err(e) = with_directory(state, |d| command::apply_all(form, d, cmds)) {
                self.msg.from_app_error(&e, ctx.debug_ui);
            }
        }

        if generate_clicked {
            self.generate(state, ctx);
        }
    }

    fn ui_client_picker(
        ui: &mut egui::Ui,
        form: &ProposalForm,
        client_names: &[String],
        cmds: &mut Vec<FormCommand>,
    ) {
        let picker = &form.picker;

        egui::Grid::new("client_picker")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Client");
                let selected_text = picker
                    .selected_client
                    .and_then(|i| client_names.get(i))
                    .cloned()
                    .unwrap_or_else(|| "(select client)".to_string());

                egui::ComboBox::from_id_salt("client_select")
                    .selected_text(selected_text)
                    .width(320.0)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(picker.selected_client.is_none(), "(select client)")
                            .clicked()
                        {
                            cmds.push(FormCommand::SelectClient(None));
                        }
                        for (i, name) in client_names.iter().enumerate() {
                            if ui
                                .selectable_label(picker.selected_client == Some(i), name)
                                .clicked()
                            {
                                cmds.push(FormCommand::SelectClient(Some(i)));
                            }
                        }
                    });
                ui.end_row();

                ui.label("Contact");
                let selected_text = picker
                    .selected_contact
                    .and_then(|i| picker.contact_options.iter().find(|o| o.index == i))
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| "(select contact)".to_string());

                ui.add_enabled_ui(picker.contact_enabled, |ui| {
                    egui::ComboBox::from_id_salt("contact_select")
                        .selected_text(selected_text)
                        .width(320.0)
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_label(picker.selected_contact.is_none(), "(select contact)")
                                .clicked()
                            {
                                cmds.push(FormCommand::SelectContact(None));
                            }
                            for opt in &picker.contact_options {
                                if ui
                                    .selectable_label(picker.selected_contact == Some(opt.index), &opt.label)
                                    .clicked()
                                {
                                    cmds.push(FormCommand::SelectContact(Some(opt.index)));
                                }
                            }
                        });
                });
                ui.end_row();
            });
    }

    fn ui_text_fields(
        ui: &mut egui::Ui,
        id: &str,
        form: &ProposalForm,
        fields: &[(TextField, &str)],
        cmds: &mut Vec<FormCommand>,
    ) {
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (field, label) in fields {
                    let mut buf = form.field(*field).to_string();
                    if widgets::text_row(ui, label, &mut buf, "") {
                        cmds.push(FormCommand::SetField(*field, buf));
                    }
                }
            });
    }

    fn ui_editor(
        ui: &mut egui::Ui,
        form: &ProposalForm,
        slot: EditorSlot,
        label: &str,
        cmds: &mut Vec<FormCommand>,
    ) {
        ui.label(label);
        let mut text = form.editor(slot).plain_text();
        let resp = ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            cmds.push(FormCommand::SetEditorText(slot, text));
        }
        ui.add_space(6.0);
    }

    fn ui_fees(ui: &mut egui::Ui, form: &ProposalForm, cmds: &mut Vec<FormCommand>) {
        ui.horizontal(|ui| {
            ui.label("Fee type");
            egui::ComboBox::from_id_salt("fee_type")
                .selected_text(form.fee_type.as_str())
                .show_ui(ui, |ui| {
                    for fee_type in FEE_TYPES {
                        if ui
                            .selectable_label(form.fee_type == fee_type, fee_type)
                            .clicked()
                        {
                            cmds.push(FormCommand::SetFeeType(fee_type.to_string()));
                        }
                    }
                });
        });
        ui.add_space(6.0);

        egui::Grid::new("phase_rows")
            .num_columns(3)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for row in form.phases.rows() {
                    egui::ComboBox::from_id_salt(("phase_name", row.id))
                        .selected_text(phase_label(&row.name))
                        .width(240.0)
                        .show_ui(ui, |ui| {
                            for (value, label) in PHASE_NAMES {
                                if ui.selectable_label(row.name == value, label).clicked() {
                                    cmds.push(FormCommand::SetPhaseName(row.id, value.to_string()));
                                }
                            }
                        });

                    let mut fee = row.fee().to_string();
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut fee)
                            .hint_text("Fee")
                            .desired_width(120.0),
                    );
                    if resp.changed() {
                        cmds.push(FormCommand::SetPhaseFee(row.id, fee));
                    }

                    if ui.small_button("Remove").clicked() {
                        cmds.push(FormCommand::RemovePhaseRow(row.id));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        if ui.button("Add phase").clicked() {
            cmds.push(FormCommand::AddPhaseRow);
        }

        ui.add_space(6.0);
        ui.label(egui::RichText::new(format!("Total: {}", form.phases.display_total())).strong());
    }

    fn generate(&mut self, state: &AppState, ctx: &AppCtx) {
        self.clear_messages();
        self.last_saved = None;

        let generated = match command::generate_proposal(state, ctx, &self.form) {
            Ok(g) => g,
            Err(e) => {
                self.msg.from_app_error(&e, ctx.debug_ui);
                return;
            }
        };

        let picked = rfd::FileDialog::new()
            .set_title("Save proposal")
            .set_directory(ctx.output_dir())
            .set_file_name(&generated.file_name)
            .add_filter("Word document", &["docx"])
            .save_file();

        let res = match picked {
            Some(path) => command::write_proposal_to(&path, &generated).map(|_| path),
            None => command::write_proposal(&ctx.output_dir(), &generated),
        };

        match res {
            Ok(path) => {
                self.last_saved = Some(path.display().to_string());
                self.msg.set_success("Proposal generated.");
            }
            Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
        }
    }
}
