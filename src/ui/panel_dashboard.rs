// src/ui/panel_dashboard.rs

use eframe::egui;
use proposal_writer_lib::{
    command, command_state::with_directory, context::AppCtx, router::Route, types::AppState,
};

use super::widgets;

pub struct DashboardPanel;

impl DashboardPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) -> Option<Route> {
        widgets::panel_title(ui, "Dashboard");
        ui.separator();
        ui.add_space(6.0);

        ui.label(format!(
            "Welcome, {}.",
            command::current_user_or_placeholder(state)
        ));
        ui.add_space(12.0);

        let clients = with_directory(state, |d| d.len()).unwrap_or(0);
        if clients == 0 {
            widgets::ui_notice(
                ui,
                &format!(
                    "No clients loaded. Place a client list at {} to enable client selection.",
                    ctx.clients_path().display()
                ),
            );
        } else {
            ui.label(format!("{clients} clients available."));
        }

        if !ctx.template_path().exists() {
            ui.add_space(8.0);
            widgets::ui_notice(
                ui,
                &format!(
                    "Proposal template not found. Expected at {}.",
                    ctx.template_path().display()
                ),
            );
        }

        ui.add_space(16.0);

        ui.add(widgets::large_button("New Proposal"))
            .clicked()
            .then_some(Route::ProposalForm)
    }
}
