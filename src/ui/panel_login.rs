// src/ui/panel_login.rs

use eframe::egui;
use proposal_writer_lib::{command, context::AppCtx, router::Route, types::AppState};

use super::message::PanelMsgState;
use super::widgets;

pub struct LoginPanel {
    selected_user: String,
    msg: PanelMsgState,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            selected_user: String::new(),
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.selected_user.clear();
    }

    /// Returns the route to go to after a successful login.
    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) -> Option<Route> {
        widgets::panel_title(ui, "Proposal Writer");
        ui.separator();
        ui.add_space(12.0);

        ui.label("Select user");

        let selected_text = if self.selected_user.is_empty() {
            "(select)".to_string()
        } else {
            self.selected_user.clone()
        };

        egui::ComboBox::from_id_salt("login_user")
            .selected_text(selected_text)
            .width(240.0)
            .show_ui(ui, |ui| {
                for user in ctx.users() {
                    ui.selectable_value(&mut self.selected_user, user.clone(), user);
                }
            });

        ui.add_space(12.0);

        let clicked = ui
            .add_enabled(
                !self.selected_user.is_empty(),
                widgets::large_button("Login"),
            )
            .clicked();

        let mut next = None;

        if clicked {
            self.clear_messages();

            match command::login(state, &self.selected_user) {
                Ok(()) => {
                    self.reset_inputs();
                    next = Some(Route::Dashboard);
                }
                Err(e) => self.msg.from_app_error(&e, ctx.debug_ui),
            }
        }

        ui.add_space(8.0);
        self.msg.show(ui, ctx.debug_ui);
        next
    }
}
