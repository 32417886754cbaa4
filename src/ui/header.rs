// src/ui/header.rs

use eframe::egui;
use proposal_writer_lib::router::Route;

/// What the header should show (derived by ui/mod.rs)
#[derive(Clone, Debug)]
pub struct HeaderModel {
    pub visible: bool,
    pub user: String,
    pub can_go_back: bool,
    pub current: Route,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    Navigate(Route),
    Back,
    Logout,
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders from HeaderModel and reports the clicked action
    pub fn ui(&mut self, ctx: &egui::Context, model: &HeaderModel) -> Option<HeaderAction> {
        if !model.visible {
            return None;
        }

        let mut action = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(model.can_go_back, egui::Button::new("← Back"))
                    .clicked()
                {
                    action = Some(HeaderAction::Back);
                }

                ui.separator();
                nav_btn(ui, model.current, Route::Dashboard, &mut action);
                nav_btn(ui, model.current, Route::ProposalForm, &mut action);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        action = Some(HeaderAction::Logout);
                    }
                    ui.label(egui::RichText::new(&model.user).strong());
                });
            });
        });

        action
    }
}

fn nav_btn(ui: &mut egui::Ui, current: Route, target: Route, action: &mut Option<HeaderAction>) {
    if ui
        .selectable_label(current == target, target.title())
        .clicked()
        && current != target
    {
        *action = Some(HeaderAction::Navigate(target));
    }
}
