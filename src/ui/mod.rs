// src/ui/mod.rs

pub mod header;
pub mod panel_dashboard;
pub mod panel_login;
pub mod panel_proposal;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use header::{Header, HeaderAction, HeaderModel};
use message::PanelMsgState;
use panel_dashboard::DashboardPanel;
use panel_login::LoginPanel;
use panel_proposal::ProposalPanel;
use proposal_writer_lib::command;
use proposal_writer_lib::context::AppCtx;
use proposal_writer_lib::router::{Route, Router};
use proposal_writer_lib::types::AppState;

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    router: Router,
    prev_route: Route,

    header: Header,
    login: LoginPanel,
    dashboard: DashboardPanel,
    proposal: ProposalPanel,
    startup_warn: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        // Always start logged out
        let _ = command::logout(state.as_ref());

        let mut startup_warn = PanelMsgState::default();
        if !ctx.template_path().exists() {
            startup_warn.set_warn(format!(
                "Proposal template missing: {}",
                ctx.template_path().display()
            ));
        }

        let router = Router::new();
        let prev_route = router.current();

        Self {
            state,
            ctx,
            router,
            prev_route,
            header: Header::new(),
            login: LoginPanel::new(),
            dashboard: DashboardPanel::new(),
            proposal: ProposalPanel::new(),
            startup_warn,
        }
    }

    fn logged_in(&self) -> bool {
        command::get_status(self.state.as_ref()).unwrap_or(false)
    }

    fn reset_all_inputs(&mut self) {
        self.login.reset_inputs();
        self.proposal.reset_inputs();
    }

    /// Build a pure header model once per frame
    fn derive_header_model(&self) -> HeaderModel {
        HeaderModel {
            visible: self.router.header_visible(),
            user: command::current_user_or_placeholder(self.state.as_ref()),
            can_go_back: self.router.can_go_back(),
            current: self.router.current(),
        }
    }

    fn handle_header(&mut self, action: HeaderAction) {
        let logged_in = self.logged_in();
        match action {
            HeaderAction::Navigate(to) => {
                self.router.navigate(to, logged_in);
            }
            HeaderAction::Back => {
                self.router.back(logged_in);
            }
            HeaderAction::Logout => {
                if let Err(e) = command::logout(self.state.as_ref()) {
                    tracing::error!(error = %e, "logout failed");
                }
                self.reset_all_inputs();
                self.router.reset();
            }
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let logged_in = self.logged_in();
        self.router.enforce(logged_in);

        // Route transition hooks
        if self.router.current() != self.prev_route {
            self.login.clear_messages();
            self.proposal.clear_messages();
            self.prev_route = self.router.current();
        }

        let model = self.derive_header_model();
        if let Some(action) = self.header.ui(ctx, &model) {
            self.handle_header(action);
        }

        let mut next: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.startup_warn.show(ui, self.ctx.debug_ui);

            match self.router.current() {
                Route::Login => next = self.login.ui(ui, self.state.as_ref(), &self.ctx),
                Route::Dashboard => next = self.dashboard.ui(ui, self.state.as_ref(), &self.ctx),
                Route::ProposalForm => self.proposal.ui(ui, self.state.as_ref(), &self.ctx),
            }
        });

        if let Some(to) = next {
            let logged_in = self.logged_in();
            self.router.navigate(to, logged_in);
        }
    }
}
