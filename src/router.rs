// src/router.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    ProposalForm,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::ProposalForm => "Proposal Generator",
        }
    }

    fn requires_session(self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Centralized route invariant (pure): without a session everything resolves
/// to `Login`.
pub fn apply_route_guards(logged_in: bool, requested: Route) -> Route {
    if requested.requires_session() && !logged_in {
        return Route::Login;
    }
    requested
}

#[derive(Clone, Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Login,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the route actually shown after guards.
    pub fn navigate(&mut self, to: Route, logged_in: bool) -> Route {
        let to = apply_route_guards(logged_in, to);
        if to != self.current {
            self.history.push(self.current);
            self.current = to;
        }
        self.current
    }

    pub fn back(&mut self, logged_in: bool) -> Route {
        if let Some(prev) = self.history.pop() {
            self.current = apply_route_guards(logged_in, prev);
        }
        self.current
    }

    /// Re-check the current route against the session, e.g. after logout.
    pub fn enforce(&mut self, logged_in: bool) -> Route {
        let guarded = apply_route_guards(logged_in, self.current);
        if guarded != self.current {
            self.current = guarded;
            self.history.clear();
        }
        self.current
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn header_visible(&self) -> bool {
        self.current != Route::Login
    }
}
