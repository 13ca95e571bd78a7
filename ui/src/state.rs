use chrono::Utc;
use roster_business::{BusinessConfig, UsersLoader, UsersState};

/// The main application state.
#[derive(Debug, Default)]
pub struct State {
    pub config: BusinessConfig,
    /// Records, table state and open modal of the users screen.
    pub users: UsersState,
    /// Background load of the user list.
    pub loader: UsersLoader,
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            users: UsersState::new(),
            loader: UsersLoader::new(),
        }
    }

    /// State pointing at a test server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    /// Starts the one-shot users load. The UI repaints when it finishes.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let url = self.config.users_url();
        if self.loader.start(url.as_str(), move || ctx.request_repaint()) {
            self.users.set_fetching();
        }
    }

    /// Moves a finished load into the users state.
    /// Call this in the update loop.
    pub fn poll_load(&mut self) {
        if let Some(result) = self.loader.poll() {
            self.users.apply_load_result(result, Utc::now());
        }
    }
}
