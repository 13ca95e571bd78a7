use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
    load_started: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            load_started: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Users are fetched once, on the first frame
        if !self.load_started {
            self.load_started = true;
            self.state.start_load(ctx);
        }

        self.state.poll_load();

        egui::CentralPanel::default().show(ctx, |ui| {
            let locale = self.state.config.locale;
            widgets::users_panel(&mut self.state.users, locale, ui);
        });
    }
}
