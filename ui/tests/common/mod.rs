use egui_kittest::Harness;
use roster_business::{Address, Company, User, UsersState};
use roster_ui::RosterApp;
use roster_ui::state::State;
use roster_ui::widgets::users_panel;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = UsersState> {
    _mock_server: Option<MockServer>,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, UsersState> {
    /// Users panel over an already loaded store.
    #[allow(unused)]
    pub fn new_panel(users: Vec<User>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut state = UsersState::new();
        state.update_users(users, chrono::Utc::now());

        let harness = Harness::builder()
            .with_size(egui::Vec2::new(1200.0, 800.0))
            .build_ui_state(
                |ui, state: &mut UsersState| {
                    users_panel(state, roster_business::Locale::En, ui);
                },
                state,
            );

        Self {
            _mock_server: None,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    #[allow(unused)]
    pub async fn new_app(template: ResponseTemplate, expected_calls: u64) -> Self {
        let mock_server = setup_users_server(template, expected_calls).await;
        let app = RosterApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::Vec2::new(1200.0, 800.0))
            .build_eframe(|_| app);

        Self {
            _mock_server: Some(mock_server),
            harness,
        }
    }
}

async fn setup_users_server(template: ResponseTemplate, expected_calls: u64) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .expect(expected_calls)
        .mount(&mock_server)
        .await;

    mock_server
}

#[allow(unused)]
pub fn user(id: u64, name: &str, company: &str, city: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: format!("555-010{id}"),
        company: Some(Company {
            name: company.to_owned(),
        }),
        address: Some(Address {
            city: city.to_owned(),
        }),
    }
}

#[allow(unused)]
pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Carla Ruiz", "Acme", "Lima"),
        user(2, "ana Pérez", "Globex", "Quito"),
        user(3, "Bea Torres", "Acme", "Bogotá"),
    ]
}
