use axum::Router;

use facemetrics::config::Config;
use facemetrics::routes::build_router;
use facemetrics::state::AppState;

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_test_app() -> TestApp {
    let config = Config::default();
    let state = AppState::new(&config);
    TestApp {
        app: build_router(state),
    }
}
