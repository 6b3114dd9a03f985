use std::sync::Arc;

use axum_test::TestServer;
use teetime_api::{build_router, ApiState};
use teetime_core::models::{duration::DurationConfig, venue::OperatingHours};

pub struct TestContext {
    pub state: ApiState,
}

impl TestContext {
    /// Venue with the stock rules: 60-360 minutes in 30-minute steps, open 6-23.
    pub fn new() -> Self {
        Self {
            state: ApiState::default(),
        }
    }

    pub fn with_rules(duration_config: DurationConfig, operating_hours: OperatingHours) -> Self {
        Self {
            state: ApiState::new(duration_config, operating_hours),
        }
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(build_router(Arc::new(self.state.clone())))
            .expect("Failed to start test server")
    }
}
