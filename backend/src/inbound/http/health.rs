//! `/health/live` and `/health/ready` for orchestrators.
//!
//! Both answer with `Cache-Control: no-store` and a one-field JSON body naming
//! the current [`Phase`].
use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Process lifecycle as seen by the health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Phase {
    /// Listener not yet bound. Live, not ready.
    Starting = 0,
    /// Accepting traffic. Live and ready.
    Serving = 1,
    /// Shutting down. Neither live nor ready.
    Draining = 2,
}

impl Phase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }

    fn is_live(self) -> bool {
        self != Self::Draining
    }

    fn is_ready(self) -> bool {
        self == Self::Serving
    }
}

/// Shared lifecycle cell. Phases only move forward.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Move to [`Phase::Serving`] unless draining has already begun.
    pub fn mark_ready(&self) {
        self.advance(Phase::Serving);
    }

    /// Move to [`Phase::Draining`].
    pub fn begin_draining(&self) {
        self.advance(Phase::Draining);
    }

    pub fn is_ready(&self) -> bool {
        self.phase().is_ready()
    }

    fn advance(&self, to: Phase) {
        self.phase.fetch_max(to as u8, Ordering::AcqRel);
    }
}

#[derive(Serialize)]
struct PhaseBody {
    phase: Phase,
}

fn phase_response(phase: Phase, healthy: bool) -> HttpResponse {
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(PhaseBody { phase })
}

/// 200 while serving; 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting traffic"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    phase_response(phase, phase.is_ready())
}

/// 200 until draining begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Draining for shutdown")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    phase_response(phase, phase.is_live())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    fn state_in(phase: Phase) -> HealthState {
        let state = HealthState::new();
        match phase {
            Phase::Starting => {}
            Phase::Serving => state.mark_ready(),
            Phase::Draining => state.begin_draining(),
        }
        state
    }

    #[rstest]
    #[case(Phase::Starting, "/health/live", StatusCode::OK)]
    #[case(Phase::Starting, "/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Phase::Serving, "/health/live", StatusCode::OK)]
    #[case(Phase::Serving, "/health/ready", StatusCode::OK)]
    #[case(Phase::Draining, "/health/live", StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Phase::Draining, "/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn health_checks_follow_the_phase(
        #[case] phase: Phase,
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_in(phase)))
                .service(ready)
                .service(live),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["phase"], serde_json::to_value(phase).expect("phase serialises"));
    }

    #[rstest]
    fn draining_is_not_undone_by_a_late_ready() {
        let state = HealthState::new();
        state.begin_draining();
        state.mark_ready();
        assert_eq!(state.phase(), Phase::Draining);
        assert!(!state.is_ready());
    }
}
