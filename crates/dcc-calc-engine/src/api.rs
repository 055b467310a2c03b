//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "HTTP routes exposing the calculators as JSON endpoints."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::resistance::Topology;

#[cfg(feature = "rest-api")]
pub use rest::router;

#[cfg(feature = "rest-api")]
mod rest {
    use axum::{
        extract::{rejection::JsonRejection, State},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::sync::Arc;
    use tracing::warn;

    use crate::{
        advisory::{advise, Advisory, AdvisoryRequest},
        errors::CalcEngineError,
        evaluate,
        kirchhoff::{solve_kcl, solve_kvl, KclNode, KclRequest, KvlLoop, KvlRequest},
        ohm::{solve_ohm, OhmRequest, OhmResult},
        power::{evaluate_power, PowerEnergy, PowerRequest},
        resistance::{aggregate_resistance, ResistanceRequest, ResistanceResult, ResistorSet},
        signal::{analyze_signals, SignalAnalysis, SignalRequest},
        source::{evaluate_source, SourceModel, SourceRequest},
        CalcRequest, CalcResponse,
    };

    use super::{HealthResponse, ResistanceBody};

    #[derive(Clone, Default)]
    pub struct CalcEngineState;

    pub fn router() -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route("/api/calc/ohm", post(ohm))
            .route("/api/calc/resistance", post(resistance))
            .route("/api/calc/emf", post(emf))
            .route("/api/calc/power", post(power))
            .route("/api/calc/kcl", post(kcl))
            .route("/api/calc/kvl", post(kvl))
            .route("/api/calc/signal", post(signal))
            .route("/api/calc/advisory", post(advisory))
            .route("/api/calc/evaluate", post(evaluate_any))
            .with_state(Arc::new(CalcEngineState))
    }

    async fn health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        })
    }

    async fn ohm(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<OhmRequest>, JsonRejection>,
    ) -> Result<Json<OhmResult>, StatusCode> {
        Ok(Json(solve_ohm(&accept(payload)?)))
    }

    async fn resistance(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<ResistanceBody>, JsonRejection>,
    ) -> Result<Json<ResistanceResult>, StatusCode> {
        let payload = accept(payload)?;
        let resistors = ResistorSet::new(payload.resistors).map_err(map_err)?;
        Ok(Json(aggregate_resistance(&ResistanceRequest {
            topology: payload.topology,
            resistors,
        })))
    }

    async fn emf(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<SourceRequest>, JsonRejection>,
    ) -> Result<Json<SourceModel>, StatusCode> {
        Ok(Json(evaluate_source(&accept(payload)?)))
    }

    async fn power(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<PowerRequest>, JsonRejection>,
    ) -> Result<Json<PowerEnergy>, StatusCode> {
        Ok(Json(evaluate_power(&accept(payload)?)))
    }

    async fn kcl(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<KclRequest>, JsonRejection>,
    ) -> Result<Json<KclNode>, StatusCode> {
        Ok(Json(solve_kcl(&accept(payload)?)))
    }

    async fn kvl(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<KvlRequest>, JsonRejection>,
    ) -> Result<Json<KvlLoop>, StatusCode> {
        Ok(Json(solve_kvl(&accept(payload)?)))
    }

    async fn signal(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<SignalRequest>, JsonRejection>,
    ) -> Result<Json<SignalAnalysis>, StatusCode> {
        Ok(Json(analyze_signals(&accept(payload)?)))
    }

    async fn advisory(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<AdvisoryRequest>, JsonRejection>,
    ) -> Result<Json<Advisory>, StatusCode> {
        Ok(Json(advise(&accept(payload)?)))
    }

    async fn evaluate_any(
        State(_): State<Arc<CalcEngineState>>,
        payload: Result<Json<CalcRequest>, JsonRejection>,
    ) -> Result<Json<CalcResponse>, StatusCode> {
        Ok(Json(evaluate(&accept(payload)?)))
    }

    /// Malformed bodies, including values a request type refuses to
    /// deserialize, are client errors.
    fn accept<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, StatusCode> {
        payload.map(|Json(body)| body).map_err(|rejection| {
            warn!(error = %rejection.body_text(), "rejecting malformed calculator request");
            StatusCode::BAD_REQUEST
        })
    }

    fn map_err(err: CalcEngineError) -> StatusCode {
        warn!(%err, "rejecting calculator request");
        if err.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Unvalidated resistance payload; the resistor list is checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistanceBody {
    pub topology: Topology,
    pub resistors: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
