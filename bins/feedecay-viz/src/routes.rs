use axum::{
    extract::Query,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use feedecay_core::constants::{
    DECAY_FACTOR_MAX, DECAY_FACTOR_MIN, DECAY_FACTOR_STEP, DEFAULT_DECAY_FACTOR, DEFAULT_MIN_COST,
    INITIAL_COST, MAX_COLLECTIONS, MIN_COST_MAX, MIN_COST_MIN, MIN_COST_STEP,
};
use feedecay_core::{generate_series, CurveParams};

// ── Router ───────────────────────────────────────────────────────────────────

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(web_ui))
        .route("/api/curve", get(curve))
        .route("/api/config", get(slider_config))
        .layer(cors)
}

const INDEX_HTML: &str = include_str!("static/index.html");

async fn web_ui() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ── /api/curve?decay_factor=D&min_cost=M ─────────────────────────────────────

#[derive(Deserialize)]
struct CurveQuery {
    decay_factor: Option<f64>,
    min_cost: Option<f64>,
}

/// Missing tunables fall back to the defaults; supplied ones are pulled into
/// range exactly as the sliders bound them.
fn resolve_params(q: &CurveQuery) -> CurveParams {
    CurveParams::new(
        q.min_cost.unwrap_or(DEFAULT_MIN_COST),
        q.decay_factor.unwrap_or(DEFAULT_DECAY_FACTOR),
    )
    .clamped()
}

async fn curve(Query(q): Query<CurveQuery>) -> Json<Value> {
    let params = resolve_params(&q);
    let points = generate_series(&params);

    Json(json!({
        "params": params,
        "points": points,
    }))
}

// ── /api/config ──────────────────────────────────────────────────────────────

async fn slider_config() -> Json<Value> {
    Json(json!({
        "initial_cost": INITIAL_COST,
        "max_collections": MAX_COLLECTIONS,
        "min_cost": {
            "default": DEFAULT_MIN_COST,
            "min": MIN_COST_MIN,
            "max": MIN_COST_MAX,
            "step": MIN_COST_STEP,
        },
        "decay_factor": {
            "default": DEFAULT_DECAY_FACTOR,
            "min": DECAY_FACTOR_MIN,
            "max": DECAY_FACTOR_MAX,
            "step": DECAY_FACTOR_STEP,
        },
    }))
}
