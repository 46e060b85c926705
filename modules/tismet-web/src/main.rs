use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tismet_nav::{admin_intro, nav_top_intro, FragmentRegistry, NavError, PageView};

mod about;
mod config;
mod counters;
mod templates;

use about::About;
use config::Config;
use counters::Counters;
use templates::*;

// --- App State ---

struct AppState {
    config: Config,
    start_time: DateTime<Utc>,
    counters: Counters,
    fragments: FragmentRegistry,
}

impl AppState {
    fn new(config: Config) -> Self {
        Self {
            config,
            start_time: Utc::now(),
            counters: Counters::default(),
            fragments: FragmentRegistry::default(),
        }
    }
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tismet=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.web_host, config.web_port);
    let state = Arc::new(AppState::new(config));

    info!("tismet admin server starting on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/admin/") }))
        .route(
            "/admin/",
            get(|| async { Redirect::temporary("/admin/admin-about.html") }),
        )
        .route("/admin/admin-about.html", get(about_page))
        .route("/admin/srv/about-counters.html", get(counters_page))
        .route("/srv/about.json", get(about_json))
        .route("/srv/counters.json", get(counters_json))
        .route_layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Middleware ---

async fn count_requests(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    state.counters.record(request.uri().path());
    next.run(request).await
}

// --- Handlers ---

async fn about_page(State(state): State<Arc<AppState>>) -> Response {
    let mut page = PageView::new("About");
    if let Err(e) = admin_intro(&mut page, "About") {
        return intro_failed(e);
    }
    let about = About::collect(&state.config, state.start_time);
    Html(render_about(&page, &state.fragments, &about)).into_response()
}

async fn counters_page(State(state): State<Arc<AppState>>) -> Response {
    let mut page = PageView::new("Counters");
    if let Err(e) = nav_top_intro(&mut page, "Debug") {
        return intro_failed(e);
    }
    Html(render_counters(
        &page,
        &state.fragments,
        &state.counters.snapshot(),
    ))
    .into_response()
}

async fn about_json(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(About::collect(&state.config, state.start_time))
}

async fn counters_json(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.counters.snapshot())
}

fn intro_failed(e: NavError) -> Response {
    warn!(error = %e, "Page setup failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("Error building page".to_string()),
    )
        .into_response()
}
