//! Serves a local scores CSV at `/mlb.csv` for the scoreboard to poll.

use std::{env, io, net::SocketAddr, path::PathBuf, sync::Arc, time::SystemTime};

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_CSV: &str = "mlb.csv";

#[derive(Clone)]
struct ServerState {
    csv_path: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let port = env::var("FEED_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let csv_path = env::var("FEED_SERVER_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV));

    let state = ServerState {
        csv_path: Arc::new(csv_path),
    };
    info!(path = %state.csv_path.display(), "serving scores csv");

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "feed server starting; endpoint /mlb.csv");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding port {port}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving feed")?;

    info!("feed server stopped");
    Ok(())
}

fn build_router(state: ServerState) -> Router<()> {
    Router::new()
        .route("/mlb.csv", get(serve_csv))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn serve_csv(State(state): State<ServerState>) -> Response {
    let path = state.csv_path.as_path();
    let body = match tokio::fs::read(path).await {
        Ok(body) => body,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            error!(path = %path.display(), "csv file missing");
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            return (StatusCode::NOT_FOUND, format!("File not found: {name}")).into_response();
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed reading csv");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error reading file: {err}"),
            )
                .into_response();
        }
    };

    let last_modified = tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|meta| meta.modified().ok())
        .and_then(|time| HeaderValue::from_str(&http_date(time)).ok());

    let mut resp = ([(header::CONTENT_TYPE, "text/csv")], body).into_response();
    if let Some(value) = last_modified {
        resp.headers_mut().insert(header::LAST_MODIFIED, value);
    }
    resp
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    warn!(path = %uri.path(), "unknown path");
    (
        StatusCode::NOT_FOUND,
        "Not Found: Only /mlb.csv is a valid endpoint.",
    )
}

fn http_date(time: SystemTime) -> String {
    let dt: DateTime<Utc> = time.into();
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for ctrl-c");
    }
}
