use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use services::ApiContext;
use shared::domain::{SortField, SortOrder};
use storage::Storage;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod view;

use app_state::AppState;
use config::load_settings;
use view::{render_persons_index, PersonsPage, INDEX_ROUTE};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonsIndexQuery {
    search_by: Option<String>,
    search_string: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let storage = if settings.seed_sample_data {
        Storage::with_sample_data()
    } else {
        Storage::new()
    };
    let state = AppState {
        api: ApiContext::new(storage),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, seed_sample_data = settings.seed_sample_data, "server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(persons_index))
        .route(INDEX_ROUTE, get(persons_index))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn persons_index(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PersonsIndexQuery>,
) -> Html<String> {
    let search_by = q.search_by.unwrap_or_default();
    let search_string = q.search_string.unwrap_or_default();

    let mut persons = state
        .api
        .persons
        .get_filtered_persons(&search_by, &search_string);

    let sort_by = q.sort_by.unwrap_or_default();
    let order = q
        .sort_order
        .as_deref()
        .and_then(SortOrder::parse)
        .unwrap_or_default();
    if !sort_by.is_empty() {
        persons = state.api.persons.get_sorted_persons(persons, &sort_by, order);
    }

    Html(render_persons_index(&PersonsPage {
        persons: &persons,
        search_by: &search_by,
        search_string: &search_string,
        sort: SortField::parse(&sort_by).map(|field| (field, order)),
    }))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
