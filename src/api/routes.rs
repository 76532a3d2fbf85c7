use crate::api::api_error::APIError;
use crate::api::server::AppState;
use crate::autoconfig;
use crate::config::SharedConfig;
use crate::srv::DynSrvLookup;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Build the autoconfig [`Router`] for the configured domain.
pub fn new(config: SharedConfig, srv_lookup: DynSrvLookup) -> Router {
    let timeout = config.http_timeout;
    Router::new()
        .route("/", get(serve_autoconfig))
        .route("/*path", get(serve_autoconfig))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(AppState { config, srv_lookup })
}

async fn serve_autoconfig(State(state): State<AppState>) -> Result<impl IntoResponse, APIError> {
    let domain = &state.config.domain;
    let document = match autoconfig::build_document(state.srv_lookup.as_ref(), domain).await {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!("autoconfig for \"{domain}\" failed: {err}");
            return Err(err.into());
        }
    };
    let body = autoconfig::render(&document)?;
    tracing::debug!("served autoconfig for \"{domain}\"");
    Ok(([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body))
}
