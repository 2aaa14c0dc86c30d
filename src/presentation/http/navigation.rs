use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::application::use_cases::navigation::find_page::FindPage;
use crate::application::use_cases::navigation::next_page::NextPage;
use crate::application::use_cases::navigation::prev_page::PrevPage;
use crate::application::use_cases::navigation::random_page::RandomPage;
use crate::bootstrap::app_context::AppContext;
use crate::domain::documents::kdoc::DocumentEntry;
use crate::presentation::http::error::{ApiError, ErrorResponse, api_error};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Filename or site path of the page being viewed (URL-encoded).
    pub current: Option<String>,
    /// `"true"` restricts navigation to draft pages.
    pub draft_only: Option<String>,
}

impl NavigationQuery {
    /// Clients send `encodeURIComponent(location.pathname)`, and the pathname
    /// itself is already percent-encoded, so one more decode is needed.
    pub fn current_filename(&self) -> String {
        let raw = self.current.as_deref().unwrap_or_default();
        let decoded = urlencoding::decode(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        match decoded.strip_prefix('/') {
            Some(rest) => rest.to_string(),
            None => decoded,
        }
    }

    pub fn draft_only(&self) -> bool {
        self.draft_only.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextResponse {
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kdoc_number: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrevResponse {
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kdoc_number: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomResponse {
    pub random: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kdoc_number: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageLookupResponse {
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kdoc_number: Option<u64>,
}

fn split(entry: Option<DocumentEntry>) -> (Option<String>, Option<u64>) {
    match entry {
        Some(e) => (Some(e.href()), Some(e.id)),
        None => (None, None),
    }
}

#[utoipa::path(get, path = "/api/next", tag = "Navigation",
    params(NavigationQuery),
    responses(
        (status = 200, body = NextResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn next_page(
    State(ctx): State<AppContext>,
    Query(q): Query<NavigationQuery>,
) -> Result<Json<NextResponse>, ApiError> {
    let current = q.current_filename();
    let corpus = ctx.corpus();
    let uc = NextPage {
        corpus: corpus.as_ref(),
    };
    let entry = uc.execute(&current, q.draft_only()).await.map_err(|err| {
        error!(current = %current, error = ?err, "navigation_next_failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get next page")
    })?;
    let (next, kdoc_number) = split(entry);
    Ok(Json(NextResponse { next, kdoc_number }))
}

#[utoipa::path(get, path = "/api/prev", tag = "Navigation",
    params(NavigationQuery),
    responses(
        (status = 200, body = PrevResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn prev_page(
    State(ctx): State<AppContext>,
    Query(q): Query<NavigationQuery>,
) -> Result<Json<PrevResponse>, ApiError> {
    let current = q.current_filename();
    let corpus = ctx.corpus();
    let uc = PrevPage {
        corpus: corpus.as_ref(),
    };
    let entry = uc.execute(&current, q.draft_only()).await.map_err(|err| {
        error!(current = %current, error = ?err, "navigation_prev_failed");
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to get previous page",
        )
    })?;
    let (prev, kdoc_number) = split(entry);
    Ok(Json(PrevResponse { prev, kdoc_number }))
}

#[utoipa::path(get, path = "/api/random", tag = "Navigation",
    responses(
        (status = 200, body = RandomResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn random_page(
    State(ctx): State<AppContext>,
) -> Result<Json<RandomResponse>, ApiError> {
    let corpus = ctx.corpus();
    let uc = RandomPage {
        corpus: corpus.as_ref(),
    };
    let entry = uc.execute().await.map_err(|err| {
        error!(error = ?err, "navigation_random_failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get random page")
    })?;
    let (random, kdoc_number) = split(entry);
    Ok(Json(RandomResponse {
        random,
        kdoc_number,
    }))
}

#[utoipa::path(get, path = "/api/kdoc/{number}", tag = "Navigation",
    params(("number" = u64, Path, description = "KDOC number")),
    responses(
        (status = 200, body = PageLookupResponse),
        (status = 500, body = ErrorResponse)
    ))]
pub async fn find_page(
    State(ctx): State<AppContext>,
    Path(number): Path<u64>,
) -> Result<Json<PageLookupResponse>, ApiError> {
    let corpus = ctx.corpus();
    let uc = FindPage {
        corpus: corpus.as_ref(),
    };
    let entry = uc.execute(number).await.map_err(|err| {
        error!(number, error = ?err, "navigation_lookup_failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get page")
    })?;
    let (path, kdoc_number) = split(entry);
    Ok(Json(PageLookupResponse { path, kdoc_number }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/next", get(next_page))
        .route("/prev", get(prev_page))
        .route("/random", get(random_page))
        .route("/kdoc/:number", get(find_page))
        .with_state(ctx)
}
