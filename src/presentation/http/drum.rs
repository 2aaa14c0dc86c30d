use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::use_cases::layout::compute_layout::{ComputeLayout, PlacedLayout};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, ErrorResponse, api_error};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LayoutQuery {
    /// Rendered height of the page content, in pixels.
    pub content_height: f64,
    /// Viewport height, in pixels.
    pub window_height: f64,
    /// Current scroll offset; when present each segment carries its tilted position.
    pub scroll_y: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SegmentPosition {
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentItem {
    pub index: usize,
    pub top_offset: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SegmentPosition>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub num_segments: usize,
    pub spacer_height: f64,
    pub segments: Vec<SegmentItem>,
}

impl From<PlacedLayout> for LayoutResponse {
    fn from(placed: PlacedLayout) -> Self {
        let mut positions = placed.positions.map(|p| p.into_iter());
        let segments = placed
            .layout
            .segments
            .into_iter()
            .map(|s| SegmentItem {
                index: s.index,
                top_offset: s.top_offset,
                position: positions
                    .as_mut()
                    .and_then(|it| it.next())
                    .map(|p| SegmentPosition { y: p.y, z: p.z }),
            })
            .collect();
        LayoutResponse {
            num_segments: placed.layout.num_segments,
            spacer_height: placed.layout.spacer_height,
            segments,
        }
    }
}

#[utoipa::path(get, path = "/api/drum/layout", tag = "Drum scroll",
    params(LayoutQuery),
    responses(
        (status = 200, body = LayoutResponse),
        (status = 400, body = ErrorResponse)
    ))]
pub async fn drum_layout(
    State(ctx): State<AppContext>,
    Query(q): Query<LayoutQuery>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let uc = ComputeLayout {
        geometry: &ctx.cfg.drum,
    };
    let placed = uc
        .execute(q.content_height, q.window_height, q.scroll_y)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, err.to_string()))?;
    Ok(Json(placed.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/drum/layout", get(drum_layout))
        .with_state(ctx)
}
