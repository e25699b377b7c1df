use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use skyfare_core::{
    compose_view, AirportRecord, Bounds, CoreError, FilterSpec, FlightStats, SortMode, View,
    ViewMode, ViewRequest,
};

use crate::error::AppError;
use crate::state::{AppState, DataState};

// ============================================================================
// Request Types
// ============================================================================

/// Flat query-string form of a view request.
///
/// Bounds left out default to the observed range of the loaded data.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
    pub sort: Option<String>,
    pub visible: Option<usize>,
    #[serde(default)]
    pub q: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_days: Option<i32>,
    pub max_days: Option<i32>,
    pub outbound_part_of_day: Option<String>,
    pub return_part_of_day: Option<String>,
    pub outbound_weekday: Option<String>,
    pub return_weekday: Option<String>,
    #[serde(default)]
    pub direct_only: bool,
    pub continent: Option<String>,
}

impl ViewQuery {
    pub fn into_request(self, stats: &FlightStats) -> Result<ViewRequest, CoreError> {
        let defaults = FilterSpec::from_stats(stats);
        let mode = match self.view.as_deref() {
            None | Some("") => ViewMode::default(),
            Some(name) => name.parse()?,
        };
        let sort = match self.sort.as_deref() {
            None | Some("") => SortMode::default(),
            Some(name) => name.parse()?,
        };

        Ok(ViewRequest {
            mode,
            sort,
            visible: self.visible,
            continent: self.continent,
            filter: FilterSpec {
                search: self.q,
                country: self.country,
                city: self.city,
                price: Bounds::new(
                    self.min_price.unwrap_or(defaults.price.min),
                    self.max_price.unwrap_or(defaults.price.max),
                ),
                days: Bounds::new(
                    self.min_days.unwrap_or(defaults.days.min),
                    self.max_days.unwrap_or(defaults.days.max),
                ),
                outbound_part_of_day: self.outbound_part_of_day,
                return_part_of_day: self.return_part_of_day,
                outbound_weekday: self.outbound_weekday,
                return_weekday: self.return_weekday,
                direct_only: self.direct_only,
            },
        })
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StatsResponse<'a> {
    #[serde(flatten)]
    pub stats: &'a FlightStats,
    /// From the airport table, not only the destinations with flights
    pub continents: Vec<String>,
    pub regions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse<'a> {
    /// Whether the request narrows anything compared to the defaults
    pub filters_active: bool,
    #[serde(flatten)]
    pub view: View<'a>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/v1/stats", get(stats))
        .route("/v1/view", get(view))
        .route("/v1/airports/{code}", get(airport))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = match state.data {
        DataState::Ready(_) => "ok",
        DataState::Failed(_) => "unavailable",
    };
    Json(json!({ "status": status }))
}

/// GET /v1/stats
/// Facets for the filter controls
async fn stats(State(state): State<AppState>) -> Result<Response, AppError> {
    let catalog = state.catalog()?;
    let body = StatsResponse {
        stats: catalog.stats(),
        continents: catalog.airports().continents(),
        regions: catalog.airports().regions(),
    };
    Ok(Json(body).into_response())
}

/// GET /v1/view
/// List, grouped or map view of the filtered flights
async fn view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Response, AppError> {
    let catalog = state.catalog()?;
    let request = query.into_request(catalog.stats())?;
    let filters_active = request.filter.is_active(catalog.stats());

    let view = compose_view(catalog, &request, state.translator.as_ref(), &state.settings);
    tracing::debug!(
        mode = ?request.mode,
        sort = %request.sort,
        filters_active,
        empty = view.is_empty(),
        "Composed view"
    );

    Ok(Json(ViewResponse { filters_active, view }).into_response())
}

/// GET /v1/airports/{code}
async fn airport(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AirportRecord>, AppError> {
    let catalog = state.catalog()?;
    catalog
        .airports()
        .get(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Airport {} not found", code)))
}
