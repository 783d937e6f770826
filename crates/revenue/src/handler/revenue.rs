use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::revenue::service::DynRevenueStatsService,
    domain::{
        requests::revenue::{FindRevenue, FindRevenueByDate},
        responses::{ApiResponse, RevenueResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/revenue/total",
    tag = "Revenue",
    params(FindRevenue),
    responses(
        (status = 200, description = "All-time revenue from paid orders", body = ApiResponse<RevenueResponse>),
        (status = 400, description = "Missing or blank store id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_total_revenue(
    Extension(service): Extension<DynRevenueStatsService>,
    Query(params): Query<FindRevenue>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.total_revenue(&params.store_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/revenue/by-date",
    tag = "Revenue",
    params(FindRevenueByDate),
    responses(
        (status = 200, description = "Revenue for one calendar date; null data for an invalid date", body = ApiResponse<Option<RevenueResponse>>),
        (status = 400, description = "Missing or blank store id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_revenue_by_date(
    Extension(service): Extension<DynRevenueStatsService>,
    Query(params): Query<FindRevenueByDate>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.revenue_on_date(&params.store_id, &params.date).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/revenue/current-month",
    tag = "Revenue",
    params(FindRevenue),
    responses(
        (status = 200, description = "Revenue for the current calendar month", body = ApiResponse<RevenueResponse>),
        (status = 400, description = "Missing or blank store id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_current_month_revenue(
    Extension(service): Extension<DynRevenueStatsService>,
    Query(params): Query<FindRevenue>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.current_month_revenue(&params.store_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/revenue/previous-month",
    tag = "Revenue",
    params(FindRevenue),
    responses(
        (status = 200, description = "Revenue for the previous calendar month", body = ApiResponse<RevenueResponse>),
        (status = 400, description = "Missing or blank store id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_previous_month_revenue(
    Extension(service): Extension<DynRevenueStatsService>,
    Query(params): Query<FindRevenue>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.previous_month_revenue(&params.store_id).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn revenue_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/revenue/total", get(get_total_revenue))
        .route("/api/revenue/by-date", get(get_revenue_by_date))
        .route("/api/revenue/current-month", get(get_current_month_revenue))
        .route(
            "/api/revenue/previous-month",
            get(get_previous_month_revenue),
        )
        .layer(Extension(app_state.di_container.revenue_stats.clone()))
}
