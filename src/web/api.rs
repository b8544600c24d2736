use axum::{Json, extract::State};

use crate::stats::{self, StatsResponse, TypesResponse};
use crate::web::AppState;

pub async fn donor_types(State(state): State<AppState>) -> Json<TypesResponse> {
    Json(stats::type_totals(state.pool_ref()).await)
}

pub async fn donation_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(stats::daily_stats(state.pool_ref()).await)
}
