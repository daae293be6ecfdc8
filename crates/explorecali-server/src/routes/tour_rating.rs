//! Tour Rating Routes - Customer ratings of a tour
//!
//! HTTP handlers that delegate to TourRatingService for business logic.
//! Every route is scoped by the tour ID in the path.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use super::{error_response, ApiError};
use crate::models::{AverageResponse, PageQuery, RatingDto};
use crate::AppState;

/// Create a rating
#[utoipa::path(
    post,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour ID")),
    request_body = RatingDto,
    responses(
        (status = 201, description = "Rating created"),
        (status = 400, description = "Invalid rating"),
        (status = 404, description = "Tour not found"),
        (status = 409, description = "Customer already rated this tour"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn create_rating(
    State(state): State<AppState>,
    Path(tour_id): Path<i32>,
    Json(payload): Json<RatingDto>,
) -> Result<StatusCode, ApiError> {
    payload.validate().map_err(error_response)?;
    let score = payload.required_score().map_err(error_response)?;

    state
        .tour_rating_service
        .create(tour_id, payload.customer_id, score, payload.comment)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::CREATED)
}

/// List one page of a tour's ratings
///
/// GET /tours/{tour_id}/ratings?page=1&size=3&sort=score,desc
///
/// Only one `sort` parameter is accepted; repeating it is a 400.
#[utoipa::path(
    get,
    path = "/tours/{tour_id}/ratings",
    params(
        ("tour_id" = i32, Path, description = "Tour ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Ratings on the requested page", body = Vec<RatingDto>),
        (status = 400, description = "Invalid or repeated sort"),
        (status = 404, description = "Tour not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(tour_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<RatingDto>>, ApiError> {
    let page = query
        .to_page_request(&state.config.page)
        .map_err(error_response)?;

    let ratings = state
        .tour_rating_service
        .list_by_tour(tour_id, &page)
        .await
        .map_err(error_response)?;

    Ok(Json(ratings.into_iter().map(RatingDto::from).collect()))
}

/// Average score of a tour
#[utoipa::path(
    get,
    path = "/tours/{tour_id}/ratings/average",
    params(("tour_id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Average score, null without ratings", body = AverageResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn get_average(
    State(state): State<AppState>,
    Path(tour_id): Path<i32>,
) -> Result<Json<AverageResponse>, ApiError> {
    let average = state
        .tour_rating_service
        .average_score(tour_id)
        .await
        .map_err(error_response)?;

    Ok(Json(AverageResponse { average }))
}

/// Update a rating, keeping fields sent as null
#[utoipa::path(
    put,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour ID")),
    request_body = RatingDto,
    responses(
        (status = 200, description = "Rating updated", body = RatingDto),
        (status = 400, description = "Invalid rating"),
        (status = 404, description = "Rating not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn replace_rating(
    State(state): State<AppState>,
    Path(tour_id): Path<i32>,
    Json(payload): Json<RatingDto>,
) -> Result<Json<RatingDto>, ApiError> {
    payload.validate().map_err(error_response)?;

    let rating = state
        .tour_rating_service
        .replace_full(tour_id, payload.customer_id, payload.score, payload.comment)
        .await
        .map_err(error_response)?;

    Ok(Json(rating.into()))
}

/// Update a rating, overwriting every field including nulls
#[utoipa::path(
    patch,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour ID")),
    request_body = RatingDto,
    responses(
        (status = 200, description = "Rating updated", body = RatingDto),
        (status = 400, description = "Invalid rating"),
        (status = 404, description = "Rating not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn patch_rating(
    State(state): State<AppState>,
    Path(tour_id): Path<i32>,
    Json(payload): Json<RatingDto>,
) -> Result<Json<RatingDto>, ApiError> {
    payload.validate().map_err(error_response)?;

    let rating = state
        .tour_rating_service
        .update_partial(tour_id, payload.customer_id, payload.score, payload.comment)
        .await
        .map_err(error_response)?;

    Ok(Json(rating.into()))
}

/// Delete a customer's rating of a tour
#[utoipa::path(
    delete,
    path = "/tours/{tour_id}/ratings/{customer_id}",
    params(
        ("tour_id" = i32, Path, description = "Tour ID"),
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Rating deleted"),
        (status = 404, description = "Rating not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rating"
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    Path((tour_id, customer_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    state
        .tour_rating_service
        .delete(tour_id, customer_id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::OK)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tours/:tour_id/ratings",
            get(list_ratings)
                .post(create_rating)
                .put(replace_rating)
                .patch(patch_rating),
        )
        .route("/tours/:tour_id/ratings/average", get(get_average))
        .route("/tours/:tour_id/ratings/:customer_id", delete(delete_rating))
}
