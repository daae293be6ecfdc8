//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AverageResponse, RatingDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::tour_rating::create_rating,
        super::tour_rating::list_ratings,
        super::tour_rating::get_average,
        super::tour_rating::replace_rating,
        super::tour_rating::patch_rating,
        super::tour_rating::delete_rating,
    ),
    info(
        title = "Explore California API",
        version = "0.1.0",
        description = "Customer ratings of Explore California tours.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Rating", description = "Rating - Customer scores and comments per tour"),
    ),
    components(
        schemas(
            RatingDto,
            AverageResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_rating_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/tours/{tour_id}/ratings"));
        assert!(paths.contains_key("/tours/{tour_id}/ratings/average"));
        assert!(paths.contains_key("/tours/{tour_id}/ratings/{customer_id}"));
    }
}
