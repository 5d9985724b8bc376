//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, redirect_handler, shorten_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link routes.
///
/// # Endpoints
///
/// - `POST   /shorten` - Create a short link (generated or custom code)
/// - `GET    /{code}`  - Redirect to the original URL (307)
/// - `PATCH  /{code}`  - Replace the destination URL
/// - `DELETE /{code}`  - Delete the short link
pub fn link_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler)).route(
        "/{code}",
        get(redirect_handler)
            .patch(update_link_handler)
            .delete(delete_link_handler),
    )
}
