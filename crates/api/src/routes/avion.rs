//! Route definitions for the avion resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::avion;
use crate::state::AppState;

/// Routes mounted at the configured API mount path.
///
/// ```text
/// POST   /create        -> create
/// GET    /aviones       -> list
/// GET    /avion/{id}    -> get_by_id
/// PUT    /edit/{id}     -> update
/// DELETE /delete/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(avion::create))
        .route("/aviones", get(avion::list))
        .route("/avion/{id}", get(avion::get_by_id))
        .route("/edit/{id}", put(avion::update))
        .route("/delete/{id}", delete(avion::delete))
}
