pub mod avion;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted by the app router under the
/// configured path.
///
/// ```text
/// /create                 create (POST)
/// /aviones                list (GET)
/// /avion/{id}             get by id (GET)
/// /edit/{id}              partial update (PUT)
/// /delete/{id}            delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(avion::router())
}
