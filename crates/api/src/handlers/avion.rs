//! Handlers for the avion resource.

use avion_db::models::avion::{AvionId, CreateAvion, EditAvion, INVALID_ID};
use avion_db::repositories::AvionRepo;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::AppResult;
use crate::extract::Validated;
use crate::response::Envelope;
use crate::state::AppState;

const CREATED: &str = "Avión fue creado de manera exitosa";
const UPDATED: &str = "Avión fue actualizado de manera exitosa";
const DELETED: &str = "Avión fue eliminado de manera exitosa";
const UPDATE_NOT_FOUND: &str = "ID del avión es inválido";

/// POST /create
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateAvion>,
) -> AppResult<Envelope> {
    let id = AvionRepo::create(&state.pool, &input).await?;
    tracing::info!(avion_id = id, airline_id = input.airline_id, "Avion created");

    Ok(Envelope::success(StatusCode::CREATED)
        .message(CREATED)
        .avion_id(id))
}

/// GET /aviones
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope> {
    let aviones = AvionRepo::list(&state.pool).await?;
    Ok(Envelope::success(StatusCode::OK).aviones(aviones))
}

/// GET /avion/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Validated(AvionId(id)): Validated<AvionId>,
) -> AppResult<Envelope> {
    let envelope = match AvionRepo::find_by_id(&state.pool, id).await? {
        Some(avion) => Envelope::success(StatusCode::OK).avion(avion),
        None => Envelope::failure(StatusCode::NOT_FOUND).message(INVALID_ID),
    };
    Ok(envelope)
}

/// PUT /edit/{id}
pub async fn update(
    State(state): State<AppState>,
    Validated(input): Validated<EditAvion>,
) -> AppResult<Envelope> {
    let AvionId(id) = input.id;
    if input.changes.is_empty() {
        tracing::debug!(avion_id = id, "Update without fields, rewriting stored values");
    }

    match AvionRepo::update(&state.pool, id, input.changes).await? {
        Some(_) => {
            tracing::info!(avion_id = id, "Avion updated");
            Ok(Envelope::success(StatusCode::OK).message(UPDATED))
        }
        None => Ok(keyed_not_found(&state, UPDATE_NOT_FOUND)),
    }
}

/// DELETE /delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Validated(AvionId(id)): Validated<AvionId>,
) -> AppResult<Envelope> {
    if AvionRepo::delete(&state.pool, id).await? {
        tracing::info!(avion_id = id, "Avion deleted");
        Ok(Envelope::success(StatusCode::OK).message(DELETED))
    } else {
        Ok(keyed_not_found(&state, INVALID_ID))
    }
}

/// Not-found answer of update and delete.
///
/// Sent as HTTP 200 with `status: 404` in the body unless strict status
/// codes are configured.
fn keyed_not_found(state: &AppState, message: &'static str) -> Envelope {
    let envelope = Envelope::failure(StatusCode::NOT_FOUND).message(message);
    if state.config.strict_status_codes {
        envelope
    } else {
        envelope.transport(StatusCode::OK)
    }
}
