//! Request validation extractor.
//!
//! [`Validated`] gathers the route's path parameters and the JSON body into
//! one object, runs the target type's declared rules over it, and rejects
//! with a 422 envelope listing every failing field before the handler runs.

use avion_core::validation::{validate, Schema};
use axum::body::Bytes;
use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use serde_json::{Map, Value};

use crate::error::AppError;

const BODY_NOT_OBJECT: &str = "El cuerpo de la solicitud debe ser un objeto JSON";

/// Request input validated against `T`'s rules.
///
/// Path parameters override body members of the same name, so a body can
/// never smuggle in a different `id` than the one in the URL. A path
/// parameter that cannot be decoded rejects the request with 400.
///
/// # Example
///
/// ```ignore
/// async fn handler(Validated(AvionId(id)): Validated<AvionId>) {
///     // id is a parsed integer
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let params = match RawPathParams::from_request_parts(&mut parts, state).await {
            Ok(params) => Some(params),
            // Routes without parameters have nothing to contribute here.
            Err(RawPathParamsRejection::MissingPathParams(_)) => None,
            Err(e) => return Err(AppError::BadRequest(e.body_text())),
        };

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut data = parse_body(&bytes)?;
        if let Some(params) = params {
            for (key, value) in params.iter() {
                data.insert(key.to_string(), Value::String(value.to_string()));
            }
        }

        Ok(Self(validate::<T>(&data)?))
    }
}

/// Parse the body as a JSON object. An empty body is an empty object.
fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest(BODY_NOT_OBJECT.into())),
        Err(e) => Err(AppError::BadRequest(format!("JSON inválido: {e}"))),
    }
}
