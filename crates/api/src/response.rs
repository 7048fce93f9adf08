//! The response envelope shared by every avion endpoint.
//!
//! Bodies always carry `ok` (0 or 1) and `status`; the remaining members are
//! omitted unless set. The HTTP status normally equals `status`, but
//! [`Envelope::transport`] can send it under a different one, which is how
//! update and delete report a missing record in compatibility mode.

use std::borrow::Cow;

use avion_core::types::DbId;
use avion_core::validation::FieldErrors;
use avion_db::models::avion::Avion;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: u8,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avion: Option<Avion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aviones: Option<Vec<Avion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avion_id: Option<DbId>,
    #[serde(skip)]
    transport: StatusCode,
}

impl Envelope {
    fn new(ok: u8, status: StatusCode) -> Self {
        Self {
            ok,
            status: status.as_u16(),
            message: None,
            errors: None,
            avion: None,
            aviones: None,
            avion_id: None,
            transport: status,
        }
    }

    /// `ok: 1` envelope sent with `status`.
    pub fn success(status: StatusCode) -> Self {
        Self::new(1, status)
    }

    /// `ok: 0` envelope sent with `status`.
    pub fn failure(status: StatusCode) -> Self {
        Self::new(0, status)
    }

    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn avion(mut self, avion: Avion) -> Self {
        self.avion = Some(avion);
        self
    }

    pub fn aviones(mut self, aviones: Vec<Avion>) -> Self {
        self.aviones = Some(aviones);
        self
    }

    pub fn avion_id(mut self, id: DbId) -> Self {
        self.avion_id = Some(id);
        self
    }

    /// Send under `status` while the body keeps its own `status` member.
    pub fn transport(mut self, status: StatusCode) -> Self {
        self.transport = status;
        self
    }

    /// HTTP status the envelope is sent with.
    pub fn transport_status(&self) -> StatusCode {
        self.transport
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.transport, Json(self)).into_response()
    }
}
