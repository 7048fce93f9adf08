//! Airplane entity model and DTOs.
//!
//! The request field names (`id_aerolinea`, `fabricante`, ...) double as the
//! column names and the JSON keys of the public API.

use avion_core::error::CoreError;
use avion_core::types::DbId;
use avion_core::validation::{Check, FieldRule, Fields, Schema};
use serde::Serialize;
use sqlx::FromRow;

pub const ID: &str = "id";
pub const AIRLINE_ID: &str = "id_aerolinea";
pub const MANUFACTURER: &str = "fabricante";
pub const AIRCRAFT_TYPE: &str = "tipo";
pub const CAPACITY: &str = "capacidad";

/// Maximum stored length of `fabricante`, in characters.
pub const MANUFACTURER_MAX_CHARS: u64 = 30;
/// Maximum stored length of `tipo`, in characters.
pub const AIRCRAFT_TYPE_MAX_CHARS: u64 = 15;

/// Message for a malformed or unknown record id.
pub const INVALID_ID: &str = "ID de avión inválido";

const CAPACITY_POSITIVE: &str = "La capacidad debe ser mayor a 0";
const MANUFACTURER_TOO_LONG: &str = "El fabricante no puede exceder 30 caracteres";
const AIRCRAFT_TYPE_TOO_LONG: &str = "El tipo no puede exceder 15 caracteres";

const ID_RULE: FieldRule = FieldRule::required(ID, INVALID_ID, &[Check::Integer(None)]);

/// Update rules: same constraints as create, every field optional.
const UPDATE_RULES: [FieldRule; 4] = [
    FieldRule::optional(
        AIRLINE_ID,
        "El ID de aerolínea debe ser numérico",
        &[Check::Trim, Check::Integer(None)],
    ),
    FieldRule::optional(
        MANUFACTURER,
        "El fabricante no puede estar vacío",
        &[
            Check::Trim,
            Check::NotEmpty(None),
            Check::Escape,
            Check::MaxChars(MANUFACTURER_MAX_CHARS, Some(MANUFACTURER_TOO_LONG)),
        ],
    ),
    FieldRule::optional(
        AIRCRAFT_TYPE,
        "El tipo no puede estar vacío",
        &[
            Check::Trim,
            Check::NotEmpty(None),
            Check::Escape,
            Check::MaxChars(AIRCRAFT_TYPE_MAX_CHARS, Some(AIRCRAFT_TYPE_TOO_LONG)),
        ],
    ),
    FieldRule::optional(
        CAPACITY,
        "La capacidad debe ser numérica",
        &[
            Check::Trim,
            Check::Integer(None),
            Check::GreaterThan(0, Some(CAPACITY_POSITIVE)),
        ],
    ),
];

/// An airplane row from the `avion` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Avion {
    #[sqlx(rename = "id_avion")]
    #[serde(rename = "id_avion")]
    pub id: DbId,
    #[sqlx(rename = "id_aerolinea")]
    #[serde(rename = "id_aerolinea")]
    pub airline_id: i64,
    #[sqlx(rename = "fabricante")]
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
    #[sqlx(rename = "tipo")]
    #[serde(rename = "tipo")]
    pub aircraft_type: String,
    #[sqlx(rename = "capacidad")]
    #[serde(rename = "capacidad")]
    pub capacity: i64,
}

/// DTO for creating a new airplane. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAvion {
    pub airline_id: i64,
    pub manufacturer: String,
    pub aircraft_type: String,
    pub capacity: i64,
}

impl Schema for CreateAvion {
    const RULES: &'static [FieldRule] = &[
        FieldRule::required(
            AIRLINE_ID,
            "El ID de aerolínea es requerido y debe ser numérico",
            &[Check::Trim, Check::NotEmpty(None), Check::Integer(None)],
        ),
        FieldRule::required(
            MANUFACTURER,
            "El fabricante es obligatorio",
            &[
                Check::Trim,
                Check::NotEmpty(None),
                Check::Escape,
                Check::MaxChars(MANUFACTURER_MAX_CHARS, Some(MANUFACTURER_TOO_LONG)),
            ],
        ),
        FieldRule::required(
            AIRCRAFT_TYPE,
            "El tipo es obligatorio",
            &[
                Check::Trim,
                Check::NotEmpty(None),
                Check::Escape,
                Check::MaxChars(AIRCRAFT_TYPE_MAX_CHARS, Some(AIRCRAFT_TYPE_TOO_LONG)),
            ],
        ),
        FieldRule::required(
            CAPACITY,
            "La capacidad es requerida y debe ser numérica",
            &[
                Check::Trim,
                Check::NotEmpty(None),
                Check::Integer(None),
                Check::GreaterThan(0, Some(CAPACITY_POSITIVE)),
            ],
        ),
    ];

    fn from_fields(mut fields: Fields) -> Result<Self, CoreError> {
        Ok(Self {
            airline_id: fields.int(AIRLINE_ID)?,
            manufacturer: fields.text(MANUFACTURER)?,
            aircraft_type: fields.text(AIRCRAFT_TYPE)?,
            capacity: fields.int(CAPACITY)?,
        })
    }
}

/// DTO for updating an existing airplane. All fields are optional.
///
/// `None` means the field was not sent; any sent value, including one equal
/// to the stored value, is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAvion {
    pub airline_id: Option<i64>,
    pub manufacturer: Option<String>,
    pub aircraft_type: Option<String>,
    pub capacity: Option<i64>,
}

impl UpdateAvion {
    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.airline_id.is_none()
            && self.manufacturer.is_none()
            && self.aircraft_type.is_none()
            && self.capacity.is_none()
    }

    /// Overlay the supplied fields on `existing`, producing the row to persist.
    pub fn apply_to(self, existing: Avion) -> Avion {
        Avion {
            id: existing.id,
            airline_id: self.airline_id.unwrap_or(existing.airline_id),
            manufacturer: self.manufacturer.unwrap_or(existing.manufacturer),
            aircraft_type: self.aircraft_type.unwrap_or(existing.aircraft_type),
            capacity: self.capacity.unwrap_or(existing.capacity),
        }
    }
}

/// The `{id}` path parameter of the keyed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvionId(pub DbId);

impl Schema for AvionId {
    const RULES: &'static [FieldRule] = &[ID_RULE];

    fn from_fields(mut fields: Fields) -> Result<Self, CoreError> {
        Ok(Self(fields.int(ID)?))
    }
}

/// Input of the update endpoint: the `{id}` path parameter plus the
/// optional body fields, validated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAvion {
    pub id: AvionId,
    pub changes: UpdateAvion,
}

impl Schema for EditAvion {
    const RULES: &'static [FieldRule] = &[
        ID_RULE,
        UPDATE_RULES[0],
        UPDATE_RULES[1],
        UPDATE_RULES[2],
        UPDATE_RULES[3],
    ];

    fn from_fields(mut fields: Fields) -> Result<Self, CoreError> {
        Ok(Self {
            id: AvionId(fields.int(ID)?),
            changes: UpdateAvion {
                airline_id: fields.optional_int(AIRLINE_ID)?,
                manufacturer: fields.optional_text(MANUFACTURER)?,
                aircraft_type: fields.optional_text(AIRCRAFT_TYPE)?,
                capacity: fields.optional_int(CAPACITY)?,
            },
        })
    }
}
