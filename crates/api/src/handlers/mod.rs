//! Request handlers.
//!
//! Handlers receive already validated input through [`crate::extract::Validated`],
//! delegate to the repository in `avion_db`, and answer with an
//! [`crate::response::Envelope`]. Store errors propagate as [`crate::error::AppError`].

pub mod avion;
