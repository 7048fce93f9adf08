//! Domain building blocks shared by the database and HTTP layers.
//!
//! Holds the primitive type aliases, the domain error type, and the
//! declarative request validation engine. Nothing in here touches the
//! database or the network.

pub mod error;
pub mod types;
pub mod validation;
