//! Query Builder Core Library
//!
//! Schema decoding, type normalization and settings assembly for the
//! query builder backend.

pub mod decode;
pub mod error;
pub mod model;
pub mod provider;
pub mod schema;
pub mod settings;
pub mod types;

pub use error::{QbError, QbResult};
pub use model::{Envelope, Property, TypeEntity};
pub use provider::{AuthProvider, SpaceProvider, TypeProvider};
