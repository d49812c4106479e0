//! Failures shared by every entity store port.

use tracing::error;

use crate::domain::{EntityKind, Error};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum StoreError {
        /// No record with the given identity exists.
        NotFound { entity: EntityKind, id: i32 } => "{entity} {id} not found",
        /// The write would duplicate a unique column.
        UniqueViolation { message: String } => "{message}",
        /// The write references a record that does not exist.
        ForeignKeyViolation { message: String } => "{message}",
        /// The store connection could not be established.
        Connection { message: String } => "store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "store query failed: {message}",
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        let message = value.to_string();
        match value {
            StoreError::NotFound { .. } => Self::not_found(message),
            StoreError::UniqueViolation { .. } => Self::conflict(message),
            StoreError::ForeignKeyViolation { .. } => Self::invalid_request(message),
            StoreError::Connection { .. } => {
                error!(error = %message, "entity store unavailable");
                Self::service_unavailable("store unavailable")
            }
            StoreError::Query { .. } => {
                error!(error = %message, "entity store query failed");
                Self::internal(message)
            }
        }
    }
}
