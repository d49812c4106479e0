//! Shared Diesel error mapping for the entity repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StoreError;

use super::pool::PoolError;

/// Map pool failures onto [`StoreError::Connection`].
pub(super) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

/// Map Diesel failures onto store errors.
///
/// Constraint violations keep the database's detail line (for example
/// `Key (email)=(x) already exists.`) since it names the offending column.
/// Everything else is reduced to a fixed message; the original is logged at
/// debug level.
pub(super) fn map_diesel_error(error: DieselError) -> StoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StoreError::unique_violation(info.details().unwrap_or(info.message()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreError::foreign_key_violation(info.details().unwrap_or(info.message()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => StoreError::query("database query error"),
        _ => StoreError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn unique_violations_keep_the_database_message() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint \"users_email_key\"",
        ));

        assert_eq!(
            error,
            StoreError::unique_violation(
                "duplicate key value violates unique constraint \"users_email_key\""
            )
        );
    }

    #[rstest]
    fn foreign_key_violations_are_classified() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            "insert violates foreign key constraint",
        ));

        assert!(matches!(error, StoreError::ForeignKeyViolation { .. }));
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::ClosedConnection, "gone"), StoreError::connection("database connection error"))]
    #[case(database_error(DatabaseErrorKind::SerializationFailure, "retry"), StoreError::query("database error"))]
    #[case(DieselError::NotFound, StoreError::query("database error"))]
    fn other_failures_are_redacted(#[case] input: DieselError, #[case] expected: StoreError) {
        assert_eq!(map_diesel_error(input), expected);
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, StoreError::connection("timed out"));
    }
}
