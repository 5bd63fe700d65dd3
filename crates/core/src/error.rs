use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Variants map one-to-one onto HTTP statuses at the API boundary
/// (400 / 401 / 404 / 500). Messages are user-facing and Dutch, matching
/// what the admin panel displays; the `id` on [`CoreError::NotFound`] is
/// kept for server-side logging only.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} niet gevonden")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
