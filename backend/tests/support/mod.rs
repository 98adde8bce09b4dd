//! Shared helpers for integration suites that need PostgreSQL.
//!
//! Each suite under `backend/tests/` compiles as its own crate; this module
//! keeps cluster bootstrap and database provisioning in one place.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::{fresh_database, test_cluster};

/// Render a `postgres` error with its SQLSTATE and message.
///
/// The `Display` form of `postgres::Error` often reads only `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
