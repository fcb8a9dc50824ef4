/// Errors reported by geometric queries.
///
/// Degenerate inputs (zero-length segments, flat triangles, empty point sets, ...) are
/// never errors: every query documents the result it falls back to. The only
/// recoverable error is a query that is declared but deliberately not implemented.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum QueryError {
    /// The query is declared for this pair of shapes but has no implementation.
    ///
    /// This is the case of every operation involving an
    /// [`Ellipse`](crate::shape::Ellipse).
    #[error("query not implemented: {operation}")]
    NotImplemented {
        /// A short name of the missing operation.
        operation: &'static str,
    },
}

impl QueryError {
    pub(crate) fn not_implemented(operation: &'static str) -> Self {
        QueryError::NotImplemented { operation }
    }
}
