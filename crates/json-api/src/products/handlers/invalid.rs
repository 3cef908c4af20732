//! Fallback for methods a product route does not serve.

use salvo::prelude::*;

use crate::errors;

/// Rejects the request as malformed; product routes answer unknown methods
/// with 400 rather than 405.
#[handler]
pub(crate) async fn handler(req: &mut Request) -> StatusError {
    tracing::debug!(method = %req.method(), path = req.uri().path(), "unsupported method");

    errors::invalid_request()
}
