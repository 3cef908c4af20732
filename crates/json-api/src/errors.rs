//! Error tokens and the catcher that renders them.

use salvo::{
    catcher::Catcher,
    http::{ResBody, StatusCode, StatusError},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Malformed method, id or body.
pub(crate) const INVALID_REQUEST: &str = "InvalidRequest";

/// The patch named no fields.
pub(crate) const NO_FIELDS_TO_UPDATE: &str = "NoFieldsToUpdate";

pub(crate) const PRODUCT_NOT_FOUND: &str = "ProductNotFound";

/// No route serves the path.
pub(crate) const NOT_FOUND: &str = "NotFound";

pub(crate) const INTERNAL_SERVER_ERROR: &str = "InternalServerError";

const TOKENS: [&str; 5] = [
    INVALID_REQUEST,
    NO_FIELDS_TO_UPDATE,
    PRODUCT_NOT_FOUND,
    NOT_FOUND,
    INTERNAL_SERVER_ERROR,
];

pub(crate) fn invalid_request() -> StatusError {
    StatusError::bad_request().brief(INVALID_REQUEST)
}

pub(crate) fn internal_server_error() -> StatusError {
    StatusError::internal_server_error().brief(INTERNAL_SERVER_ERROR)
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Machine-readable error token
    pub error: String,
}

/// Pick the token for an error response.
///
/// A brief that is already a token is kept. Anything else, such as an
/// extractor's parse message, falls back to the token for the status class.
fn token_for(status: StatusCode, brief: Option<&str>) -> &'static str {
    if let Some(token) = brief.and_then(|brief| TOKENS.into_iter().find(|token| *token == brief)) {
        return token;
    }

    match status {
        StatusCode::NOT_FOUND => NOT_FOUND,
        status if status.is_server_error() => INTERNAL_SERVER_ERROR,
        _ => INVALID_REQUEST,
    }
}

/// Replace error bodies with `{"error": "<token>"}`.
#[handler]
pub(crate) async fn render_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let token = match res.take_body() {
        ResBody::Error(error) => token_for(status, Some(error.brief.as_str())),
        _ => token_for(status, None),
    };

    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: token.to_owned(),
    }));

    ctrl.skip_rest();
}

/// The catcher every service is built with.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error)
}
