//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shelf_app::domain::products::{
    ProductsServiceError, data::ProductPatch, records::ProductId,
};

use crate::{
    errors,
    extensions::*,
    observability::{UpdateOutcome, observe_product_update},
    products::{errors::into_status_error, get::ProductEnvelope},
    state::State,
};

/// Update Product Request
///
/// Omitted fields are left unchanged. Empty strings and a zero price are
/// written as given.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

/// Decode the body as JSON whatever content type the client declared.
async fn read_patch(req: &mut Request) -> Result<ProductPatch, StatusError> {
    let payload = req.payload().await.map_err(|error| {
        tracing::debug!("failed to read update body: {error}");

        errors::invalid_request()
    })?;

    serde_json::from_slice::<UpdateProductRequest>(payload)
        .map(ProductPatch::from)
        .map_err(|error| {
            tracing::debug!("malformed update body: {error}");

            errors::invalid_request()
        })
}

fn outcome_of(result: &Result<impl Sized, ProductsServiceError>) -> UpdateOutcome {
    match result {
        Ok(_) => UpdateOutcome::Updated,
        Err(ProductsServiceError::NotFound) => UpdateOutcome::NotFound,
        Err(ProductsServiceError::EmptyPatch) => UpdateOutcome::Rejected,
        Err(ProductsServiceError::RefetchFailed(_) | ProductsServiceError::Sql(_)) => {
            UpdateOutcome::Failed
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body = UpdateProductRequest,
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(
        product_id = tracing::field::Empty,
        fields_supplied = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());
    let patch = read_patch(req).await?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("fields_supplied", patch.len());

    let result = state.products.update_product(product, patch).await;

    observe_product_update(outcome_of(&result));

    let updated = result.map_err(into_status_error)?;

    tracing::info!(product_id = %product, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}
