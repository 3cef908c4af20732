//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use shelf_app::domain::products::ProductsServiceError;

use crate::errors::{self, NO_FIELDS_TO_UPDATE, PRODUCT_NOT_FOUND};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief(PRODUCT_NOT_FOUND),
        ProductsServiceError::EmptyPatch => StatusError::bad_request().brief(NO_FIELDS_TO_UPDATE),
        ProductsServiceError::RefetchFailed(source) => {
            error!("failed to read back updated product: {source}");

            errors::internal_server_error()
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            errors::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use shelf_app::domain::products::StorageError;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let status = into_status_error(ProductsServiceError::NotFound);

        assert_eq!(status.code, StatusCode::NOT_FOUND);
        assert_eq!(status.brief, PRODUCT_NOT_FOUND);
    }

    #[test]
    fn empty_patch_maps_to_400() {
        let status = into_status_error(ProductsServiceError::EmptyPatch);

        assert_eq!(status.code, StatusCode::BAD_REQUEST);
        assert_eq!(status.brief, NO_FIELDS_TO_UPDATE);
    }

    #[test]
    fn refetch_failure_is_a_server_error() {
        let status =
            into_status_error(ProductsServiceError::RefetchFailed(StorageError::RowNotFound));

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
