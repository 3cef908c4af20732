//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use crate::errors;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_ignored| {
            tracing::error!(
                type_name = std::any::type_name::<T>(),
                "missing injected state"
            );

            errors::internal_server_error()
        })
    }
}
