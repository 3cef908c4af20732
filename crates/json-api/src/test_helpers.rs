//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shelf_app::domain::products::{
    MockProductsService,
    records::{ProductId, ProductRecord},
};

use crate::{errors, router, state::State};

/// A service mock without expectations; any unconfigured call panics.
pub(crate) fn strict_products_mock() -> MockProductsService {
    MockProductsService::new()
}

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: format!("Product {id}"),
        description: format!("Product {id} description"),
        price: id * 10,
    }
}

pub(crate) fn products_service(products: MockProductsService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(products)))))
            .push(router::products_router()),
    )
    .catcher(errors::catcher())
}
