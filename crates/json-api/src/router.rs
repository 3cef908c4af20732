//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{healthcheck, observability, products, state::State};

/// Full application router, without the OpenAPI document routes.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(products_router())
}

/// Product routes. Unsupported methods fall through to a 400.
pub(crate) fn products_router() -> Router {
    Router::with_path("api/v1")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .goal(products::invalid::handler),
        )
        .push(
            Router::with_path("product/{id}")
                .get(products::get::handler)
                .post(products::update::handler)
                .goal(products::invalid::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shelf_app::domain::products::MockProductsService;

    use crate::errors::{self, ErrorResponse, INVALID_REQUEST, NOT_FOUND};

    use super::*;

    fn service() -> Service {
        Service::new(app_router(Arc::new(State::new(Arc::new(
            MockProductsService::new(),
        )))))
        .catcher(errors::catcher())
    }

    #[tokio::test]
    async fn test_healthcheck_is_routed() -> TestResult {
        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("ok"));

        Ok(())
    }

    #[tokio::test]
    async fn test_metrics_are_routed() -> TestResult {
        let mut res = TestClient::get("http://example.com/metrics")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("shelf_json_http"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/v1/orders")
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_is_rejected() -> TestResult {
        let mut res = TestClient::delete("http://example.com/api/v1/product/1")
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, INVALID_REQUEST);

        Ok(())
    }
}
