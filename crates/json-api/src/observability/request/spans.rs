//! Route labels for spans and metrics.

/// Map a request path onto the route it is served by.
///
/// Labels come from a fixed set so arbitrary paths cannot create new metric
/// series; anything outside the served routes is `unmatched`.
pub(super) fn route_for_path(path: &str) -> &'static str {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

    match segments.as_slice() {
        [] => "/",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api", "v1", "products"] => "/api/v1/products",
        ["api", "v1", "product", _] => "/api/v1/product/{id}",
        ["api-doc", ..] => "/api-doc",
        ["docs", ..] => "/docs",
        _ => "unmatched",
    }
}
