//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Replaces numeric path segments with `{id}` so span names and metric labels
/// stay low-cardinality.
fn normalise_route(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_replaced() {
        let names = request_span_name("GET", "/products/history/42");

        assert_eq!(names.route, "/products/history/{id}");
        assert_eq!(names.otel_span_name, "GET /products/history/{id}");
    }

    #[test]
    fn static_routes_are_unchanged() {
        assert_eq!(normalise_route("/products/categories"), "/products/categories");
        assert_eq!(normalise_route("/"), "/");
        assert_eq!(normalise_route("/products/"), "/products");
    }
}
