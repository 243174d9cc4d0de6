use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn app_routes_cover_the_route_table() {
    let paths: Vec<String> =
        generate_route_list(App).iter().map(|r| r.path().trim_end_matches('/').to_owned()).collect();
    for route in crate::routes::ROUTES {
        let expected = route.path.trim_end_matches('/');
        assert!(paths.iter().any(|p| p == expected), "missing {} in {paths:?}", route.path);
    }
}
