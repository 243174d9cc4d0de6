use super::*;

#[test]
fn endpoints_append_resource_with_trailing_slash() {
    assert_eq!(token_endpoint("/api"), "/api/token/");
    assert_eq!(user_endpoint("/api"), "/api/user/");
    assert_eq!(job_endpoint("https://jobs.example.com/api"), "https://jobs.example.com/api/job/");
}

#[test]
fn endpoints_with_empty_prefix_are_root_relative() {
    assert_eq!(token_endpoint(""), "/token/");
}

#[test]
fn job_status_and_image_urls_embed_the_id() {
    assert_eq!(job_status_endpoint("/api", "01HZX"), "/api/job/01HZX/");
    assert_eq!(image_url("/api", "01HZY"), "/api/image/01HZY/");
    assert_eq!(image_url("https://jobs.example.com/api", "7"), "https://jobs.example.com/api/image/7/");
}

#[test]
fn rejection_uses_backend_error_message() {
    let err = rejection(400, r#"{"ok":false,"error":"Missing username or password."}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 400, message: "Missing username or password.".to_owned() }
    );
    assert_eq!(err.to_string(), "Missing username or password.");
}

#[test]
fn rejection_falls_back_to_status() {
    assert_eq!(rejection(502, "<html>bad gateway</html>").to_string(), "request failed: 502");
    assert_eq!(rejection(401, "{}").to_string(), "request failed: 401");
}

#[test]
fn rejection_reports_job_lookup_failures() {
    let err = rejection(403, r#"{"ok":false,"error":"Not allowed"}"#);
    assert_eq!(err, ApiError::Rejected { status: 403, message: "Not allowed".to_owned() });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let creds = Credentials { username: "a".to_owned(), password: "b".to_owned() };
    let result = poll_once(obtain_token("/api", &creds));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn job_lookup_is_unavailable_outside_browser() {
    let result = poll_once(fetch_job("/api", "Token abc", "01HZX"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that completes without ever awaiting.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
