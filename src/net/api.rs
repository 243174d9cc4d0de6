//! REST API helpers for the login, registration, job-submission, and job
//! results views.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: calls fail with `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so pages can show a message
//! instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, ErrorBody, JobStatus, Registration};
#[cfg(feature = "hydrate")]
use super::types::{JobCreated, JobKind, TokenResponse};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not available on server")]
    Unavailable,

    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

fn endpoint(api_base: &str, resource: &str) -> String {
    format!("{api_base}/{resource}/")
}

pub fn token_endpoint(api_base: &str) -> String {
    endpoint(api_base, "token")
}

pub fn user_endpoint(api_base: &str) -> String {
    endpoint(api_base, "user")
}

pub fn job_endpoint(api_base: &str) -> String {
    endpoint(api_base, "job")
}

/// `GET` target for one job's status and image list.
pub fn job_status_endpoint(api_base: &str, job_id: &str) -> String {
    format!("{}{job_id}/", job_endpoint(api_base))
}

/// `GET` target serving one processed image's bytes.
///
/// The endpoint requires the `Authorization` header, so the URL cannot be
/// used directly as an `<img src>`; see `fetch_image`.
pub fn image_url(api_base: &str, image_id: &str) -> String {
    format!("{}{image_id}/", endpoint(api_base, "image"))
}

/// Turn a non-2xx response into an `ApiError::Rejected`, using the backend's
/// message when the body carries one.
pub fn rejection(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message(),
        Err(e) => {
            log::debug!("api: {status} body is not an error object: {e}");
            None
        }
    };
    let message = message.unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Rejected { status, message }
}

/// Pass 2xx responses through; turn anything else into `ApiError::Rejected`.
#[cfg(feature = "hydrate")]
async fn accepted(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(rejection(status, &body))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn browser(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

/// Exchange credentials for a token via `POST {api_base}/token/`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response carries no token.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn obtain_token(api_base: &str, credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&token_endpoint(api_base))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = accepted(resp).await?;
        let body: TokenResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.token.is_empty() {
            return Err(ApiError::Decode("empty token".to_owned()));
        }
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST {api_base}/user/`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the account.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn register_user(api_base: &str, registration: &Registration) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&user_endpoint(api_base))
            .json(registration)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        accepted(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Upload `file` for processing via multipart `POST {api_base}/job/`.
///
/// `authorization` is the full header value from
/// `SessionStore::authorization_header`. Returns the new job id.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// backend rejects the job.
#[cfg(feature = "hydrate")]
pub async fn submit_job(
    api_base: &str,
    authorization: &str,
    file: &web_sys::File,
    kind: JobKind,
) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(browser)?;
    form.append_with_blob_and_filename("file", file, &file.name()).map_err(browser)?;
    form.append_with_str("kind", kind.as_str()).map_err(browser)?;

    let resp = gloo_net::http::Request::post(&job_endpoint(api_base))
        .header("Authorization", authorization)
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let resp = accepted(resp).await?;
    let body: JobCreated = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.job_id)
}

/// Load a job's image list via `GET {api_base}/job/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails, the job is unknown or owned by
/// another user, or the body is not a job status.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn fetch_job(api_base: &str, authorization: &str, job_id: &str) -> Result<JobStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&job_status_endpoint(api_base, job_id))
            .header("Authorization", authorization)
            .send()
            .await
            .map_err(network)?;
        let resp = accepted(resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Download one processed image and expose it as a `blob:` object URL.
///
/// The caller owns the URL and should hand it to
/// `web_sys::Url::revoke_object_url` once the preview is gone.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the
/// browser cannot build the blob.
#[cfg(feature = "hydrate")]
pub async fn fetch_image(api_base: &str, authorization: &str, image_id: &str) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::get(&image_url(api_base, image_id))
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(network)?;
    let resp = accepted(resp).await?;
    let bytes = resp.binary().await.map_err(network)?;
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(browser)?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)
}
