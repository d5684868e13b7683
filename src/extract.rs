//! Axum request-URL extraction
//!
//! Handlers need the current request's path+query string to hand to
//! [`crate::PageBuilder`]; [`RequestUrl`] pulls it straight from the request
//! parts so handlers don't touch the raw `Uri` themselves.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Uri;
use std::convert::Infallible;

/// The current request's path with query string, e.g. `/visitors?page=2`.
///
/// Extraction is infallible; a request with no path component yields `/`.
///
/// # Examples
///
/// ```rust,ignore
/// pub async fn list_visitors(
///     RequestUrl(url): RequestUrl,
///     State(state): State<AppState>,
/// ) -> Json<PageEnvelope> {
///     let builder = PageBuilder::new(rows, url, state.base_url, false, Fallback::default());
///     Json(builder.paginate())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestUrl(pub String);

/// Render a URI's path and query as the single string the builder expects.
pub fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(path_and_query(&parts.uri)))
    }
}
