//! Redirect-or-fallback request dispatch.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use futures_util::future::{ready, Either, Ready};
use tower::Service;

use crate::parser::{parse_json, parse_yaml, ParseError};
use crate::table::RedirectTable;

/// A request handler that redirects known paths and falls back otherwise.
///
/// Captures an immutable [`RedirectTable`] and a fallback service. Each call
/// performs one exact-match lookup: a hit answers `302 Found` with the
/// destination in `Location`, a miss hands the original request to the
/// fallback unchanged.
///
/// Any service over axum request/response types can be the fallback: an
/// `axum::Router`, another `RedirectService`, or a `tower::service_fn`
/// closure.
#[derive(Clone)]
pub struct RedirectService<F> {
    table: Arc<RedirectTable>,
    fallback: F,
}

impl<F> RedirectService<F> {
    /// Wrap a table and a fallback service.
    pub fn new(table: RedirectTable, fallback: F) -> Self {
        Self {
            table: Arc::new(table),
            fallback,
        }
    }

    /// Build a service from YAML redirect input.
    ///
    /// Fails only on input that is not well-formed; see [`parse_yaml`].
    pub fn from_yaml(raw: &[u8], fallback: F) -> Result<Self, ParseError> {
        let records = parse_yaml(raw)?;
        Ok(Self::new(RedirectTable::from_records(records), fallback))
    }

    /// Build a service from JSON redirect input.
    ///
    /// Fails only on input that is not well-formed; see [`parse_json`].
    pub fn from_json(raw: &[u8], fallback: F) -> Result<Self, ParseError> {
        let records = parse_json(raw)?;
        Ok(Self::new(RedirectTable::from_records(records), fallback))
    }

    /// The captured table.
    pub fn table(&self) -> &RedirectTable {
        &self.table
    }
}

impl<F> Service<Request<Body>> for RedirectService<F>
where
    F: Service<Request<Body>, Response = Response, Error = Infallible>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Either<Ready<Result<Response, Infallible>>, F::Future>;

    /// Readiness is the fallback's; the redirect path is always ready.
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if let Some(dest) = self.table.lookup(req.uri().path()) {
            tracing::debug!(path = %req.uri().path(), destination = %dest, "Redirecting");
            return Either::Left(ready(Ok(redirect_response(dest))));
        }

        tracing::debug!(path = %req.uri().path(), "No redirect entry, delegating to fallback");
        Either::Right(self.fallback.call(req))
    }
}

/// Build the `302 Found` response for a destination URL.
///
/// Destinations are opaque strings, so a table entry can hold bytes that are
/// not a legal header value. Answer 500 for those instead of panicking.
fn redirect_response(dest: &str) -> Response {
    let location = match header::HeaderValue::from_str(dest) {
        Ok(value) => value,
        Err(_) => {
            tracing::error!(destination = %dest, "Destination is not a writable Location value");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            return response;
        }
    };

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::FOUND;
    response.headers_mut().insert(header::LOCATION, location);
    response
}
