//! Permissive CORS middleware.
//!
//! The gateway fronts a browser cabinet served from another origin, so every
//! response advertises an open policy and preflight OPTIONS requests are
//! answered directly with 204.

use std::future::{Ready, ready};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::Method;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

const ALLOW_ORIGIN: (&str, &str) = ("access-control-allow-origin", "*");
const ALLOW_METHODS: (&str, &str) = (
    "access-control-allow-methods",
    "GET, POST, PUT, DELETE, OPTIONS",
);
const ALLOW_HEADERS: (&str, &str) = (
    "access-control-allow-headers",
    "Content-Type, Authorization",
);

fn apply_cors_headers(headers: &mut HeaderMap) {
    for (name, value) in [ALLOW_ORIGIN, ALLOW_METHODS, ALLOW_HEADERS] {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Middleware factory applying the open CORS policy.
#[derive(Clone)]
pub struct Cors;

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware { service }))
    }
}

/// Service wrapper produced by [`Cors`].
pub struct CorsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.method() == Method::OPTIONS {
            let (http_req, _payload) = req.into_parts();
            let mut response = HttpResponse::NoContent().finish();
            apply_cors_headers(response.headers_mut());
            let service_response = ServiceResponse::new(http_req, response).map_into_right_body();
            return Box::pin(ready(Ok(service_response)));
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut response = fut.await?;
            apply_cors_headers(response.headers_mut());
            Ok(response.map_into_left_body())
        })
    }
}
