use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Logs one structured line per completed request: method, path, status,
/// duration. Errors surface at the level matching their status class.
pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware { service }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();

            if status.is_server_error() {
                error!(http.method=%method, url.path=%path, http.status_code=%status_code, duration_us=%duration_us, message="request_completed");
            } else if status.is_client_error() {
                warn!(http.method=%method, url.path=%path, http.status_code=%status_code, duration_us=%duration_us, message="request_completed");
            } else {
                info!(http.method=%method, url.path=%path, http.status_code=%status_code, duration_us=%duration_us, message="request_completed");
            }

            result
        })
    }
}
