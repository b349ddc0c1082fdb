//! The three-stage middleware chain.

use actix_web::{
    App, Error, HttpResponse,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::future::{Ready, ready};

/// Body written by the terminal stage.
pub const GREETING: &str = "hello world";

/// Logs a fixed marker, then hands the request to the next stage.
pub struct LogMarker {
    marker: &'static str,
}

impl LogMarker {
    pub const fn new(marker: &'static str) -> Self {
        Self { marker }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LogMarker
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LogMarkerService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LogMarkerService {
            service,
            marker: self.marker,
        }))
    }
}

pub struct LogMarkerService<S> {
    service: S,
    marker: &'static str,
}

impl<S, B> Service<ServiceRequest> for LogMarkerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        tracing::info!("{}", self.marker);
        self.service.call(req)
    }
}

/// Terminal stage: every request gets the greeting.
async fn greet() -> HttpResponse {
    HttpResponse::Ok().body(GREETING)
}

/// Build the demo app: marker `1`, then marker `2`, then the greeting.
pub fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    // The last registered wrap runs first.
    App::new()
        .wrap(LogMarker::new("2"))
        .wrap(LogMarker::new("1"))
        .default_service(web::to(greet))
}
