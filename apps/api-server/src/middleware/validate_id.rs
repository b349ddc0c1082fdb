//! Post id guard for single-resource routes.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;

use blog_core::domain::parse_post_id;

/// Rejects requests whose `{id}` path segment is not a well-formed post id.
///
/// Rejected requests get an empty 400 and never reach the inner service.
pub struct ValidateId;

impl<S, B> Transform<S, ServiceRequest> for ValidateId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ValidateIdService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ValidateIdService { service }))
    }
}

pub struct ValidateIdService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ValidateIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let raw_id = req.match_info().get("id").unwrap_or_default();

        if parse_post_id(raw_id).is_none() {
            tracing::debug!(id = %raw_id, "Rejecting malformed post id");

            let (http_req, _payload) = req.into_parts();
            let response = ServiceResponse::new(http_req, HttpResponse::BadRequest().finish());

            return Box::pin(async move { Ok(response.map_into_right_body()) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}
