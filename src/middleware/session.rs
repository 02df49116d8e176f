use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::api::metrics;
use crate::config::SessionConfig;
use crate::services::session_service::{verify_session_token, SESSION_COOKIE};

/// Identity resolved from the session cookie for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
}

/// Resolves the per-request identity and counts requests/errors.
///
/// A missing, expired or forged cookie just leaves the request anonymous;
/// handlers decide what "not logged in" means for them.
pub struct SessionMiddleware {
    config: Rc<SessionConfig>,
}

impl SessionMiddleware {
    pub fn new(config: SessionConfig) -> Self {
        Self { config: Rc::new(config) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
    config: Rc<SessionConfig>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        metrics::increment_request_count();

        if let Some(cookie) = req.cookie(SESSION_COOKIE) {
            match verify_session_token(&self.config, cookie.value()) {
                Ok(claims) => {
                    req.extensions_mut().insert(SessionUser { username: claims.sub });
                }
                Err(e) => {
                    log::debug!("🍪 Ignoring session cookie: {}", e);
                }
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            if res.status().is_server_error() {
                metrics::increment_error_count();
            }
            Ok(res)
        })
    }
}
