//! Identity attachment middleware and extractors.
//!
//! The middleware runs before every `/api` handler and stores an
//! [`AttachedIdentity`] in the request extensions. It works in two steps: the
//! bearer token is verified without touching storage, then the verified subject
//! is looked up in the user store.
//!
//! Handlers pick the policy for a failed verification through the extractor they
//! declare:
//!
//! ```ignore
//! // rejects bad tokens with 401 before the handler body runs
//! async fn create(caller: StrictIdentity) -> AppResult<HttpResponse> { .. }
//!
//! // treats bad tokens as an anonymous caller
//! async fn list(caller: LenientIdentity) -> AppResult<HttpResponse> { .. }
//! ```

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderValue},
    web,
};

use bloglist_core::domain::User;
use bloglist_core::error::RepoError;
use bloglist_core::ports::{AuthError, BaseRepository};

use crate::middleware::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "bearer ";

/// What the middleware learned about the caller of one request.
#[derive(Debug, Clone)]
pub enum AttachedIdentity {
    /// No `Authorization` header.
    Anonymous,
    /// A verified token whose subject resolved to a stored user.
    User(User),
    /// An `Authorization` header was sent but did not yield a user.
    Rejected(AuthError),
}

impl AttachedIdentity {
    fn of(req: &HttpRequest) -> Self {
        req.extensions()
            .get::<AttachedIdentity>()
            .cloned()
            .unwrap_or(AttachedIdentity::Anonymous)
    }
}

/// Middleware factory attaching the caller's identity to each request.
pub struct IdentityAttachment;

impl<S, B> Transform<S, ServiceRequest> for IdentityAttachment
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityAttachmentService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityAttachmentService {
            service: Rc::new(service),
        }))
    }
}

pub struct IdentityAttachmentService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentityAttachmentService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let attached = attach(&req).await?;
            req.extensions_mut().insert(attached);
            service.call(req).await
        })
    }
}

async fn attach(req: &ServiceRequest) -> Result<AttachedIdentity, AppError> {
    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
        tracing::error!("AppState not found in app data");
        return Err(AppError::Internal("server configuration error".to_string()));
    };

    let token = match req.headers().get(header::AUTHORIZATION) {
        None => return Ok(AttachedIdentity::Anonymous),
        Some(value) => match bearer_token(value) {
            Ok(token) => token.to_string(),
            Err(e) => return Ok(AttachedIdentity::Rejected(e)),
        },
    };

    Ok(resolve(&state, &token).await?)
}

/// Verify the token, then look its subject up in the user store.
///
/// Only a store failure is an error; every credential problem is reported as
/// [`AttachedIdentity::Rejected`].
async fn resolve(state: &AppState, token: &str) -> Result<AttachedIdentity, RepoError> {
    let identity = match state.tokens.verify(token) {
        Ok(identity) => identity,
        Err(e) => return Ok(AttachedIdentity::Rejected(e)),
    };

    match state.users.find_by_id(identity.user_id).await? {
        Some(user) => Ok(AttachedIdentity::User(user)),
        None => {
            tracing::debug!(user_id = %identity.user_id, "token subject no longer exists");
            Ok(AttachedIdentity::Rejected(AuthError::UnknownSubject))
        }
    }
}

/// Extract `<token>` from `Bearer <token>`. The scheme is matched case-insensitively.
fn bearer_token(value: &HeaderValue) -> Result<&str, AuthError> {
    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("invalid authorization header".to_string()))?;

    let scheme_matches = value
        .get(..BEARER_PREFIX.len())
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX));
    if !scheme_matches {
        return Err(AuthError::InvalidToken("expected bearer token".to_string()));
    }

    let token = value[BEARER_PREFIX.len()..].trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken("empty bearer token".to_string()));
    }

    Ok(token)
}

/// Caller identity for write-protected routes.
///
/// A rejected token fails extraction with `401`. An anonymous request passes
/// through as `None`; the ownership guard decides what that means.
#[derive(Debug, Clone)]
pub struct StrictIdentity(pub Option<User>);

impl FromRequest for StrictIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(match AttachedIdentity::of(req) {
            AttachedIdentity::User(user) => Ok(Self(Some(user))),
            AttachedIdentity::Anonymous => Ok(Self(None)),
            AttachedIdentity::Rejected(e) => {
                tracing::debug!(error = ?e, "Rejecting request with bad bearer token");
                Err(e.into())
            }
        })
    }
}

/// Caller identity for read-mostly routes. A rejected token reads as anonymous.
#[derive(Debug, Clone)]
pub struct LenientIdentity(pub Option<User>);

impl FromRequest for LenientIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(match AttachedIdentity::of(req) {
            AttachedIdentity::User(user) => Self(Some(user)),
            AttachedIdentity::Anonymous | AttachedIdentity::Rejected(_) => Self(None),
        }))
    }
}
