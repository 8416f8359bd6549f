use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use inoxviet_application::RequestContext;

use crate::error::ApiError;

/// JSON body whose rejections use the API error payload.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string whose rejections use the API error payload.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters whose rejections use the API error payload.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Caller context resolved by the request-context middleware; anonymous when
/// the middleware did not run.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<RequestContext>()
                .cloned()
                .unwrap_or_else(RequestContext::anonymous),
        ))
    }
}

/// Caller context that must carry an administrator identity.
#[derive(Debug, Clone)]
pub struct Admin(pub RequestContext);

impl<S: Send + Sync> FromRequestParts<S> for Admin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Caller(context) = Caller::from_request_parts(parts, state).await?;
        context.require_actor()?;
        Ok(Self(context))
    }
}
