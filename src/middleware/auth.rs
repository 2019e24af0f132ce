//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedUser>().cloned(),
        ))
    }
}

/// Optional authentication middleware
///
/// Inserts an `AuthenticatedUser` extension when a valid Bearer token is
/// present and passes the request through otherwise; handlers that need
/// authentication reject via the extractor.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if auth_header.starts_with("Bearer ") {
            let token = &auth_header[7..];

            match AuthService::verify_token(token, &state.config().jwt.secret) {
                Ok(claims) => {
                    if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                        let user = AuthenticatedUser {
                            id: user_id,
                            username: claims.username,
                            role: claims.role,
                        };
                        request.extensions_mut().insert(user);
                    }
                }
                Err(e) => {
                    debug!(path = %request.uri().path(), error = ?e, "Ignoring invalid bearer token");
                }
            }
        }
    }

    next.run(request).await
}
