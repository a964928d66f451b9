//! Authorization gate for write routes
//!
//! The two read routes per kind are public; the create/update/delete
//! handlers consult an [`AuthProvider`] before doing anything else. The
//! provider is injected, so a deployment can swap the permissive default
//! for a real credential check without touching the handlers.

use crate::core::error::ApiError;
use axum::http::HeaderMap;

/// Decides whether a request may reach a write route
pub trait AuthProvider: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError>;
}

/// Permissive provider: every request is authorized (the default)
pub struct NoAuth;

impl AuthProvider for NoAuth {
    fn authorize(&self, _headers: &HeaderMap) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Static bearer-token provider
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl AuthProvider for BearerToken {
    fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let supplied = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized {
                message: "missing bearer token".to_string(),
            })?;

        if supplied != self.token {
            return Err(ApiError::Unauthorized {
                message: "invalid token".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_no_auth_allows_everything() {
        assert!(NoAuth.authorize(&HeaderMap::new()).is_ok());
    }

    #[test]
    fn test_bearer_token_rejects_missing_header() {
        let provider = BearerToken::new("secret");
        let err = provider.authorize(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_token_rejects_wrong_token() {
        let provider = BearerToken::new("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer nope".parse().unwrap());
        assert!(provider.authorize(&headers).is_err());
    }

    #[test]
    fn test_bearer_token_accepts_matching_token() {
        let provider = BearerToken::new("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer secret".parse().unwrap());
        assert!(provider.authorize(&headers).is_ok());
    }
}
