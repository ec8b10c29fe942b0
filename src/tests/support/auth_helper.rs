use std::sync::Arc;

use actix_web::web;
use chrono::Utc;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Token provider that accepts any bearer token and reports fixed claims
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    subject: String,
    token_type: String,
    reject: bool,
}

impl StubTokenProvider {
    pub fn access(subject: &str) -> Self {
        Self::with_type(subject, "access")
    }

    pub fn with_type(subject: &str, token_type: &str) -> Self {
        Self {
            subject: subject.to_string(),
            token_type: token_type.to_string(),
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            subject: String::new(),
            token_type: "access".to_string(),
            reject: true,
        }
    }

    pub fn into_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn issue_access_token(&self, _subject: &str) -> Result<String, TokenError> {
        Ok("test-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::InvalidSignature);
        }

        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.subject.clone(),
            iss: "forum-backend".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: self.token_type.clone(),
        })
    }
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
