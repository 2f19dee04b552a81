//! Signed-in identity as presented by the upstream auth layer.
//!
//! The storefront never authenticates anyone itself. A bearer token carrying
//! a session UUID means "a member is signed in"; its absence means guest.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::convert::Infallible;
use uuid::Uuid;

/// Proof that a signed-in identity is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    token: Uuid,
}

impl Session {
    pub fn new(token: Uuid) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Read `Authorization: Bearer <uuid>`. Anything else is a guest.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();
        Uuid::parse_str(token).ok().map(Session::new)
    }
}

/// Optional session extractor. Never rejects; guests get `None`.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSession(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(Session::from_headers(&parts.headers)))
    }
}

/// What a "Rent now" button does for the current visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    /// Guest: open the sign-in prompt
    SignIn,
    /// Member: proceed with the rental
    Reserve,
}

impl CallToAction {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(_) => CallToAction::Reserve,
            None => CallToAction::SignIn,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::SignIn => "Sign in to rent",
            CallToAction::Reserve => "Rent now",
        }
    }
}
