//! Mock session management.
//!
//! There is no real authentication: signing in never checks a credential and
//! always succeeds with a fixed token. The point of this module is the
//! shape, not the security. The session lives in an explicitly owned
//! [SessionStore] rather than a global, and serializes to JSON so an
//! embedder can keep it wherever it keeps the transaction snapshot.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The token stored on every session. Mock authentication only; this value
/// proves nothing.
pub const MOCK_TOKEN: &str = "mock-token";

/// The person who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, defaulting to the local part of the email address.
    pub name: String,
    /// The email address used to sign in.
    pub email: String,
}

/// A signed-in user together with the mock auth token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: UserProfile,
    /// Always [MOCK_TOKEN].
    pub token: String,
}

/// Owns the current session, if any.
///
/// At most one user is signed in at a time; signing in again replaces the
/// previous session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    /// Create a store with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a user in, replacing any existing session.
    ///
    /// When `name` is absent or blank the display name falls back to the
    /// local part of the email address.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidEmail] if `email` does not
    /// have a non-empty local part and domain separated by '@'.
    pub fn sign_in(&mut self, name: Option<&str>, email: &str) -> Result<&Session, Error> {
        let email = email.trim();
        let local_part = match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local,
            _ => return Err(Error::InvalidEmail(email.to_string())),
        };

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => local_part.to_string(),
        };

        tracing::debug!("signed in as {email}");

        self.session = Some(Session {
            user: UserProfile {
                name,
                email: email.to_string(),
            },
            token: MOCK_TOKEN.to_string(),
        });

        Ok(self.session.as_ref().expect("session just stored"))
    }

    /// Sign the current user out, returning the session that was active.
    pub fn sign_out(&mut self) -> Option<Session> {
        if self.session.is_some() {
            tracing::debug!("signed out");
        }

        self.session.take()
    }

    /// The active session, if a user is signed in.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a user is signed in.
    ///
    /// Screens behind the route guard check this and redirect to the landing
    /// page when it is false.
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Serialize the session state as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::JSONSerializationError] if the
    /// session cannot be serialized.
    pub fn snapshot(&self) -> Result<String, Error> {
        serde_json::to_string(&self.session)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))
    }

    /// Replace the session state with that from a JSON snapshot.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidSnapshot] if `snapshot` is
    /// not valid session JSON. The store is left unchanged on error.
    pub fn restore(&mut self, snapshot: &str) -> Result<(), Error> {
        let session: Option<Session> = serde_json::from_str(snapshot)
            .inspect_err(|error| tracing::error!("could not parse session snapshot: {error}"))
            .map_err(|error| Error::InvalidSnapshot(error.to_string()))?;

        self.session = session;

        Ok(())
    }
}
