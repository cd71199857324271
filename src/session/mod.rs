//! Session management module.
//!
//! This module derives the signed-in/signed-out state of the application
//! from the persisted credential store. Authentication is simulated: the
//! "token" is a generated demo value and the profile blob is whatever the
//! login or registration form provided.

mod error;
mod store;

pub use error::SessionError;
pub use store::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, AUTH_TOKEN_KEY, USER_DATA_KEY,
};

use chrono::Utc;
use log::*;
use serde::{Deserialize, Serialize};

/// The signed-in/signed-out state and associated profile fields.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub signed_in: bool,
    pub display_name: String,
    pub email: String,
}

impl Session {
    /// Return the signed-out session.
    ///
    pub fn signed_out() -> Session {
        Session {
            signed_in: false,
            display_name: String::new(),
            email: String::new(),
        }
    }
}

/// Profile blob persisted alongside the auth token.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Owns the persisted credential state and hands out `Session` values.
///
pub struct SessionStore {
    store: Box<dyn CredentialStore + Send>,
}

impl SessionStore {
    /// Return a new instance over the given credential store.
    ///
    pub fn new(store: Box<dyn CredentialStore + Send>) -> SessionStore {
        SessionStore { store }
    }

    /// Read persisted credential state. Absent or malformed data yields the
    /// signed-out session; this never fails.
    ///
    pub fn load(&self) -> Session {
        match self.store.get(AUTH_TOKEN_KEY) {
            Some(token) if !token.is_empty() => {}
            _ => return Session::signed_out(),
        }

        let profile = match self.store.get(USER_DATA_KEY) {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    debug!("Malformed user profile, treating as signed out: {}", e);
                    return Session::signed_out();
                }
            },
            None => return Session::signed_out(),
        };

        if profile.email.is_empty() {
            return Session::signed_out();
        }

        let display_name = if profile.name.is_empty() {
            local_part(&profile.email)
        } else {
            profile.name
        };

        Session {
            signed_in: true,
            display_name,
            email: profile.email,
        }
    }

    /// Construct and persist a new signed-in session, unconditionally
    /// overwriting any prior one. Persistence failures are logged and
    /// absorbed; the in-memory session is still returned.
    ///
    pub fn sign_in(&mut self, email: &str, display_name: &str) -> Session {
        let display_name = if display_name.is_empty() {
            local_part(email)
        } else {
            display_name.to_string()
        };
        let token = format!("demo-token-{}", Utc::now().timestamp_millis());
        let profile = UserProfile {
            name: display_name.clone(),
            email: email.to_string(),
            role: "user".to_string(),
        };

        if let Err(e) = self.store.set(AUTH_TOKEN_KEY, &token) {
            error!("Failed to persist auth token: {}", e);
        }
        match serde_json::to_string(&profile) {
            Ok(blob) => {
                if let Err(e) = self.store.set(USER_DATA_KEY, &blob) {
                    error!("Failed to persist user profile: {}", e);
                }
            }
            Err(e) => error!("Failed to encode user profile: {}", e),
        }

        info!("Signed in as {}", email);
        Session {
            signed_in: true,
            display_name,
            email: email.to_string(),
        }
    }

    /// Clear persisted credential state. Idempotent: signing out while
    /// already signed out is a no-op.
    ///
    pub fn sign_out(&mut self) {
        if let Err(e) = self.store.remove(AUTH_TOKEN_KEY) {
            error!("Failed to clear auth token: {}", e);
        }
        if let Err(e) = self.store.remove(USER_DATA_KEY) {
            error!("Failed to clear user profile: {}", e);
        }
        info!("Signed out");
    }
}

/// Return the local part of an email address, used as a fallback display
/// name on login.
///
fn local_part(email: &str) -> String {
    match email.split('@').next() {
        Some(part) if !part.is_empty() => part.to_string(),
        _ => "User".to_string(),
    }
}
