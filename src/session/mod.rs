//! Session gate for the dashboard views.
//!
//! A [`SessionProvider`] is built once at start-up around a [`SessionSource`]
//! and handed to every guard. Signing out tears the provider down, after which
//! every guard sees an unauthenticated session regardless of the source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Where a guard sends the user instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Render,
    Redirect(Route),
}

/// External authority on whether the current user is signed in.
pub trait SessionSource: Send + Sync {
    fn status(&self) -> SessionStatus;

    /// Revoke the session at the source. Default is a no-op.
    fn sign_out(&self) {}
}

/// Source backed by the configured API token.
#[derive(Debug, Default)]
pub struct TokenSession {
    token: RwLock<Option<String>>,
}

impl TokenSession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token.filter(|t| !t.trim().is_empty())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_token.clone())
    }
}

impl SessionSource for TokenSession {
    fn status(&self) -> SessionStatus {
        match self.token.read() {
            Ok(token) if token.is_some() => SessionStatus::Authenticated,
            Ok(_) => SessionStatus::Unauthenticated,
            Err(_) => SessionStatus::Pending,
        }
    }

    fn sign_out(&self) {
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
    }
}

#[derive(Clone)]
pub struct SessionProvider {
    source: Arc<dyn SessionSource>,
    torn_down: Arc<AtomicBool>,
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider")
            .field("status", &self.status())
            .finish()
    }
}

impl SessionProvider {
    pub fn start(source: Arc<dyn SessionSource>) -> Self {
        let provider = Self {
            source,
            torn_down: Arc::new(AtomicBool::new(false)),
        };
        tracing::debug!("Session provider started ({:?})", provider.status());
        provider
    }

    pub fn status(&self) -> SessionStatus {
        if self.torn_down.load(Ordering::SeqCst) {
            SessionStatus::Unauthenticated
        } else {
            self.source.status()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn sign_out(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            self.source.sign_out();
            tracing::info!("Signed out");
        }
    }

    /// Gate for dashboard views.
    pub fn guard_private(&self) -> GuardOutcome {
        match self.status() {
            SessionStatus::Pending => GuardOutcome::Loading,
            SessionStatus::Unauthenticated => GuardOutcome::Redirect(Route::Login),
            SessionStatus::Authenticated => GuardOutcome::Render,
        }
    }

    /// Gate for the login view.
    pub fn guard_public(&self) -> GuardOutcome {
        match self.status() {
            SessionStatus::Pending => GuardOutcome::Loading,
            SessionStatus::Authenticated => GuardOutcome::Redirect(Route::Dashboard),
            SessionStatus::Unauthenticated => GuardOutcome::Render,
        }
    }
}
