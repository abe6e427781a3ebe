use thiserror::Error;
use tracing::info;

use super::screening::{Collaborators, ScreeningSession, SessionSettings};
use super::splash::SplashGate;
use crate::config::CarotidScreenConfig;
use crate::routing::Route;
use crate::services::{Credentials, ServiceError};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Login is only available from the login screen (current route: {route})")]
    NotOnLoginScreen { route: Route },
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Where the app is in its top-level lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    Splash,
    Login,
    Authenticated,
}

/// Top-level app lifecycle: splash, login, then one authenticated session
/// that is discarded on logout.
#[derive(Debug)]
pub struct AppShell {
    splash: SplashGate,
    settings: SessionSettings,
    collaborators: Collaborators,
    route: Route,
    session: Option<ScreeningSession>,
}

impl AppShell {
    pub fn new(config: &CarotidScreenConfig, collaborators: Collaborators) -> Self {
        Self {
            splash: SplashGate::new(config.app.splash_delay()),
            settings: SessionSettings::from_config(config),
            collaborators,
            route: Route::Splash,
            session: None,
        }
    }

    pub fn phase(&self) -> ShellPhase {
        match (&self.session, self.route) {
            (Some(_), _) => ShellPhase::Authenticated,
            (None, Route::Splash) => ShellPhase::Splash,
            (None, _) => ShellPhase::Login,
        }
    }

    /// Route currently on screen
    pub fn current_route(&self) -> Route {
        self.session
            .as_ref()
            .map(|session| session.navigator().current_route())
            .unwrap_or(self.route)
    }

    /// Wait out the splash screen. A no-op once the splash has been dismissed.
    pub async fn finish_splash(&mut self) -> Route {
        if self.route == Route::Splash && self.session.is_none() {
            self.route = self.splash.wait().await;
        }
        self.current_route()
    }

    /// Authenticate and open a fresh screening session at Dashboard
    pub async fn login(
        &mut self,
        credentials: &Credentials,
    ) -> Result<&mut ScreeningSession, ShellError> {
        if self.phase() != ShellPhase::Login {
            return Err(ShellError::NotOnLoginScreen {
                route: self.current_route(),
            });
        }

        let token = self.collaborators.auth.authenticate(credentials).await?;
        info!(principal = %token.principal, "Worker signed in");

        let session = ScreeningSession::new(token, self.collaborators.clone(), self.settings.clone());
        Ok(self.session.insert(session))
    }

    /// Discard the session and return to login. Returns whether a session was
    /// open; without one the route is left alone.
    pub fn logout(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        info!(
            principal = %session.token().principal,
            referrals = session.completed_referrals().len(),
            "Worker signed out"
        );
        self.route = Route::Login;
        true
    }

    pub fn session(&self) -> Option<&ScreeningSession> {
        self.session.as_ref()
    }
}
