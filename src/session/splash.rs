use std::time::Duration;
use tracing::debug;

use crate::routing::Route;

/// Fixed-delay splash redirect. Fire-and-forget: there is no cancellation path.
#[derive(Debug, Clone, Copy)]
pub struct SplashGate {
    delay: Duration,
}

impl SplashGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait out the splash interval and return the route to show next
    pub async fn wait(&self) -> Route {
        debug!(delay = ?self.delay, "Splash screen shown");
        tokio::time::sleep(self.delay).await;
        Route::Login
    }
}
