// Named destinations of the app

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflow::WorkflowStage;

/// Every screen reachable by name. No query parameters or payloads are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Splash,
    Login,
    Dashboard,
    ScanCapture,
    Analysis,
    TriageResults,
    Referral,
    Profile,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Splash,
        Route::Login,
        Route::Dashboard,
        Route::ScanCapture,
        Route::Analysis,
        Route::TriageResults,
        Route::Referral,
        Route::Profile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Login => "login",
            Route::Dashboard => "dashboard",
            Route::ScanCapture => "scan-capture",
            Route::Analysis => "analysis",
            Route::TriageResults => "triage-results",
            Route::Referral => "referral",
            Route::Profile => "profile",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::ScanCapture => "/scan-capture",
            Route::Analysis => "/analysis",
            Route::TriageResults => "/triage-results",
            Route::Referral => "/referral",
            Route::Profile => "/profile",
        }
    }

    /// Resolve a route by name or path. Unknown names resolve to nothing.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|route| route.name() == name || route.path() == name)
    }

    pub fn for_stage(stage: WorkflowStage) -> Self {
        match stage {
            WorkflowStage::Dashboard => Route::Dashboard,
            WorkflowStage::Scan => Route::ScanCapture,
            WorkflowStage::Analysis => Route::Analysis,
            WorkflowStage::Results => Route::TriageResults,
            WorkflowStage::Referral => Route::Referral,
        }
    }

    /// The workflow stage this screen belongs to, if any
    pub fn stage(self) -> Option<WorkflowStage> {
        match self {
            Route::Dashboard => Some(WorkflowStage::Dashboard),
            Route::ScanCapture => Some(WorkflowStage::Scan),
            Route::Analysis => Some(WorkflowStage::Analysis),
            Route::TriageResults => Some(WorkflowStage::Results),
            Route::Referral => Some(WorkflowStage::Referral),
            Route::Splash | Route::Login | Route::Profile => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
