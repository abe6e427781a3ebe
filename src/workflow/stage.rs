// Core types for the five-stage screening workflow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stages of a screening session, in clinical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStage {
    /// Worker home screen, root of every session
    Dashboard,
    /// Ultrasound frame capture
    Scan,
    /// Segmentation and IMT measurement
    Analysis,
    /// Triage result review
    Results,
    /// Hospital referral submission
    Referral,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown workflow stage '{input}' (expected dashboard, scan, analysis, results, referral or 1-5)")]
pub struct ParseStageError {
    pub input: String,
}

impl WorkflowStage {
    /// All stages in indicator order
    pub const ALL: [WorkflowStage; 5] = [
        WorkflowStage::Dashboard,
        WorkflowStage::Scan,
        WorkflowStage::Analysis,
        WorkflowStage::Results,
        WorkflowStage::Referral,
    ];

    /// Fixed 1-based position of the stage
    pub fn ordinal(self) -> u8 {
        match self {
            WorkflowStage::Dashboard => 1,
            WorkflowStage::Scan => 2,
            WorkflowStage::Analysis => 3,
            WorkflowStage::Results => 4,
            WorkflowStage::Referral => 5,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal).checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::Dashboard => "Dashboard",
            WorkflowStage::Scan => "Scan",
            WorkflowStage::Analysis => "Analysis",
            WorkflowStage::Results => "Results",
            WorkflowStage::Referral => "Referral",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkflowStage::Dashboard => "home",
            WorkflowStage::Scan => "camera",
            WorkflowStage::Analysis => "analytics",
            WorkflowStage::Results => "assessment",
            WorkflowStage::Referral => "send",
        }
    }

    /// Successor reached by a screen's "continue" action.
    /// Referral closes the session and wraps back to Dashboard.
    pub fn next(self) -> Self {
        match self {
            WorkflowStage::Dashboard => WorkflowStage::Scan,
            WorkflowStage::Scan => WorkflowStage::Analysis,
            WorkflowStage::Analysis => WorkflowStage::Results,
            WorkflowStage::Results => WorkflowStage::Referral,
            WorkflowStage::Referral => WorkflowStage::Dashboard,
        }
    }

    /// Whether `target` may be revisited from this stage through the indicator
    pub fn can_revisit(self, target: WorkflowStage) -> bool {
        target.ordinal() <= self.ordinal()
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkflowStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<u8>() {
            return Self::from_ordinal(ordinal).ok_or_else(|| ParseStageError {
                input: s.to_string(),
            });
        }

        Self::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStageError {
                input: s.to_string(),
            })
    }
}
