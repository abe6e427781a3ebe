use serde::{Deserialize, Serialize};
use statig::prelude::*;
use std::fmt;

use super::indicator::{render_indicator, IndicatorRow};
use super::WorkflowStage;
use crate::routing::{Route, RouteStack};

/// Events accepted by the stage cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// A tap on one of the indicator segments
    IndicatorTap { target: WorkflowStage },
    /// The current screen's primary "continue" action finished
    Complete,
}

/// What happened to a navigation request. Purely informational: rejected
/// taps are ignored, never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    Unchanged { stage: WorkflowStage },
    Navigated { from: WorkflowStage, to: WorkflowStage },
    Rejected { current: WorkflowStage, target: WorkflowStage },
}

impl NavigationOutcome {
    pub fn is_navigated(&self) -> bool {
        matches!(self, NavigationOutcome::Navigated { .. })
    }
}

/// Stage cursor driven by statig. One state per workflow stage.
#[derive(Debug, Default)]
struct StageCursor {
    correlation_id: Option<String>,
}

impl StageCursor {
    fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(correlation_id.into()),
        }
    }
}

#[state_machine(initial = "State::dashboard()", state(derive(Debug)))]
impl StageCursor {
    #[state]
    fn dashboard(&mut self, event: &NavigationEvent) -> Outcome<State> {
        self.route(WorkflowStage::Dashboard, event)
    }

    #[state]
    fn scan(&mut self, event: &NavigationEvent) -> Outcome<State> {
        self.route(WorkflowStage::Scan, event)
    }

    #[state]
    fn analysis(&mut self, event: &NavigationEvent) -> Outcome<State> {
        self.route(WorkflowStage::Analysis, event)
    }

    #[state]
    fn results(&mut self, event: &NavigationEvent) -> Outcome<State> {
        self.route(WorkflowStage::Results, event)
    }

    #[state]
    fn referral(&mut self, event: &NavigationEvent) -> Outcome<State> {
        self.route(WorkflowStage::Referral, event)
    }
}

impl StageCursor {
    fn route(&mut self, current: WorkflowStage, event: &NavigationEvent) -> Outcome<State> {
        let correlation_id = self.correlation_id.as_deref().unwrap_or("-");
        match *event {
            NavigationEvent::IndicatorTap { target } if target == current => Handled,
            NavigationEvent::IndicatorTap { target } if current.can_revisit(target) => {
                tracing::info!(
                    correlation_id = %correlation_id,
                    from = %current,
                    to = %target,
                    "Revisiting earlier workflow stage"
                );
                Transition(state_for(target))
            }
            NavigationEvent::IndicatorTap { target } => {
                tracing::debug!(
                    correlation_id = %correlation_id,
                    current = %current,
                    target = %target,
                    "Ignoring forward indicator tap"
                );
                Handled
            }
            NavigationEvent::Complete => {
                let next = current.next();
                tracing::info!(
                    correlation_id = %correlation_id,
                    from = %current,
                    to = %next,
                    "Workflow stage completed"
                );
                Transition(state_for(next))
            }
        }
    }
}

fn state_for(stage: WorkflowStage) -> State {
    match stage {
        WorkflowStage::Dashboard => State::dashboard(),
        WorkflowStage::Scan => State::scan(),
        WorkflowStage::Analysis => State::analysis(),
        WorkflowStage::Results => State::results(),
        WorkflowStage::Referral => State::referral(),
    }
}

fn stage_of(state: &State) -> WorkflowStage {
    match state {
        State::Dashboard { .. } => WorkflowStage::Dashboard,
        State::Scan { .. } => WorkflowStage::Scan,
        State::Analysis { .. } => WorkflowStage::Analysis,
        State::Results { .. } => WorkflowStage::Results,
        State::Referral { .. } => WorkflowStage::Referral,
    }
}

/// Single source of truth for the highlighted indicator segment and the
/// navigation history of one authenticated session.
pub struct WorkflowNavigator {
    machine: StateMachine<StageCursor>,
    history: RouteStack,
}

impl Default for WorkflowNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WorkflowNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowNavigator")
            .field("current_stage", &self.current_stage())
            .field("history", &self.history.routes())
            .finish()
    }
}

impl WorkflowNavigator {
    pub fn new() -> Self {
        Self::from_cursor(StageCursor::default())
    }

    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self::from_cursor(StageCursor::with_correlation_id(correlation_id))
    }

    fn from_cursor(cursor: StageCursor) -> Self {
        Self {
            machine: cursor.state_machine(),
            history: RouteStack::new(Route::Dashboard),
        }
    }

    pub fn current_stage(&self) -> WorkflowStage {
        stage_of(self.machine.state())
    }

    pub fn is_reachable(&self, target: WorkflowStage) -> bool {
        self.current_stage().can_revisit(target)
    }

    pub fn history(&self) -> &RouteStack {
        &self.history
    }

    pub fn current_route(&self) -> Route {
        self.history.top()
    }

    pub fn indicator(&self) -> IndicatorRow {
        render_indicator(self.current_stage())
    }

    /// Handle a tap on the indicator segment for `target`
    pub fn request_navigate(&mut self, target: WorkflowStage) -> NavigationOutcome {
        let from = self.current_stage();
        if target == from {
            return NavigationOutcome::Unchanged { stage: from };
        }

        self.machine.handle(&NavigationEvent::IndicatorTap { target });
        let to = self.current_stage();
        if to == from {
            return NavigationOutcome::Rejected {
                current: from,
                target,
            };
        }

        self.history.reset_to_root_then(Route::for_stage(to));
        NavigationOutcome::Navigated { from, to }
    }

    /// Advance one stage after the current screen's primary action.
    /// Completing Referral starts a fresh session at Dashboard with no history.
    pub fn complete_stage(&mut self) -> NavigationOutcome {
        let from = self.current_stage();
        self.machine.handle(&NavigationEvent::Complete);
        let to = self.current_stage();

        if to == WorkflowStage::Dashboard {
            self.history.clear_to(Route::Dashboard);
        } else {
            self.history.reset_to_root_then(Route::for_stage(to));
        }
        NavigationOutcome::Navigated { from, to }
    }

    /// Show the profile screen on top of the current stage
    pub fn open_profile(&mut self) {
        if self.history.top() != Route::Profile {
            self.history.push(Route::Profile);
        }
    }

    /// System back: pop the top route. When a stage screen is exposed the
    /// cursor follows it.
    pub fn back(&mut self) -> Option<Route> {
        let popped = self.history.pop()?;
        if let Some(stage) = self.history.top().stage() {
            if stage != self.current_stage() {
                self.machine.handle(&NavigationEvent::IndicatorTap { target: stage });
            }
        }
        Some(popped)
    }
}
