// Five-segment step indicator

use serde::Serialize;
use std::fmt;

use super::WorkflowStage;

/// Visual state of one indicator segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentState {
    /// Stage already passed in this session
    Completed,
    /// Stage currently on screen
    Active,
    /// Stage not yet reached; muted and not tappable
    Locked,
}

impl SegmentState {
    fn for_stage(stage: WorkflowStage, current: WorkflowStage) -> Self {
        match stage.ordinal().cmp(&current.ordinal()) {
            std::cmp::Ordering::Less => SegmentState::Completed,
            std::cmp::Ordering::Equal => SegmentState::Active,
            std::cmp::Ordering::Greater => SegmentState::Locked,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            SegmentState::Completed => "✓",
            SegmentState::Active => "●",
            SegmentState::Locked => "·",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorSegment {
    pub stage: WorkflowStage,
    pub label: &'static str,
    pub icon: &'static str,
    pub state: SegmentState,
    pub tappable: bool,
}

impl IndicatorSegment {
    /// Completed and active segments share the accent treatment
    pub fn accented(&self) -> bool {
        matches!(self.state, SegmentState::Completed | SegmentState::Active)
    }
}

/// Rendered indicator row, always in stage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorRow {
    pub current: WorkflowStage,
    pub segments: [IndicatorSegment; 5],
}

impl IndicatorRow {
    pub fn segment(&self, stage: WorkflowStage) -> &IndicatorSegment {
        &self.segments[usize::from(stage.ordinal() - 1)]
    }
}

pub fn render_indicator(current: WorkflowStage) -> IndicatorRow {
    let segments = WorkflowStage::ALL.map(|stage| {
        let state = SegmentState::for_stage(stage, current);
        IndicatorSegment {
            stage,
            label: stage.label(),
            icon: stage.icon(),
            state,
            tappable: current.can_revisit(stage),
        }
    });

    IndicatorRow { current, segments }
}

impl fmt::Display for IndicatorRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{} {}]", segment.state.marker(), segment.label)?;
        }
        Ok(())
    }
}
