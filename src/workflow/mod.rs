// Linear clinical workflow: stages, step indicator and the navigator that
// gates indicator taps (revisit completed stages, never skip ahead)

pub mod indicator;
pub mod navigator;
pub mod stage;

pub use indicator::{render_indicator, IndicatorRow, IndicatorSegment, SegmentState};
pub use navigator::{NavigationEvent, NavigationOutcome, WorkflowNavigator};
pub use stage::{ParseStageError, WorkflowStage};
