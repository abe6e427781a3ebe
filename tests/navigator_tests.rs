//! Workflow navigator gating tests
//!
//! These tests pin down the indicator contract: any completed or current
//! stage can be revisited, later stages can never be reached by a tap, and
//! finishing a referral leaves no history behind.

use carotid_screen::routing::Route;
use carotid_screen::workflow::{
    render_indicator, NavigationOutcome, SegmentState, WorkflowNavigator, WorkflowStage,
};

fn navigator_at(stage: WorkflowStage) -> WorkflowNavigator {
    let mut navigator = WorkflowNavigator::new();
    for _ in 1..stage.ordinal() {
        navigator.complete_stage();
    }
    assert_eq!(navigator.current_stage(), stage);
    navigator
}

#[test]
fn test_every_stage_pair_obeys_reachability_rule() {
    for current in WorkflowStage::ALL {
        for target in WorkflowStage::ALL {
            let mut navigator = navigator_at(current);
            let reachable = navigator.is_reachable(target);
            assert_eq!(reachable, target.ordinal() <= current.ordinal());

            let outcome = navigator.request_navigate(target);
            if reachable {
                assert_eq!(navigator.current_stage(), target, "{current} -> {target}");
                assert_eq!(navigator.current_route(), Route::for_stage(target));
            } else {
                assert_eq!(outcome, NavigationOutcome::Rejected { current, target });
                assert_eq!(navigator.current_stage(), current, "{current} -> {target}");
            }
        }
    }
}

#[test]
fn test_history_never_holds_more_than_root_and_current_stage() {
    for current in WorkflowStage::ALL {
        for target in WorkflowStage::ALL {
            let mut navigator = navigator_at(current);
            navigator.request_navigate(target);

            let routes = navigator.history().routes();
            assert_eq!(routes[0], Route::Dashboard);
            assert!(routes.len() <= 2, "{routes:?}");
        }
    }
}

#[test]
fn test_results_to_scan_clears_analysis_and_results_from_history() {
    let mut navigator = navigator_at(WorkflowStage::Results);

    let outcome = navigator.request_navigate(WorkflowStage::Scan);

    assert_eq!(
        outcome,
        NavigationOutcome::Navigated {
            from: WorkflowStage::Results,
            to: WorkflowStage::Scan
        }
    );
    assert_eq!(
        navigator.history().routes(),
        &[Route::Dashboard, Route::ScanCapture]
    );
}

#[test]
fn test_scan_to_referral_is_rejected() {
    let mut navigator = navigator_at(WorkflowStage::Scan);

    navigator.request_navigate(WorkflowStage::Referral);

    assert_eq!(navigator.current_stage(), WorkflowStage::Scan);
    assert_eq!(
        navigator.history().routes(),
        &[Route::Dashboard, Route::ScanCapture]
    );
}

#[test]
fn test_referral_completion_cycles_to_fresh_dashboard() {
    let mut navigator = navigator_at(WorkflowStage::Referral);

    navigator.complete_stage();

    assert_eq!(navigator.current_stage(), WorkflowStage::Dashboard);
    assert_eq!(navigator.history().routes(), &[Route::Dashboard]);
    assert_eq!(navigator.back(), None);

    // A second screening starts cleanly
    navigator.complete_stage();
    assert_eq!(navigator.current_stage(), WorkflowStage::Scan);
}

#[test]
fn test_indicator_has_five_segments_for_every_stage() {
    for current in WorkflowStage::ALL {
        let row = render_indicator(current);
        assert_eq!(row.segments.len(), 5);

        let labels: Vec<&str> = row.segments.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Scan", "Analysis", "Results", "Referral"]
        );

        let active: Vec<WorkflowStage> = row
            .segments
            .iter()
            .filter(|s| s.state == SegmentState::Active)
            .map(|s| s.stage)
            .collect();
        assert_eq!(active, vec![current]);

        for segment in &row.segments {
            assert_eq!(segment.tappable, segment.state != SegmentState::Locked);
        }
    }
}
