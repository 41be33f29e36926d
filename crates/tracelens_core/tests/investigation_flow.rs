use tracelens_core::{
    ControllerError, DashboardConfig, InvestigationController, InvestigationQuery, Phase,
    SidebarView, SubmitOutcome,
};

const DELAY_MS: u64 = 3_000;

fn controller() -> InvestigationController {
    let config = DashboardConfig::with_delay_ms(DELAY_MS).expect("valid delay");
    let mut controller = InvestigationController::new(config);
    controller.acknowledge_guidelines();
    controller
}

fn finish(controller: &mut InvestigationController, start_ms: i64) {
    controller.submit(start_ms).expect("submit should start");
    assert!(controller.poll(start_ms + DELAY_MS as i64));
}

#[test]
fn blank_submit_is_a_no_op() {
    let mut controller = controller();
    controller.set_query(InvestigationQuery::new("  ", ""));

    assert!(!controller.can_submit());
    assert_eq!(controller.submit(0), Ok(SubmitOutcome::Ignored));
    assert_eq!(controller.phase(), &Phase::Idle);
    assert_eq!(controller.sidebar(), SidebarView::Intro);
}

#[test]
fn submit_enters_loading_and_rejects_second_submit() {
    let mut controller = controller();
    controller.set_email("alice@example.com");

    let outcome = controller.submit(10_000).expect("submit");
    let SubmitOutcome::Started { ready_at_ms, .. } = outcome else {
        panic!("expected started outcome, got {outcome:?}");
    };
    assert_eq!(ready_at_ms, 13_000);
    assert!(controller.is_loading());
    assert!(!controller.can_submit());
    assert_eq!(controller.loading_sources().len(), 3);
    assert_eq!(controller.selected(), None);
    assert!(controller.cards().is_empty());

    assert_eq!(
        controller.submit(10_001),
        Err(ControllerError::InvestigationInFlight)
    );
}

#[test]
fn poll_completes_with_summary_in_sidebar() {
    let mut controller = controller();
    controller.set_email("alice@example.com");
    controller.set_phone("+1 555 0100");
    finish(&mut controller, 0);

    let summary = controller.summary().expect("summary after completion");
    assert_eq!(summary.total_findings, 7);
    assert_eq!(summary.total_relationships, 5);
    assert_eq!(summary.high_risk_count(), 1);
    assert_eq!(summary.severity_counts.medium, 2);
    assert_eq!(summary.severity_counts.low, 2);
    assert_eq!(summary.severity_counts.unrated, 2);
    assert_eq!(summary.completed_at_ms, DELAY_MS as i64);
    assert_eq!(
        summary.sources_checked,
        vec![
            "HaveIBeenPwned API",
            "GitHub Public API",
            "WHOIS Lookup",
            "Carrier Database Lookup",
            "Phone Number Analysis",
        ]
    );

    assert!(matches!(controller.sidebar(), SidebarView::Summary(_)));
}

#[test]
fn select_then_clear_restores_summary_without_touching_results() {
    let mut controller = controller();
    controller.set_email("alice@example.com");
    finish(&mut controller, 0);
    let before = controller.discovery().cloned().expect("results");

    controller.select(4).expect("domain finding is selectable");
    let SidebarView::Details(details) = controller.sidebar() else {
        panic!("selection should show details");
    };
    assert_eq!(details.value, "example.com");
    assert_eq!(details.connections.len(), 1);
    assert_eq!(details.connections[0].label, "belongs_to_domain");
    assert_eq!(
        details.connections[0].other_value.as_deref(),
        Some("alice@example.com")
    );
    assert!(controller.cards()[3].selected);

    controller.clear_selection();
    assert!(matches!(controller.sidebar(), SidebarView::Summary(_)));
    assert_eq!(controller.discovery(), Some(&before));
}

#[test]
fn unknown_selection_is_rejected() {
    let mut controller = controller();
    controller.set_phone("5550100");
    finish(&mut controller, 0);

    assert_eq!(controller.select(99), Err(ControllerError::UnknownFinding(99)));
    assert_eq!(controller.selected(), None);
}

#[test]
fn resubmit_clears_selection_and_replaces_results() {
    let mut controller = controller();
    controller.set_email("alice@example.com");
    finish(&mut controller, 0);
    controller.select(2).expect("select breach");
    let first_run = controller.summary().expect("first summary").run_id;

    controller.set_email("");
    controller.set_phone("5550100");
    controller.submit(5_000).expect("second submit");
    assert_eq!(controller.selected(), None);
    assert!(controller.discovery().is_none());
    assert_eq!(controller.sidebar(), SidebarView::Intro);

    assert!(controller.poll(8_000));
    let summary = controller.summary().expect("second summary");
    assert_ne!(summary.run_id, first_run);
    assert_eq!(summary.total_findings, 3);
    assert_eq!(controller.graph().legend, vec!["registered_in", "served_by"]);
}

#[test]
fn guidelines_modal_reopens_without_disturbing_results() {
    let mut controller = controller();
    controller.set_email("alice@example.com");
    finish(&mut controller, 0);

    controller.open_guidelines();
    assert!(controller.guidelines_open());
    assert!(controller.summary().is_some());
    assert_eq!(
        controller.submit(9_000),
        Err(ControllerError::GuidelinesPending)
    );

    controller.acknowledge_guidelines();
    assert!(matches!(
        controller.submit(9_000),
        Ok(SubmitOutcome::Started { .. })
    ));
}

#[test]
fn timer_completes_even_when_modal_opens_during_loading() {
    let mut controller = controller();
    controller.set_phone("5550100");
    controller.submit(0).expect("submit");
    controller.open_guidelines();

    assert!(controller.poll(DELAY_MS as i64));
    assert!(controller.summary().is_some());
}
