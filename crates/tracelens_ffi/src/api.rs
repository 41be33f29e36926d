//! FFI use-case API for the dashboard UI.
//!
//! # Responsibility
//! - Expose one process-wide dashboard session to Dart via FRB.
//! - Flatten core views into string-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutating call returns enough state for the UI to re-render.
//! - The session is the only shared state and is guarded by one mutex.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracelens_core::catalog::guidelines::INTRO_TEXT;
use tracelens_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, now_epoch_ms,
    ping as ping_inner, render_guidelines, ConnectionDirection, DashboardConfig, FindingCard,
    FindingDetails, GraphNode, InvestigationController, InvestigationSummary, Phase, SidebarView,
    SubmitOutcome,
};

static DASHBOARD: OnceLock<Mutex<InvestigationController>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Plain-text ethical guidelines for the modal.
#[flutter_rust_bridge::frb(sync)]
pub fn guidelines_text() -> String {
    render_guidelines()
}

/// One finding card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: u32,
    pub category: String,
    pub icon: String,
    pub value: String,
    pub description: String,
    pub source: String,
    pub timestamp_ms: i64,
    pub confidence: u8,
    /// `strong|moderate|weak`.
    pub confidence_band: String,
    pub border: String,
    pub background: String,
    pub text: String,
    pub has_url: bool,
    pub selected: bool,
}

/// One graph node; layout is left to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNodeItem {
    pub id: u32,
    pub label: String,
    pub icon: String,
    pub border: String,
    pub selected: bool,
}

/// One connection line in the details panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionItem {
    pub label: String,
    /// `outgoing|incoming`.
    pub direction: String,
    pub strength: f32,
    pub other_id: u32,
    pub other_value: String,
}

/// Details panel payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsItem {
    pub id: u32,
    pub value: String,
    pub category: String,
    pub icon: String,
    pub source: String,
    pub description: String,
    pub timestamp_ms: i64,
    pub confidence: u8,
    pub severity: Option<String>,
    pub url: Option<String>,
    pub connections: Vec<ConnectionItem>,
}

/// Summary panel payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub run_id: String,
    pub total_findings: u32,
    pub total_relationships: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub high_risk: u32,
    pub sources_checked: Vec<String>,
    pub completed_at_ms: i64,
}

/// Sidebar envelope; exactly one optional payload matches `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarItem {
    /// `details|summary|intro`.
    pub kind: String,
    pub details: Option<DetailsItem>,
    pub summary: Option<SummaryItem>,
    pub intro_text: Option<String>,
}

/// Full render state of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// `idle|loading|results`.
    pub phase: String,
    pub guidelines_open: bool,
    pub can_submit: bool,
    pub email: String,
    pub phone: String,
    pub remaining_ms: Option<u64>,
    pub loading_sources: Vec<String>,
    pub cards: Vec<CardItem>,
    pub graph_nodes: Vec<GraphNodeItem>,
    pub graph_legend: Vec<String>,
    pub sidebar: SidebarItem,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardActionResponse {
    pub ok: bool,
    /// Run id when a submit started an investigation.
    pub run_id: Option<String>,
    pub message: String,
    pub snapshot: DashboardSnapshot,
}

/// Replaces both query form fields.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_set_query(email: String, phone: String) -> DashboardSnapshot {
    let mut session = lock_dashboard();
    session.set_email(email);
    session.set_phone(phone);
    snapshot_of(&session, now_epoch_ms())
}

/// Mirrors the submit control's enabled state.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_can_submit() -> bool {
    lock_dashboard().can_submit()
}

/// Starts an investigation for the current form.
///
/// # FFI contract
/// - Blank form: `ok=true`, no run id, state unchanged.
/// - Rejections (in flight, guidelines pending) return `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_submit() -> DashboardActionResponse {
    submit_on(&mut lock_dashboard(), now_epoch_ms())
}

/// Completes the in-flight investigation once its delay has elapsed.
///
/// The UI calls this on a timer while `phase == loading`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_poll() -> DashboardSnapshot {
    let now_ms = now_epoch_ms();
    let mut session = lock_dashboard();
    session.poll(now_ms);
    snapshot_of(&session, now_ms)
}

/// Selects one finding by id.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_select(finding_id: u32) -> DashboardActionResponse {
    select_on(&mut lock_dashboard(), finding_id, now_epoch_ms())
}

#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_clear_selection() -> DashboardSnapshot {
    let mut session = lock_dashboard();
    session.clear_selection();
    snapshot_of(&session, now_epoch_ms())
}

#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_open_guidelines() -> DashboardSnapshot {
    let mut session = lock_dashboard();
    session.open_guidelines();
    snapshot_of(&session, now_epoch_ms())
}

#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_acknowledge_guidelines() -> DashboardSnapshot {
    let mut session = lock_dashboard();
    session.acknowledge_guidelines();
    snapshot_of(&session, now_epoch_ms())
}

/// Returns current render state without mutating it.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot() -> DashboardSnapshot {
    snapshot_of(&lock_dashboard(), now_epoch_ms())
}

fn lock_dashboard() -> MutexGuard<'static, InvestigationController> {
    DASHBOARD
        .get_or_init(|| Mutex::new(InvestigationController::new(resolve_config())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn resolve_config() -> DashboardConfig {
    DashboardConfig::from_env().unwrap_or_else(|err| {
        warn!("event=config_fallback module=ffi status=error reason={err}");
        DashboardConfig::default()
    })
}

fn submit_on(session: &mut InvestigationController, now_ms: i64) -> DashboardActionResponse {
    let (ok, run_id, message) = match session.submit(now_ms) {
        Ok(SubmitOutcome::Started { run_id, .. }) => {
            (true, Some(run_id.to_string()), "Investigation started.".to_string())
        }
        Ok(SubmitOutcome::Ignored) => (
            true,
            None,
            "Enter an email address or phone number.".to_string(),
        ),
        Err(err) => (false, None, format!("dashboard_submit failed: {err}")),
    };
    DashboardActionResponse {
        ok,
        run_id,
        message,
        snapshot: snapshot_of(session, now_ms),
    }
}

fn select_on(
    session: &mut InvestigationController,
    finding_id: u32,
    now_ms: i64,
) -> DashboardActionResponse {
    let (ok, message) = match session.select(finding_id) {
        Ok(()) => (true, "Finding selected.".to_string()),
        Err(err) => (false, format!("dashboard_select failed: {err}")),
    };
    DashboardActionResponse {
        ok,
        run_id: None,
        message,
        snapshot: snapshot_of(session, now_ms),
    }
}

fn snapshot_of(session: &InvestigationController, now_ms: i64) -> DashboardSnapshot {
    let graph = session.graph();
    DashboardSnapshot {
        phase: phase_label(session.phase()).to_string(),
        guidelines_open: session.guidelines_open(),
        can_submit: session.can_submit(),
        email: session.form().email.clone(),
        phone: session.form().phone.clone(),
        remaining_ms: session.remaining_ms(now_ms),
        loading_sources: session
            .loading_sources()
            .into_iter()
            .map(|entry| entry.name.to_string())
            .collect(),
        cards: session.cards().into_iter().map(to_card_item).collect(),
        graph_nodes: graph.nodes.into_iter().map(to_graph_node_item).collect(),
        graph_legend: graph.legend,
        sidebar: to_sidebar_item(session.sidebar()),
    }
}

fn phase_label(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Loading(_) => "loading",
        Phase::Results(_) => "results",
    }
}

fn to_card_item(card: FindingCard) -> CardItem {
    CardItem {
        id: card.id,
        category: card.descriptor.label.to_string(),
        icon: card.descriptor.icon.to_string(),
        value: card.value,
        description: card.description,
        source: card.source,
        timestamp_ms: card.timestamp_ms,
        confidence: card.confidence,
        confidence_band: card.confidence_band.as_str().to_string(),
        border: card.palette.border.to_string(),
        background: card.palette.background.to_string(),
        text: card.palette.text.to_string(),
        has_url: card.has_url,
        selected: card.selected,
    }
}

fn to_graph_node_item(node: GraphNode) -> GraphNodeItem {
    GraphNodeItem {
        id: node.id,
        label: node.label,
        icon: node.icon.to_string(),
        border: node.palette.border.to_string(),
        selected: node.selected,
    }
}

fn to_sidebar_item(view: SidebarView) -> SidebarItem {
    match view {
        SidebarView::Details(details) => SidebarItem {
            kind: "details".to_string(),
            details: Some(to_details_item(details)),
            summary: None,
            intro_text: None,
        },
        SidebarView::Summary(summary) => SidebarItem {
            kind: "summary".to_string(),
            details: None,
            summary: Some(to_summary_item(&summary)),
            intro_text: None,
        },
        SidebarView::Intro => SidebarItem {
            kind: "intro".to_string(),
            details: None,
            summary: None,
            intro_text: Some(INTRO_TEXT.to_string()),
        },
    }
}

fn to_details_item(details: FindingDetails) -> DetailsItem {
    DetailsItem {
        id: details.id,
        value: details.value,
        category: details.category.as_str().to_string(),
        icon: details.descriptor.icon.to_string(),
        source: details.source,
        description: details.description,
        timestamp_ms: details.timestamp_ms,
        confidence: details.confidence,
        severity: details.severity.map(|severity| severity.as_str().to_string()),
        url: details.url,
        connections: details
            .connections
            .into_iter()
            .map(|line| ConnectionItem {
                label: line.label,
                direction: match line.direction {
                    ConnectionDirection::Outgoing => "outgoing",
                    ConnectionDirection::Incoming => "incoming",
                }
                .to_string(),
                strength: line.strength,
                other_id: line.other_id,
                other_value: line.other_value.unwrap_or_default(),
            })
            .collect(),
    }
}

fn to_summary_item(summary: &InvestigationSummary) -> SummaryItem {
    let counts = summary.severity_counts;
    SummaryItem {
        run_id: summary.run_id.to_string(),
        total_findings: to_u32(summary.total_findings),
        total_relationships: to_u32(summary.total_relationships),
        critical: to_u32(counts.critical),
        high: to_u32(counts.high),
        medium: to_u32(counts.medium),
        low: to_u32(counts.low),
        high_risk: to_u32(summary.high_risk_count()),
        sources_checked: summary.sources_checked.clone(),
        completed_at_ms: summary.completed_at_ms,
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
