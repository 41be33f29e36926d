//! Investigation state controller.
//!
//! # Responsibility
//! - Coordinate the query -> loading -> results lifecycle.
//! - Own selection and guidelines-modal state for the dashboard.
//!
//! # Invariants
//! - Selection only exists in the results phase, so it is always empty
//!   while idle or loading.
//! - At most one investigation is in flight; a second submit is rejected,
//!   never queued or cancelled.
//! - Selecting never mutates findings or relationships.
//! - Results are replaced wholesale; nothing accumulates across runs.

use crate::catalog::sources::{sources_for, SourceEntry};
use crate::config::DashboardConfig;
use crate::display::views::{
    finding_cards, graph_view, sidebar_view, FindingCard, GraphView, SidebarView,
};
use crate::generator::mock::{generate_findings, Discovery};
use crate::model::finding::FindingId;
use crate::model::query::InvestigationQuery;
use crate::model::summary::{InvestigationId, InvestigationSummary};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// State of an investigation waiting on the simulated delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub run_id: InvestigationId,
    pub query: InvestigationQuery,
    pub started_at_ms: i64,
    pub ready_at_ms: i64,
}

/// State of a finished investigation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsState {
    pub run_id: InvestigationId,
    pub query: InvestigationQuery,
    pub discovery: Discovery,
    pub summary: InvestigationSummary,
    pub selected: Option<FindingId>,
}

/// Lifecycle phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading(LoadingState),
    Results(ResultsState),
}

/// Result of a submit request that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields were blank; nothing changed.
    Ignored,
    /// A new investigation started.
    Started {
        run_id: InvestigationId,
        ready_at_ms: i64,
    },
}

/// Rejected controller transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Submit while a previous investigation is still loading.
    InvestigationInFlight,
    /// Submit while the guidelines modal awaits acknowledgement.
    GuidelinesPending,
    /// Selection requested without results.
    NoResults,
    /// Selection of an id absent from current results.
    UnknownFinding(FindingId),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvestigationInFlight => write!(f, "an investigation is already in progress"),
            Self::GuidelinesPending => {
                write!(f, "ethical guidelines must be acknowledged first")
            }
            Self::NoResults => write!(f, "no investigation results to select from"),
            Self::UnknownFinding(id) => write!(f, "finding not found: {id}"),
        }
    }
}

impl Error for ControllerError {}

/// Explicit state container for one dashboard session.
#[derive(Debug, Clone)]
pub struct InvestigationController {
    config: DashboardConfig,
    form: InvestigationQuery,
    phase: Phase,
    guidelines_open: bool,
}

impl InvestigationController {
    /// Creates an idle controller with the guidelines modal open.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            form: InvestigationQuery::default(),
            phase: Phase::Idle,
            guidelines_open: true,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn form(&self) -> &InvestigationQuery {
        &self.form
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.form.phone = phone.into();
    }

    /// Replaces both form fields.
    pub fn set_query(&mut self, query: InvestigationQuery) {
        self.form = query;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Mirrors the submit control's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.form.is_empty()
    }

    pub fn guidelines_open(&self) -> bool {
        self.guidelines_open
    }

    /// Shows the guidelines modal; the lifecycle phase is untouched.
    pub fn open_guidelines(&mut self) {
        self.guidelines_open = true;
    }

    pub fn acknowledge_guidelines(&mut self) {
        if self.guidelines_open {
            info!("event=guidelines_acknowledged module=investigation status=ok");
        }
        self.guidelines_open = false;
    }

    /// Starts an investigation for the current form values.
    ///
    /// # Contract
    /// - Blank form: returns `Ignored`, state unchanged.
    /// - Otherwise clears selection and prior results and enters loading with
    ///   deadline `now_ms + delay_ms`.
    ///
    /// # Errors
    /// - `InvestigationInFlight` while loading.
    /// - `GuidelinesPending` while the guidelines modal is open.
    pub fn submit(&mut self, now_ms: i64) -> Result<SubmitOutcome, ControllerError> {
        if self.is_loading() {
            return Err(ControllerError::InvestigationInFlight);
        }
        if self.guidelines_open {
            return Err(ControllerError::GuidelinesPending);
        }

        let query = self.form.normalized();
        if query.is_empty() {
            debug!("event=investigation_ignored module=investigation reason=empty_query");
            return Ok(SubmitOutcome::Ignored);
        }

        let run_id = Uuid::new_v4();
        let ready_at_ms = now_ms.saturating_add(delay_as_ms(self.config.delay_ms));
        info!(
            "event=investigation_start module=investigation status=ok run_id={} email_present={} phone_present={} delay_ms={}",
            run_id,
            query.has_email(),
            query.has_phone(),
            self.config.delay_ms
        );

        self.phase = Phase::Loading(LoadingState {
            run_id,
            query,
            started_at_ms: now_ms,
            ready_at_ms,
        });
        Ok(SubmitOutcome::Started {
            run_id,
            ready_at_ms,
        })
    }

    /// Completes the in-flight investigation once its deadline has passed.
    ///
    /// Returns `true` when this call moved the controller into results.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        let Phase::Loading(loading) = &self.phase else {
            return false;
        };
        if now_ms < loading.ready_at_ms {
            return false;
        }

        let run_id = loading.run_id;
        let query = loading.query.clone();
        let discovery = generate_findings(&query, now_ms);
        let summary = InvestigationSummary::from_results(
            run_id,
            &discovery.findings,
            &discovery.relationships,
            now_ms,
        );
        info!(
            "event=investigation_complete module=investigation status=ok run_id={} findings={} relationships={} high_risk={}",
            run_id,
            summary.total_findings,
            summary.total_relationships,
            summary.high_risk_count()
        );

        self.phase = Phase::Results(ResultsState {
            run_id,
            query,
            discovery,
            summary,
            selected: None,
        });
        true
    }

    /// Milliseconds left before `poll` can complete, if loading.
    pub fn remaining_ms(&self, now_ms: i64) -> Option<u64> {
        match &self.phase {
            Phase::Loading(loading) => {
                Some(u64::try_from(loading.ready_at_ms.saturating_sub(now_ms)).unwrap_or(0))
            }
            _ => None,
        }
    }

    /// Submits and blocks the calling thread until results are in.
    ///
    /// `clock` returns the current Unix epoch milliseconds.
    pub fn run_to_completion(
        &mut self,
        clock: impl Fn() -> i64,
    ) -> Result<SubmitOutcome, ControllerError> {
        let outcome = self.submit(clock())?;
        if let SubmitOutcome::Started { .. } = outcome {
            while !self.poll(clock()) {
                let wait_ms = self.remaining_ms(clock()).unwrap_or(0).max(1);
                std::thread::sleep(Duration::from_millis(wait_ms));
            }
        }
        Ok(outcome)
    }

    /// Selects one finding of the current results.
    ///
    /// # Errors
    /// - `NoResults` outside the results phase.
    /// - `UnknownFinding` for ids absent from the results.
    pub fn select(&mut self, id: FindingId) -> Result<(), ControllerError> {
        let Phase::Results(results) = &mut self.phase else {
            return Err(ControllerError::NoResults);
        };
        if results.discovery.finding(id).is_none() {
            return Err(ControllerError::UnknownFinding(id));
        }
        results.selected = Some(id);
        debug!(
            "event=selection_changed module=investigation run_id={} finding_id={}",
            results.run_id, id
        );
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if let Phase::Results(results) = &mut self.phase {
            results.selected = None;
        }
    }

    pub fn selected(&self) -> Option<FindingId> {
        self.results().and_then(|results| results.selected)
    }

    pub fn results(&self) -> Option<&ResultsState> {
        match &self.phase {
            Phase::Results(results) => Some(results),
            _ => None,
        }
    }

    pub fn discovery(&self) -> Option<&Discovery> {
        self.results().map(|results| &results.discovery)
    }

    pub fn summary(&self) -> Option<&InvestigationSummary> {
        self.results().map(|results| &results.summary)
    }

    /// Sources shown as "checking" while loading; empty otherwise.
    pub fn loading_sources(&self) -> Vec<SourceEntry> {
        match &self.phase {
            Phase::Loading(loading) => sources_for(&loading.query),
            _ => Vec::new(),
        }
    }

    pub fn cards(&self) -> Vec<FindingCard> {
        self.results()
            .map(|results| finding_cards(&results.discovery, results.selected))
            .unwrap_or_default()
    }

    pub fn graph(&self) -> GraphView {
        self.results()
            .map(|results| graph_view(&results.discovery, results.selected))
            .unwrap_or_default()
    }

    pub fn sidebar(&self) -> SidebarView {
        match self.results() {
            Some(results) => sidebar_view(
                &results.discovery,
                results.selected,
                Some(&results.summary),
            ),
            None => SidebarView::Intro,
        }
    }
}

impl Default for InvestigationController {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

/// Current Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

fn delay_as_ms(delay_ms: u64) -> i64 {
    i64::try_from(delay_ms).unwrap_or(i64::MAX)
}
