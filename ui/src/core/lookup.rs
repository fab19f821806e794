//! Report lookup state machine: `Idle → Loading → {Found, NotFound}`.
//!
//! A view owns one [`ReportLookup`]. `begin` hands out a ticket and refuses to
//! start while a load is in flight; `complete` settles the state from the
//! loader's result, ignoring tickets from superseded loads. Data-source
//! failures settle as `NotFound` like a plain miss, but keep their reason so
//! logs and the UI can tell them apart.

use super::error::ReportError;
use super::metrics::{compute, DerivedMetrics};
use super::report::{RawReport, ReportCollection};

/// A record together with its derived metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReport {
    pub raw: RawReport,
    pub metrics: DerivedMetrics,
}

impl LoadedReport {
    pub fn new(raw: RawReport) -> Self {
        let metrics = compute(&raw);
        Self { raw, metrics }
    }
}

/// Why a lookup ended without a report.
#[derive(Debug, Clone, PartialEq)]
pub enum MissCause {
    /// The collection loaded but holds no such sample.
    NoMatch,
    /// The collection (or the record) could not be used.
    Unavailable(ReportError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        sample_id: String,
    },
    Found(Box<LoadedReport>),
    NotFound {
        sample_id: String,
        cause: MissCause,
    },
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }

    pub fn report(&self) -> Option<&LoadedReport> {
        match self {
            LookupState::Found(report) => Some(report),
            _ => None,
        }
    }
}

/// Proof that the holder started the current load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    sample_id: String,
}

impl LookupTicket {
    pub fn sample_id(&self) -> &str {
        &self.sample_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLookup {
    state: LookupState,
    generation: u64,
}

impl ReportLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Start loading `sample_id`. `None` while another load is in flight.
    pub fn begin(&mut self, sample_id: &str) -> Option<LookupTicket> {
        if self.state.is_loading() {
            tracing::debug!(sample_id, "lookup already in flight; ignoring");
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = LookupState::Loading {
            sample_id: sample_id.to_string(),
        };
        Some(LookupTicket {
            generation: self.generation,
            sample_id: sample_id.to_string(),
        })
    }

    /// Abandon any in-flight load; its ticket goes stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = LookupState::Idle;
    }

    /// Settle a load using the `/report/:id` route resolution.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        outcome: Result<ReportCollection, ReportError>,
    ) -> &LookupState {
        let resolved = outcome.and_then(|collection| {
            collection
                .find_route(&ticket.sample_id)
                .cloned()
                .ok_or_else(|| ReportError::NotFound {
                    sample_id: ticket.sample_id.clone(),
                })
        });
        self.settle(ticket, resolved)
    }

    /// Settle a load with an already-resolved record (or the reason there is none).
    pub fn settle(
        &mut self,
        ticket: &LookupTicket,
        resolved: Result<RawReport, ReportError>,
    ) -> &LookupState {
        if ticket.generation != self.generation || !self.state.is_loading() {
            tracing::debug!(sample_id = %ticket.sample_id, "dropping stale lookup result");
            return &self.state;
        }

        let sample_id = ticket.sample_id.clone();
        self.state = match resolved.and_then(|raw| raw.validate().map(|()| raw)) {
            Ok(raw) => {
                tracing::info!(%sample_id, "report found");
                LookupState::Found(Box::new(LoadedReport::new(raw)))
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(%sample_id, "no report for sample");
                LookupState::NotFound {
                    sample_id,
                    cause: MissCause::NoMatch,
                }
            }
            Err(err) => {
                tracing::error!(%sample_id, %err, "report data unavailable");
                LookupState::NotFound {
                    sample_id,
                    cause: MissCause::Unavailable(err),
                }
            }
        };
        &self.state
    }

    /// Use a record obtained without loading (the selected-report slot).
    pub fn adopt(&mut self, raw: RawReport) -> &LookupState {
        match self.begin(&raw.sample_id.clone()) {
            Some(ticket) => self.settle(&ticket, Ok(raw)),
            None => &self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::fixtures::{collection, report};

    #[test]
    fn found_computes_metrics() {
        let mut lookup = ReportLookup::new();
        let ticket = lookup.begin("LU0001").unwrap();
        assert!(lookup.state().is_loading());

        let state = lookup.complete(&ticket, Ok(collection()));
        let loaded = state.report().expect("found");
        assert_eq!(loaded.raw.sample_id, "LU0001");
        assert_eq!(loaded.metrics.bio_age, 35.46);
        assert_eq!(loaded.metrics.pace_pr_inverse, 40.0);
    }

    #[test]
    fn unknown_sample_is_not_found() {
        let mut lookup = ReportLookup::new();
        let ticket = lookup.begin("LU9999").unwrap();
        let state = lookup.complete(&ticket, Ok(collection()));
        assert_eq!(
            state,
            &LookupState::NotFound {
                sample_id: "LU9999".into(),
                cause: MissCause::NoMatch,
            }
        );
    }

    #[test]
    fn source_failure_is_not_found_with_reason() {
        let mut lookup = ReportLookup::new();
        let ticket = lookup.begin("LU0001").unwrap();
        let state = lookup.complete(&ticket, Err(ReportError::Timeout { ms: 50 }));
        assert!(matches!(
            state,
            LookupState::NotFound {
                cause: MissCause::Unavailable(ReportError::Timeout { ms: 50 }),
                ..
            }
        ));
    }

    #[test]
    fn invalid_record_is_unavailable() {
        let mut lookup = ReportLookup::new();
        let ticket = lookup.begin("BAD").unwrap();
        let state = lookup.settle(&ticket, Ok(report("BAD", 40.0, 40.0, -1.0, 50.0)));
        assert!(matches!(
            state,
            LookupState::NotFound {
                cause: MissCause::Unavailable(ReportError::InvalidRecord(_)),
                ..
            }
        ));
    }

    #[test]
    fn second_begin_is_refused_while_loading() {
        let mut lookup = ReportLookup::new();
        let first = lookup.begin("LU0001").unwrap();
        assert!(lookup.begin("LU0002").is_none());
        lookup.complete(&first, Ok(collection()));
        assert!(lookup.begin("LU0002").is_some());
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut lookup = ReportLookup::new();
        let first = lookup.begin("LU0001").unwrap();
        lookup.complete(&first, Err(ReportError::Fetch("offline".into())));
        let second = lookup.begin("LU0002").unwrap();

        lookup.complete(&first, Ok(collection()));
        assert!(lookup.state().is_loading());

        lookup.complete(&second, Ok(collection()));
        assert_eq!(lookup.state().report().unwrap().raw.sample_id, "LU0002");
    }

    #[test]
    fn cancel_abandons_the_running_load() {
        let mut lookup = ReportLookup::new();
        let first = lookup.begin("LU0001").unwrap();
        lookup.cancel();
        assert_eq!(lookup.state(), &LookupState::Idle);

        let second = lookup.begin("LU0002").unwrap();
        lookup.complete(&first, Ok(collection()));
        assert!(lookup.state().is_loading());
        lookup.complete(&second, Ok(collection()));
        assert_eq!(lookup.state().report().unwrap().raw.sample_id, "LU0002");
    }

    #[test]
    fn adopt_skips_loading() {
        let mut lookup = ReportLookup::new();
        let state = lookup.adopt(report("LU0003", 28.04, 33.9, 0.78, 91.0));
        assert_eq!(state.report().unwrap().raw.sample_id, "LU0003");
    }
}
