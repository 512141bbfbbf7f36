// src/resolver/events.rs

//! Resolution events and listeners
//!
//! The collector announces every observable step of the traversal as a
//! tagged [`ResolutionEvent`], delivered in algorithm order to each
//! registered [`ResolutionListener`]. Listeners are purely observational:
//! they must not (and cannot) affect the outcome. [`EventLog`] records the
//! sequence for tests and diagnostics; [`TraceListener`] forwards it to
//! `tracing`.

use std::path::PathBuf;

use serde::Serialize;

use crate::artifact::Scope;
use crate::version::Version;

/// One observable step of the resolution traversal
///
/// Artifacts are identified by their display id
/// (`group:artifact:kind:version`) at the moment the event fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResolutionEvent {
    /// A node entered the traversal.
    TestArtifact { artifact: String },
    /// A node was active when visited and would contribute to the result.
    IncludeArtifact { artifact: String },
    /// A node lost conflict resolution to a nearer (or policy-preferred)
    /// contender and was disabled.
    OmitForNearer { omitted: String, kept: String },
    /// A dependency edge was dropped because it would cycle into its own
    /// ancestry.
    OmitForCycle { artifact: String },
    /// A node's scope was widened to the broader scope of a competing
    /// node.
    UpdateScope { artifact: String, scope: Scope },
    /// Widening was suppressed because the narrower-scoped node is a
    /// direct declaration of the root.
    UpdateScopeSuppressed { artifact: String, requested: Scope },
    /// A managed version overrode the node's version.
    ManageVersion { artifact: String, version: Version },
    /// A managed scope overrode the node's scope.
    ManageScope { artifact: String, scope: Scope },
    /// A managed system path was attached to a system-scoped node.
    ManageSystemPath { artifact: String, path: PathBuf },
    /// A concrete version was selected from a range.
    SelectVersionFromRange { artifact: String, version: Version },
    /// Two ranges for one identity were intersected.
    RestrictRange {
        artifact: String,
        restricted: String,
    },
}

/// Observes resolution events in the order they occur
pub trait ResolutionListener {
    fn on_event(&mut self, event: &ResolutionEvent);
}

/// Records every event in order
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ResolutionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog::default()
    }

    pub fn events(&self) -> &[ResolutionEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ResolutionEvent> {
        self.events
    }
}

impl ResolutionListener for EventLog {
    fn on_event(&mut self, event: &ResolutionEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events to `tracing` at debug level
#[derive(Debug, Default)]
pub struct TraceListener;

impl ResolutionListener for TraceListener {
    fn on_event(&mut self, event: &ResolutionEvent) {
        tracing::debug!(?event, "resolution event");
    }
}
