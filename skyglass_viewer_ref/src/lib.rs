// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skyglass_viewer_ref --heading-base-level=0

//! Skyglass Viewer Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`SkyViewer`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a viewer:
//! - It does **not** render imagery or markers.
//! - It does **not** contact any catalog service.
//! - It is intended primarily for tests and debugging that want to assert
//!   on the attach call, the applied ops, and the viewer state at the time
//!   each op was applied.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use skyglass_viewer::{CatalogSpec, SkyViewer, SurveyId, ViewerOp, ViewerOptions};

/// Snapshot of the viewer state the recorded ops have built up.
///
/// The widget itself owns the real display state; this snapshot only mirrors
/// what the embedding has asked for so far.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// Currently requested imagery survey.
    pub survey: SurveyId,
    /// Field of view in degrees, as requested at attach time.
    pub fov_deg: f64,
    /// Target the viewer was asked to center on.
    pub target: String,
    /// Catalog overlays requested so far, in request order.
    pub catalogs: Vec<CatalogSpec>,
}

impl ViewerState {
    fn from_options(options: &ViewerOptions) -> Self {
        Self {
            survey: options.survey.clone(),
            fov_deg: options.fov_deg,
            target: options.target.clone(),
            catalogs: Vec::new(),
        }
    }
}

/// Event recorded by the reference viewer.
#[derive(Clone, Debug)]
pub enum Event {
    /// The viewer was attached to a page container.
    Attached {
        /// Container identifier the viewer was attached against.
        container: String,
        /// Options the viewer was attached with.
        options: ViewerOptions,
    },
    /// An operation was applied.
    Op {
        /// The operation that was applied.
        op: ViewerOp,
        /// Snapshot after applying the operation.
        state: ViewerState,
    },
}

/// Simple reference implementation of the viewer interface.
///
/// This viewer:
/// - Records the attach call with its container and options,
/// - Tracks the requested viewer state as ops are applied,
/// - Records high-level [`Event`]s in application order.
#[derive(Clone, Debug)]
pub struct RefViewer {
    container: String,
    events: Vec<Event>,
    ops: Vec<ViewerOp>,
    state: ViewerState,
}

impl RefViewer {
    /// Attach a reference viewer, recording the attach event.
    ///
    /// This mirrors the attach constructors of real backends; the container
    /// is whatever identifier the embedding resolved, recorded verbatim.
    #[must_use]
    pub fn attach(container: impl Into<String>, options: &ViewerOptions) -> Self {
        let container = container.into();
        let state = ViewerState::from_options(options);
        let events = vec![Event::Attached {
            container: container.clone(),
            options: options.clone(),
        }];
        Self {
            container,
            events,
            ops: Vec::new(),
            state,
        }
    }

    /// Returns the container identifier this viewer was attached against.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of the applied ops, in order.
    #[must_use]
    pub fn ops(&self) -> &[ViewerOp] {
        &self.ops
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Number of `Attached` events currently recorded.
    ///
    /// `1` for a freshly attached viewer, `0` once
    /// [`RefViewer::clear_events`] has discarded the recording; exposed so
    /// tests can assert the attach happened exactly once.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Attached { .. }))
            .count()
    }

    /// Clears all recorded events and ops, including the attach event, but
    /// keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl SkyViewer for RefViewer {
    fn apply(&mut self, op: ViewerOp) {
        match &op {
            ViewerOp::SetImageSurvey(survey) => self.state.survey = survey.clone(),
            ViewerOp::AddCatalog(spec) => self.state.catalogs.push(spec.clone()),
        }

        self.ops.push(op.clone());
        self.events.push(Event::Op {
            op,
            state: self.state.clone(),
        });
    }
}
