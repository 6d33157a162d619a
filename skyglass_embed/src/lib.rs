// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skyglass_embed --heading-base-level=0

//! Skyglass Embed: the page-embedding model for the Skyglass viewer.
//!
//! A page that embeds the sky viewer makes a handful of decisions: which
//! container element to attach to, which imagery survey to show first,
//! where to point, which catalog overlays to request, and which form
//! control drives survey switching. This crate captures all of those
//! decisions as plain data and pure functions, so the whole embedding can
//! be exercised natively against the recording reference viewer while the
//! browser crate (`skyglass_aladin`) stays a thin adapter.
//!
//! The pieces, in the order a page uses them:
//!
//! - [`EmbedOptions`] is the page policy. [`EmbedOptions::default`] mirrors
//!   the Trifid Nebula demonstration page this embedding was written for.
//! - [`EmbedConfig::from_json`] parses the optional JSON configuration a
//!   server renders into the page (a bare string naming the survey, or an
//!   object with optional `survey`, `target`, and `fov` fields).
//! - [`plan`] merges options and configuration into an [`EmbedPlan`]: the
//!   container id, the attach-time [`ViewerOptions`], and the startup ops.
//! - [`boot`] attaches the viewer exactly once and applies the startup ops.
//! - [`forward_survey_change`] is the change-event policy: the control's
//!   value goes to the widget's survey setter verbatim, once per change.
//!
//! ## Minimal example
//!
//! ```rust
//! use skyglass_embed::{EmbedConfig, EmbedOptions, plan};
//!
//! // Server-rendered pages may embed a survey choice; absent or malformed
//! // configuration falls back to the page defaults.
//! let config = EmbedConfig::from_json(r#""P/DSS2/red""#).unwrap();
//! let plan = plan(&EmbedOptions::default(), Some(&config));
//!
//! assert_eq!(plan.container_id, "aladin-lite-div");
//! assert_eq!(plan.viewer.survey, "P/DSS2/red");
//! // The demonstration page requests its two catalog overlays at startup.
//! assert_eq!(plan.startup_ops.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ViewerOptions`]: skyglass_viewer::ViewerOptions

#![no_std]

extern crate alloc;

mod config;
mod options;
mod plan;

pub use config::{ConfigError, EmbedConfig};
pub use options::{
    CONFIG_ELEMENT_ID, DEFAULT_CONTAINER_ID, DEFAULT_FOV_DEG, DEFAULT_SURVEY, DEFAULT_TARGET,
    EmbedOptions, SURVEY_CONTROL_NAME, demo_overlays,
};
pub use plan::{EmbedPlan, boot, forward_survey_change, plan};
