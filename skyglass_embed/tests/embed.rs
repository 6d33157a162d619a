// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `skyglass_embed` crate.
//!
//! These drive the full embedding flow (configuration, planning, boot, and
//! survey-control forwarding) against the recording reference viewer, and
//! assert on the attach call and the exact ops a page would send to the
//! widget.

use skyglass_embed::{EmbedConfig, EmbedOptions, boot, forward_survey_change, plan};
use skyglass_viewer::{CatalogSource, ClickAction, MarkerShape, ViewerOp};
use skyglass_viewer_ref::RefViewer;

/// Boot the default demonstration page against the reference viewer.
fn boot_default(config: Option<&EmbedConfig>) -> RefViewer {
    let plan = plan(&EmbedOptions::default(), config);
    boot(&plan, |container, options| {
        Ok::<_, core::convert::Infallible>(RefViewer::attach(container, options))
    })
    .unwrap()
}

#[test]
fn boot_attaches_exactly_once_to_the_expected_container() {
    let viewer = boot_default(None);

    assert_eq!(viewer.attach_count(), 1);
    assert_eq!(viewer.container(), "aladin-lite-div");
}

#[test]
fn boot_without_config_shows_the_default_survey() {
    let viewer = boot_default(None);

    assert_eq!(viewer.state().survey, "P/DSS2/color");
    assert_eq!(viewer.state().fov_deg, 1.5);
    assert_eq!(viewer.state().target, "M 20");
    // The startup ops are overlays only; no survey setter call happens at boot.
    assert!(
        viewer
            .ops()
            .iter()
            .all(|op| !matches!(op, ViewerOp::SetImageSurvey(_)))
    );
}

#[test]
fn survey_change_forwards_the_exact_value_once() {
    let mut viewer = boot_default(None);
    viewer.clear_events();

    forward_survey_change(&mut viewer, "P/DSS2/red");

    assert_eq!(viewer.ops().len(), 1);
    let ViewerOp::SetImageSurvey(survey) = &viewer.ops()[0] else {
        panic!("expected a survey setter call");
    };
    assert_eq!(*survey, "P/DSS2/red");
    assert_eq!(viewer.state().survey, "P/DSS2/red");
}

#[test]
fn each_survey_change_issues_one_setter_call() {
    let mut viewer = boot_default(None);
    viewer.clear_events();

    forward_survey_change(&mut viewer, "P/allWISE/color");
    forward_survey_change(&mut viewer, "P/DSS2/color");

    let surveys: Vec<_> = viewer
        .ops()
        .iter()
        .filter_map(|op| match op {
            ViewerOp::SetImageSurvey(survey) => Some(survey.as_str()),
            ViewerOp::AddCatalog(_) => None,
        })
        .collect();
    assert_eq!(surveys, ["P/allWISE/color", "P/DSS2/color"]);
}

#[test]
fn embedded_survey_replaces_the_default() {
    let config = EmbedConfig::from_json(r#""P/XMM/color""#).unwrap();
    let viewer = boot_default(Some(&config));

    assert_eq!(viewer.state().survey, "P/XMM/color");
    // The rest of the pointing still comes from the page defaults.
    assert_eq!(viewer.state().target, "M 20");
    assert_eq!(viewer.state().fov_deg, 1.5);
}

#[test]
fn object_config_overrides_pointing_too() {
    let config =
        EmbedConfig::from_json(r#"{"survey": "P/DSS2/red", "target": "M 31", "fov": 3.0}"#)
            .unwrap();
    let viewer = boot_default(Some(&config));

    assert_eq!(viewer.state().survey, "P/DSS2/red");
    assert_eq!(viewer.state().target, "M 31");
    assert_eq!(viewer.state().fov_deg, 3.0);
}

#[test]
fn malformed_config_fails_parsing_and_defaults_still_boot() {
    // The page bootstrap treats a parse error as "no configuration".
    let parsed = EmbedConfig::from_json("{not json");
    assert!(parsed.is_err());

    let viewer = boot_default(parsed.ok().as_ref());
    assert_eq!(viewer.state().survey, "P/DSS2/color");
}

#[test]
fn startup_overlays_carry_the_demonstration_parameters() {
    let viewer = boot_default(None);

    assert_eq!(viewer.state().catalogs.len(), 2);

    let simbad = &viewer.state().catalogs[0];
    let CatalogSource::Simbad { target, radius_deg } = &simbad.source else {
        panic!("expected the first overlay to be a Simbad cone");
    };
    assert_eq!(target, "M 20");
    assert_eq!(*radius_deg, 0.2);
    assert_eq!(simbad.style.shape, Some(MarkerShape::Plus));
    assert_eq!(simbad.style.color.as_deref(), Some("#5d5"));
    assert_eq!(simbad.style.on_click, Some(ClickAction::ShowTable));
    assert_eq!(simbad.style.source_size, None);

    let vizier = &viewer.state().catalogs[1];
    let CatalogSource::VizieR {
        table,
        target,
        radius_deg,
    } = &vizier.source
    else {
        panic!("expected the second overlay to be a VizieR query");
    };
    assert_eq!(table, "J/ApJ/562/446/table13");
    assert_eq!(target, "M 20");
    assert_eq!(*radius_deg, 0.2);
    assert_eq!(vizier.style.shape, Some(MarkerShape::Square));
    assert_eq!(vizier.style.source_size, Some(8));
    assert_eq!(vizier.style.color.as_deref(), Some("red"));
    assert_eq!(vizier.style.on_click, Some(ClickAction::ShowPopup));
}

#[test]
fn pages_without_overlays_only_attach() {
    let options = EmbedOptions {
        overlays: Vec::new(),
        ..EmbedOptions::default()
    };
    let plan = plan(&options, None);
    let viewer = boot(&plan, |container, viewer_options| {
        Ok::<_, core::convert::Infallible>(RefViewer::attach(container, viewer_options))
    })
    .unwrap();

    assert_eq!(viewer.attach_count(), 1);
    assert!(viewer.ops().is_empty());
    assert!(viewer.state().catalogs.is_empty());
}

#[test]
fn attach_failure_is_returned_to_the_caller() {
    let plan = plan(&EmbedOptions::default(), None);
    let result: Result<RefViewer, &str> = boot(&plan, |_, _| Err("missing container"));
    assert_eq!(result.unwrap_err(), "missing container");
}
