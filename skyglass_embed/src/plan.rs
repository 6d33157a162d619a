// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boot planning: merging defaults with configuration and driving a viewer.

use alloc::string::String;
use alloc::vec::Vec;

use skyglass_viewer::{SkyViewer, SurveyId, ViewerOp, ViewerOptions};

use crate::config::{EmbedConfig, sanitize_fov};
use crate::options::EmbedOptions;

/// Everything the page bootstrap needs to bring the viewer up.
///
/// A plan is pure data: the container to attach to, the options for the
/// attach call, and the ops to apply immediately afterwards. Producing it
/// involves no DOM and no widget, so plans are asserted on directly in
/// tests.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedPlan {
    /// Id of the container element the viewer attaches to.
    pub container_id: String,
    /// Options for the attach call.
    pub viewer: ViewerOptions,
    /// Ops applied immediately after attaching, in order.
    pub startup_ops: Vec<ViewerOp>,
}

/// Merge the page options with the optional embedded configuration.
///
/// Configured values override the page defaults field by field: the survey
/// replaces the default survey, and a configured target or field of view
/// replaces the default pointing. A field of view that is not finite and
/// positive is ignored (the widget would reject it); accepted values are
/// clamped to the full sphere. The startup ops request the page's overlays
/// in order.
#[must_use]
pub fn plan(options: &EmbedOptions, config: Option<&EmbedConfig>) -> EmbedPlan {
    let mut viewer = ViewerOptions {
        survey: options.survey.clone(),
        fov_deg: options.fov_deg,
        target: options.target.clone(),
    };

    if let Some(config) = config {
        if let Some(survey) = &config.survey {
            viewer.survey = survey.clone();
        }
        if let Some(target) = &config.target {
            viewer.target = target.clone();
        }
        if let Some(fov) = config.fov_deg.and_then(sanitize_fov) {
            viewer.fov_deg = fov;
        }
    }

    let startup_ops = options
        .overlays
        .iter()
        .cloned()
        .map(ViewerOp::AddCatalog)
        .collect();

    EmbedPlan {
        container_id: options.container_id.clone(),
        viewer,
        startup_ops,
    }
}

/// Attach the viewer exactly once and apply the plan's startup ops.
///
/// `attach` receives the plan's container id and viewer options and is
/// called exactly once; backends supply their own constructor
/// (`AladinViewer::attach` on `wasm32`, `RefViewer::attach` in tests). The
/// startup ops are applied in plan order before the viewer is returned.
pub fn boot<V, E>(
    plan: &EmbedPlan,
    attach: impl FnOnce(&str, &ViewerOptions) -> Result<V, E>,
) -> Result<V, E>
where
    V: SkyViewer,
{
    let mut viewer = attach(&plan.container_id, &plan.viewer)?;
    for op in &plan.startup_ops {
        viewer.apply(op.clone());
    }
    Ok(viewer)
}

/// Forward a changed survey-control value to the viewer.
///
/// The value is forwarded verbatim as a single
/// [`ViewerOp::SetImageSurvey`]; no validation happens here because the
/// widget owns the survey vocabulary. Callers invoke this once per change
/// event.
pub fn forward_survey_change<V: SkyViewer>(viewer: &mut V, value: &str) {
    viewer.set_image_survey(SurveyId::new(value));
}
