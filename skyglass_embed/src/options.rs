// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page policy: what the embedding page asks for before configuration.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use skyglass_viewer::{CatalogSpec, CatalogStyle, ClickAction, MarkerShape, SurveyId};

/// Fixed id of the container element the viewer attaches to.
pub const DEFAULT_CONTAINER_ID: &str = "aladin-lite-div";

/// Imagery survey shown when no embedded configuration overrides it.
pub const DEFAULT_SURVEY: &str = "P/DSS2/color";

/// Default field of view, in degrees.
pub const DEFAULT_FOV_DEG: f64 = 1.5;

/// Default target the viewer centers on (the Trifid Nebula).
pub const DEFAULT_TARGET: &str = "M 20";

/// Name of the form controls whose change events switch the survey.
pub const SURVEY_CONTROL_NAME: &str = "survey";

/// Id of the optional page element carrying the embedded JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "survey-config";

/// Everything the page decides about the embedding, before the optional
/// embedded configuration is applied.
///
/// The `Default` value mirrors the Trifid Nebula demonstration page:
/// container `aladin-lite-div`, survey `P/DSS2/color`, a 1.5° field of view
/// centered on M 20, the form controls named `survey`, and the two
/// [`demo_overlays`]. Embedders override fields with struct-update syntax:
///
/// ```rust
/// use skyglass_embed::EmbedOptions;
///
/// let options = EmbedOptions {
///     overlays: Vec::new(),
///     ..EmbedOptions::default()
/// };
/// assert_eq!(options.container_id, "aladin-lite-div");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedOptions {
    /// Id of the container element the viewer attaches to.
    pub container_id: String,
    /// Imagery survey shown when the configuration does not pick one.
    pub survey: SurveyId,
    /// Field of view in degrees.
    pub fov_deg: f64,
    /// Target to center on.
    pub target: String,
    /// Name of the form controls that drive survey switching.
    pub survey_control_name: String,
    /// Id of the optional element carrying embedded JSON configuration.
    pub config_element_id: String,
    /// Catalog overlays requested right after the viewer attaches.
    pub overlays: Vec<CatalogSpec>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.into(),
            survey: SurveyId::new(DEFAULT_SURVEY),
            fov_deg: DEFAULT_FOV_DEG,
            target: DEFAULT_TARGET.into(),
            survey_control_name: SURVEY_CONTROL_NAME.into(),
            config_element_id: CONFIG_ELEMENT_ID.into(),
            overlays: demo_overlays(DEFAULT_TARGET),
        }
    }
}

/// The two catalog overlays of the demonstration page, centered on `target`.
///
/// A Simbad cone search drawn as green plus markers that open the source
/// table on click, and the `VizieR` table `J/ApJ/562/446/table13` drawn as
/// red squares that open a popup. Both use a 0.2° radius.
#[must_use]
pub fn demo_overlays(target: &str) -> Vec<CatalogSpec> {
    vec![
        CatalogSpec::simbad_cone(
            target,
            0.2,
            CatalogStyle::builder()
                .shape(MarkerShape::Plus)
                .color("#5d5")
                .on_click(ClickAction::ShowTable)
                .build(),
        ),
        CatalogSpec::vizier_table(
            "J/ApJ/562/446/table13",
            target,
            0.2,
            CatalogStyle::builder()
                .shape(MarkerShape::Square)
                .source_size(8)
                .color("red")
                .on_click(ClickAction::ShowPopup)
                .build(),
        ),
    ]
}
