// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skyglass_viewer --heading-base-level=0

//! Skyglass Viewer: viewer interface and option types for embedding sky atlases.
//!
//! This crate is the backend-agnostic core of the Skyglass stack. It models
//! the call surface of an embeddable sky-viewer widget (Aladin Lite and
//! friends) as plain data plus one small trait:
//!
//! - [`ViewerOptions`] describes the initial display state a page asks for:
//!   the imagery survey, the field of view, and the target to center on.
//! - [`CatalogSpec`] describes one catalog overlay request, either a Simbad
//!   cone search or a `VizieR` table query, together with marker styling.
//! - [`ViewerOp`] is the operation vocabulary an embedding drives once the
//!   widget exists: switching the imagery survey and adding catalog
//!   overlays.
//! - [`SkyViewer`] is the fixed call interface every backend implements.
//!
//! The crate does **not** render anything and does **not** talk to the
//! network. Tiling, projection math, catalog query protocols, and marker
//! drawing all live inside the external widget; this crate only names the
//! calls a page makes into it. Backends adapt [`SkyViewer`] to a concrete
//! widget (`skyglass_aladin` binds Aladin Lite on `wasm32`), and
//! `skyglass_viewer_ref` records applied ops for tests and debugging.
//!
//! ## Minimal example
//!
//! ```rust
//! use skyglass_viewer::{
//!     CatalogSpec, CatalogStyle, MarkerShape, SurveyId, ViewerOp, ViewerOptions,
//! };
//!
//! let options = ViewerOptions {
//!     survey: SurveyId::new("P/DSS2/color"),
//!     fov_deg: 1.5,
//!     target: "M 20".into(),
//! };
//!
//! let style = CatalogStyle::builder()
//!     .shape(MarkerShape::Plus)
//!     .color("#5d5")
//!     .build();
//! let overlay = CatalogSpec::simbad_cone("M 20", 0.2, style);
//!
//! // Ops are applied to any `SkyViewer` implementation.
//! let op = ViewerOp::AddCatalog(overlay);
//! # let _ = (options, op);
//! ```
//!
//! ## Design notes
//!
//! - Survey identifiers, target names, and CSS colors are forwarded to the
//!   widget **verbatim**. The widget owns validation; an identifier it does
//!   not recognize fails inside the widget, not here.
//! - Marker shapes and click behaviors are closed vocabularies of the
//!   widget and are therefore typed as enums with [`MarkerShape::as_str`] /
//!   [`ClickAction::as_str`] mappings to the widget's literal strings.
//! - Style fields are optional: an unset field is omitted from the widget
//!   call so the widget's own default applies.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Identifier of an imagery survey, for example `"P/DSS2/color"`.
///
/// Survey identifiers are opaque to the embedding: they are chosen by a page
/// default, an embedded configuration value, or a user-facing form control,
/// and forwarded verbatim to the widget's imagery-source setter. The widget
/// decides whether an identifier is valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurveyId(String);

impl SurveyId {
    /// Create a survey identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice, exactly as it will be forwarded.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurveyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SurveyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SurveyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SurveyId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SurveyId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Initial display options passed when a viewer is attached to a page.
///
/// These correspond to the options object of the widget constructor. After
/// construction the only state the embedding still drives is covered by
/// [`ViewerOp`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerOptions {
    /// Imagery survey to display initially.
    pub survey: SurveyId,
    /// Field of view in degrees (the angular extent of sky shown).
    pub fov_deg: f64,
    /// Target to center on. Accepts whatever the widget's resolver accepts,
    /// typically an object name such as `"M 20"` or a coordinate pair.
    pub target: String,
}

/// Marker shape vocabulary of the widget's catalog overlays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// A filled square.
    Square,
    /// A circle outline.
    Circle,
    /// A plus sign.
    Plus,
    /// A diagonal cross.
    Cross,
    /// A rhombus.
    Rhomb,
    /// A triangle.
    Triangle,
}

impl MarkerShape {
    /// The literal string the widget expects for this shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Plus => "plus",
            Self::Cross => "cross",
            Self::Rhomb => "rhomb",
            Self::Triangle => "triangle",
        }
    }
}

/// What the widget does when a catalog source is clicked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Show the source's measurements in the widget's table panel.
    ShowTable,
    /// Show a popup next to the clicked source.
    ShowPopup,
}

impl ClickAction {
    /// The literal string the widget expects for this behavior.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowTable => "showTable",
            Self::ShowPopup => "showPopup",
        }
    }
}

/// Marker styling for one catalog overlay.
///
/// Every field is optional. An unset field is omitted from the widget call
/// entirely, leaving the widget's own default in effect, so overlays carry
/// exactly the style fields the page chose and nothing more.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CatalogStyle {
    /// Marker shape drawn for each source.
    pub shape: Option<MarkerShape>,
    /// Marker size in pixels.
    pub source_size: Option<u32>,
    /// Marker color as a CSS color string, forwarded verbatim
    /// (for example `"#5d5"` or `"red"`).
    pub color: Option<String>,
    /// Click behavior for overlay sources.
    pub on_click: Option<ClickAction>,
}

impl CatalogStyle {
    /// Start building a style.
    #[must_use]
    pub fn builder() -> CatalogStyleBuilder {
        CatalogStyleBuilder::default()
    }
}

/// Builder for [`CatalogStyle`].
///
/// ```rust
/// use skyglass_viewer::{CatalogStyle, ClickAction, MarkerShape};
///
/// let style = CatalogStyle::builder()
///     .shape(MarkerShape::Square)
///     .source_size(8)
///     .color("red")
///     .on_click(ClickAction::ShowPopup)
///     .build();
/// assert_eq!(style.shape, Some(MarkerShape::Square));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogStyleBuilder {
    style: CatalogStyle,
}

impl CatalogStyleBuilder {
    /// Set the marker shape.
    #[must_use]
    pub fn shape(mut self, shape: MarkerShape) -> Self {
        self.style.shape = Some(shape);
        self
    }

    /// Set the marker size in pixels.
    #[must_use]
    pub fn source_size(mut self, size: u32) -> Self {
        self.style.source_size = Some(size);
        self
    }

    /// Set the marker color (a CSS color string, forwarded verbatim).
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Set the click behavior.
    #[must_use]
    pub fn on_click(mut self, action: ClickAction) -> Self {
        self.style.on_click = Some(action);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> CatalogStyle {
        self.style
    }
}

/// Where a catalog overlay's sources come from.
///
/// Both variants are fire-and-forget requests resolved entirely by the
/// widget; the embedding never sees the returned sources.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogSource {
    /// Cone search against the Simbad database.
    Simbad {
        /// Object name or position to center the search on.
        target: String,
        /// Search radius in degrees.
        radius_deg: f64,
    },
    /// Query of a published `VizieR` table.
    VizieR {
        /// `VizieR` table identifier, for example `"J/ApJ/562/446/table13"`.
        table: String,
        /// Object name or position to center the query on.
        target: String,
        /// Search radius in degrees.
        radius_deg: f64,
    },
}

/// One catalog overlay request: a source plus marker styling.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSpec {
    /// Where the overlay's sources come from.
    pub source: CatalogSource,
    /// How the overlay's sources are drawn.
    pub style: CatalogStyle,
}

impl CatalogSpec {
    /// An overlay backed by a Simbad cone search.
    #[must_use]
    pub fn simbad_cone(target: impl Into<String>, radius_deg: f64, style: CatalogStyle) -> Self {
        Self {
            source: CatalogSource::Simbad {
                target: target.into(),
                radius_deg,
            },
            style,
        }
    }

    /// An overlay backed by a `VizieR` table query.
    #[must_use]
    pub fn vizier_table(
        table: impl Into<String>,
        target: impl Into<String>,
        radius_deg: f64,
        style: CatalogStyle,
    ) -> Self {
        Self {
            source: CatalogSource::VizieR {
                table: table.into(),
                target: target.into(),
                radius_deg,
            },
            style,
        }
    }
}

/// Operations an embedding applies to an attached viewer.
///
/// Construction is not an op: each backend exposes its own attach
/// constructor taking [`ViewerOptions`], and ops apply to the constructed
/// viewer. This keeps "the widget exists before any method is called on it"
/// a property of ownership rather than of runtime checks.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerOp {
    /// Switch the displayed imagery survey.
    ///
    /// The identifier is forwarded verbatim to the widget's imagery-source
    /// setter.
    SetImageSurvey(SurveyId),
    /// Request a catalog overlay on top of the imagery.
    AddCatalog(CatalogSpec),
}

/// The fixed call interface of a sky-viewer widget.
///
/// Implementations forward ops to a concrete widget (or record them, in the
/// case of the reference viewer). Ops must be applied in the order given;
/// the widget's visible state after a sequence of ops is defined by the
/// widget itself.
pub trait SkyViewer {
    /// Apply a viewer operation.
    fn apply(&mut self, op: ViewerOp);

    /// Switch the displayed imagery survey.
    ///
    /// This is equivalent to `self.apply(ViewerOp::SetImageSurvey(survey))`.
    #[inline]
    fn set_image_survey(&mut self, survey: SurveyId) {
        self.apply(ViewerOp::SetImageSurvey(survey));
    }

    /// Request a catalog overlay.
    ///
    /// This is equivalent to `self.apply(ViewerOp::AddCatalog(spec))`.
    #[inline]
    fn add_catalog(&mut self, spec: CatalogSpec) {
        self.apply(ViewerOp::AddCatalog(spec));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Minimal viewer that appends every applied op to a log.
    #[derive(Default)]
    struct LogViewer {
        ops: Vec<ViewerOp>,
    }

    impl SkyViewer for LogViewer {
        fn apply(&mut self, op: ViewerOp) {
            self.ops.push(op);
        }
    }

    #[test]
    fn survey_id_compares_with_plain_strings() {
        let id = SurveyId::new("P/DSS2/color");
        assert_eq!(id, "P/DSS2/color");
        assert_eq!(id.as_str(), "P/DSS2/color");
        assert_eq!(SurveyId::from("P/DSS2/red"), SurveyId::new("P/DSS2/red"));
    }

    #[test]
    fn marker_vocabulary_matches_widget_strings() {
        assert_eq!(MarkerShape::Square.as_str(), "square");
        assert_eq!(MarkerShape::Plus.as_str(), "plus");
        assert_eq!(MarkerShape::Rhomb.as_str(), "rhomb");
        assert_eq!(ClickAction::ShowTable.as_str(), "showTable");
        assert_eq!(ClickAction::ShowPopup.as_str(), "showPopup");
    }

    #[test]
    fn style_builder_sets_only_chosen_fields() {
        let style = CatalogStyle::builder()
            .shape(MarkerShape::Plus)
            .color("#5d5")
            .on_click(ClickAction::ShowTable)
            .build();

        assert_eq!(style.shape, Some(MarkerShape::Plus));
        assert_eq!(style.color.as_deref(), Some("#5d5"));
        assert_eq!(style.on_click, Some(ClickAction::ShowTable));
        // Unset fields stay unset so the widget default applies.
        assert_eq!(style.source_size, None);
    }

    #[test]
    fn catalog_constructors_capture_parameters() {
        let simbad = CatalogSpec::simbad_cone("M 20", 0.2, CatalogStyle::default());
        let CatalogSource::Simbad { target, radius_deg } = &simbad.source else {
            panic!("expected a Simbad source");
        };
        assert_eq!(target, "M 20");
        assert_eq!(*radius_deg, 0.2);

        let vizier = CatalogSpec::vizier_table(
            "J/ApJ/562/446/table13",
            "M 20",
            0.2,
            CatalogStyle::builder().source_size(8).build(),
        );
        let CatalogSource::VizieR { table, .. } = &vizier.source else {
            panic!("expected a VizieR source");
        };
        assert_eq!(table, "J/ApJ/562/446/table13");
        assert_eq!(vizier.style.source_size, Some(8));
    }

    #[test]
    fn provided_methods_desugar_to_ops() {
        let mut viewer = LogViewer::default();
        viewer.set_image_survey(SurveyId::new("P/DSS2/red"));
        viewer.add_catalog(CatalogSpec::simbad_cone("M 20", 0.2, CatalogStyle::default()));

        assert_eq!(viewer.ops.len(), 2);
        assert_eq!(
            viewer.ops[0],
            ViewerOp::SetImageSurvey(SurveyId::new("P/DSS2/red"))
        );
        assert!(matches!(viewer.ops[1], ViewerOp::AddCatalog(_)));
    }
}
