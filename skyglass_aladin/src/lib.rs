// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=skyglass_aladin --heading-base-level=0

//! An Aladin Lite backend for the Skyglass viewer interface.
//!
//! On `wasm32` this crate binds the Aladin Lite widget's JS API and drives
//! it through the [`SkyViewer`] trait, and it exports `boot_page`, the
//! entry point that turns a server-rendered page into a live sky viewer.
//! On other targets it compiles to an inert stub so the workspace builds
//! everywhere.
//!
//! # Page contract
//!
//! `boot_page` expects the embedding page to provide, before the module
//! runs:
//!
//! - the Aladin Lite script, loaded and evaluated (the widget's `A` global
//!   must exist),
//! - a container element with id `aladin-lite-div`,
//! - optionally, form controls named `survey` whose values are `HiPS` survey
//!   identifiers,
//! - optionally, an element with id `survey-config` whose text content is
//!   the JSON viewer configuration.
//!
//! ```html
//! <div id="aladin-lite-div" style="width: 480px; height: 480px;"></div>
//! <label><input type="radio" name="survey" value="P/DSS2/color" checked> color</label>
//! <label><input type="radio" name="survey" value="P/DSS2/red"> red</label>
//! <script id="survey-config" type="application/json">"P/DSS2/color"</script>
//! <script type="module">
//!   import init, { boot_page } from "./skyglass_aladin.js";
//!   await init();
//!   boot_page();
//! </script>
//! ```
//!
//! A missing container element is an error. A missing configuration element
//! is not: the page then starts on the built-in defaults. A configuration
//! element whose content fails to parse is reported on the console and
//! otherwise treated as missing.
//!
//! [`AladinViewer`] can also be attached directly for pages that want to
//! assemble their own embedding instead of using `boot_page`:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(
//!     options: &skyglass_viewer::ViewerOptions,
//! ) -> Result<skyglass_aladin::AladinViewer, wasm_bindgen::JsValue> {
//!     skyglass_aladin::AladinViewer::attach("aladin-lite-div", options)
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// The cdylib build needs std's allocator and panic handler off-wasm; on
// wasm32 std arrives through wasm-bindgen.
#[cfg(not(target_arch = "wasm32"))]
extern crate std;

#[cfg(target_arch = "wasm32")]
use alloc::format;
#[cfg(target_arch = "wasm32")]
use alloc::string::String;
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use js_sys::{Object, Reflect};
#[cfg(target_arch = "wasm32")]
use skyglass_embed::{EmbedConfig, EmbedOptions, boot, forward_survey_change, plan};
#[cfg(target_arch = "wasm32")]
use skyglass_viewer::{CatalogSource, CatalogStyle, ViewerOptions};
use skyglass_viewer::{SkyViewer, ViewerOp};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Event, HtmlInputElement};

#[cfg(target_arch = "wasm32")]
mod bindings {
    //! Imports from the Aladin Lite `A` namespace.
    #![allow(
        unsafe_code,
        reason = "declaring the widget's JS entry points requires an extern block"
    )]

    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen]
    unsafe extern "C" {
        /// Handle to a live Aladin Lite viewer.
        pub(crate) type Aladin;

        /// Create a viewer inside the element matched by `selector`.
        ///
        /// A throwing constructor is caught and surfaced as `Err`.
        #[wasm_bindgen(catch, js_namespace = A, js_name = aladin)]
        pub(crate) fn aladin(selector: &str, options: &JsValue) -> Result<Aladin, JsValue>;

        /// Switch the viewer's base imagery to another survey.
        #[wasm_bindgen(method, js_name = setImageSurvey)]
        pub(crate) fn set_image_survey(this: &Aladin, survey: &str);

        /// Handle to a catalog overlay layer.
        pub(crate) type Catalog;

        /// Add a catalog overlay on top of the imagery.
        #[wasm_bindgen(method, js_name = addCatalog)]
        pub(crate) fn add_catalog(this: &Aladin, catalog: &Catalog);

        /// Build a catalog overlay from a Simbad cone search.
        #[wasm_bindgen(js_namespace = A, js_name = catalogFromSimbad)]
        pub(crate) fn catalog_from_simbad(
            target: &str,
            radius_deg: f64,
            options: &JsValue,
        ) -> Catalog;

        /// Build a catalog overlay from a `VizieR` table query.
        #[wasm_bindgen(js_namespace = A, js_name = catalogFromVizieR)]
        pub(crate) fn catalog_from_vizier(
            table: &str,
            target: &str,
            radius_deg: f64,
            options: &JsValue,
        ) -> Catalog;
    }
}

/// A [`SkyViewer`] backed by the Aladin Lite widget.
///
/// Only available on `wasm32`; on other targets this is an inert stub whose
/// trait methods panic.
#[cfg(target_arch = "wasm32")]
pub struct AladinViewer {
    handle: bindings::Aladin,
}

/// A [`SkyViewer`] backed by the Aladin Lite widget.
///
/// Only available on `wasm32`; on other targets this is an inert stub whose
/// trait methods panic.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct AladinViewer;

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for AladinViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AladinViewer { .. }")
    }
}

#[cfg(target_arch = "wasm32")]
impl AladinViewer {
    /// Create a viewer in the element with id `container_id`.
    ///
    /// The widget positions itself on `options.target` with the initial
    /// survey and field of view from `options`. Fails if the element does
    /// not exist when called or if the widget constructor throws, so run
    /// this after the DOM is parsed and the widget script has loaded.
    pub fn attach(container_id: &str, options: &ViewerOptions) -> Result<Self, JsValue> {
        let document = document()?;
        if document.get_element_by_id(container_id).is_none() {
            return Err(JsValue::from_str(&format!(
                "no viewer container with id {container_id:?} in the document"
            )));
        }

        let js_options = Object::new();
        set_entry(&js_options, "survey", &JsValue::from_str(options.survey.as_str()));
        set_entry(&js_options, "fov", &JsValue::from_f64(options.fov_deg));
        set_entry(&js_options, "target", &JsValue::from_str(&options.target));

        let selector = format!("#{container_id}");
        let handle = bindings::aladin(&selector, &js_options)?;
        Ok(Self { handle })
    }
}

#[cfg(target_arch = "wasm32")]
impl SkyViewer for AladinViewer {
    fn apply(&mut self, op: ViewerOp) {
        match op {
            ViewerOp::SetImageSurvey(survey) => self.handle.set_image_survey(survey.as_str()),
            ViewerOp::AddCatalog(spec) => {
                let options = catalog_options(&spec.style);
                let catalog = match &spec.source {
                    CatalogSource::Simbad { target, radius_deg } => {
                        bindings::catalog_from_simbad(target, *radius_deg, &options)
                    }
                    CatalogSource::VizieR {
                        table,
                        target,
                        radius_deg,
                    } => bindings::catalog_from_vizier(table, target, *radius_deg, &options),
                };
                self.handle.add_catalog(&catalog);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SkyViewer for AladinViewer {
    fn apply(&mut self, _op: ViewerOp) {
        unimplemented!("AladinViewer is only available on wasm32")
    }
}

/// Boot the page embedding.
///
/// Reads the optional embedded configuration, attaches the viewer to the
/// default container, adds the page's catalog overlays, then registers a
/// `change` listener on every form control named `survey` which forwards
/// the control's value to the viewer. Call once, after the Aladin Lite
/// script has loaded.
///
/// Fails if the document or the container element is missing, or if the
/// widget constructor throws. A malformed embedded configuration does not
/// fail the boot: it is reported through `console.warn` and the defaults
/// are used instead.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn boot_page() -> Result<(), JsValue> {
    let options = EmbedOptions::default();
    let document = document()?;

    let config = match read_embedded_config(&document, &options.config_element_id) {
        Some(text) => match EmbedConfig::from_json(&text) {
            Ok(config) => Some(config),
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "ignoring embedded viewer configuration: {err}"
                )));
                None
            }
        },
        None => None,
    };

    let page = plan(&options, config.as_ref());
    let viewer = boot(&page, AladinViewer::attach)?;
    wire_survey_controls(&document, &options.survey_control_name, viewer)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document to attach the viewer to"))
}

/// Text content of the embedded configuration element, if the page has one.
#[cfg(target_arch = "wasm32")]
fn read_embedded_config(document: &Document, element_id: &str) -> Option<String> {
    document.get_element_by_id(element_id)?.text_content()
}

/// Register one shared `change` handler on every control named `control_name`.
///
/// The handler forwards the changed control's value to the viewer's survey
/// setter. The viewer moves into the handler and both stay alive for the
/// rest of the page's life.
#[cfg(target_arch = "wasm32")]
fn wire_survey_controls(
    document: &Document,
    control_name: &str,
    mut viewer: AladinViewer,
) -> Result<(), JsValue> {
    let controls = document.get_elements_by_name(control_name);

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.current_target() else {
            return;
        };
        let Ok(control) = target.dyn_into::<HtmlInputElement>() else {
            return;
        };
        forward_survey_change(&mut viewer, &control.value());
    });

    let mut registered = Ok(());
    for index in 0..controls.length() {
        if let Some(control) = controls.item(index) {
            registered = control
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
            if registered.is_err() {
                break;
            }
        }
    }

    // Controls registered before an error still reference the handler, so it
    // stays alive for the page lifetime either way.
    handler.forget();
    registered
}

/// Build the widget's catalog options object, leaving unset fields out.
#[cfg(target_arch = "wasm32")]
fn catalog_options(style: &CatalogStyle) -> Object {
    let options = Object::new();
    if let Some(shape) = style.shape {
        set_entry(&options, "shape", &JsValue::from_str(shape.as_str()));
    }
    if let Some(size) = style.source_size {
        set_entry(&options, "sourceSize", &JsValue::from_f64(f64::from(size)));
    }
    if let Some(color) = &style.color {
        set_entry(&options, "color", &JsValue::from_str(color));
    }
    if let Some(action) = style.on_click {
        set_entry(&options, "onClick", &JsValue::from_str(action.as_str()));
    }
    options
}

#[cfg(target_arch = "wasm32")]
fn set_entry(target: &Object, key: &str, value: &JsValue) {
    // `Reflect::set` only fails on non-objects, and `target` is always a
    // freshly made object here.
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use skyglass_viewer::SurveyId;

    #[test]
    #[should_panic(expected = "only available on wasm32")]
    fn stub_viewer_panics_when_driven() {
        let mut viewer = AladinViewer::default();
        viewer.apply(ViewerOp::SetImageSurvey(SurveyId::new("P/DSS2/color")));
    }
}
