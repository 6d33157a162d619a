// Copyright 2025 the Skyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the page-embedded JSON configuration.

use alloc::string::String;

use serde::Deserialize;
use thiserror::Error;

use skyglass_viewer::SurveyId;

/// Largest accepted field of view, in degrees.
pub(crate) const MAX_FOV_DEG: f64 = 360.0;

/// Error parsing the page-embedded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration element was present but its text content was empty.
    #[error("embedded configuration is empty")]
    Empty,
    /// The configuration text was not JSON of a supported shape.
    #[error("malformed embedded configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration a server renders into the page for the viewer bootstrap.
///
/// All fields are optional; [`plan`](crate::plan) falls back to the page
/// defaults for anything unset. The configuration element itself is also
/// optional, so a page without one runs entirely on defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbedConfig {
    /// Initial imagery survey, overriding the default survey.
    pub survey: Option<SurveyId>,
    /// Target to center on, overriding the default target.
    pub target: Option<String>,
    /// Field of view in degrees, overriding the default field of view.
    pub fov_deg: Option<f64>,
}

/// Wire shapes accepted for the embedded value.
///
/// The original pages embed either the survey identifier alone (a bare JSON
/// string) or a small object; `untagged` tries the shapes in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigRepr {
    Survey(String),
    Full {
        survey: Option<String>,
        target: Option<String>,
        fov: Option<f64>,
    },
}

impl EmbedConfig {
    /// Parse the text content of the configuration element.
    ///
    /// Accepts the bare-string form, which names the initial survey:
    ///
    /// ```rust
    /// use skyglass_embed::EmbedConfig;
    ///
    /// let config = EmbedConfig::from_json(r#""P/DSS2/red""#).unwrap();
    /// assert_eq!(config.survey.unwrap(), "P/DSS2/red");
    /// ```
    ///
    /// and the object form with optional fields:
    ///
    /// ```rust
    /// use skyglass_embed::EmbedConfig;
    ///
    /// let config =
    ///     EmbedConfig::from_json(r#"{"survey": "P/DSS2/red", "fov": 0.5}"#).unwrap();
    /// assert_eq!(config.fov_deg, Some(0.5));
    /// assert_eq!(config.target, None);
    /// ```
    ///
    /// Anything else is an error; callers decide whether to surface it or
    /// fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty);
        }

        let repr: ConfigRepr = serde_json::from_str(trimmed)?;
        Ok(match repr {
            ConfigRepr::Survey(survey) => Self {
                survey: Some(SurveyId::new(survey)),
                target: None,
                fov_deg: None,
            },
            ConfigRepr::Full {
                survey,
                target,
                fov,
            } => Self {
                survey: survey.map(SurveyId::new),
                target,
                fov_deg: fov,
            },
        })
    }
}

/// Returns a usable field of view, or `None` if the value cannot be used.
///
/// The widget treats the field of view as an angular extent, so it must be
/// finite and positive; larger values are clamped to the full sphere.
pub(crate) fn sanitize_fov(fov_deg: f64) -> Option<f64> {
    if !fov_deg.is_finite() || fov_deg <= 0.0 {
        return None;
    }
    Some(fov_deg.min(MAX_FOV_DEG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_names_the_survey() {
        let config = EmbedConfig::from_json(r#""P/DSS2/color""#).unwrap();
        assert_eq!(config.survey.unwrap(), "P/DSS2/color");
        assert_eq!(config.target, None);
        assert_eq!(config.fov_deg, None);
    }

    #[test]
    fn object_form_fills_optional_fields() {
        let config = EmbedConfig::from_json(
            r#"{"survey": "P/allWISE/color", "target": "M 31", "fov": 2.0}"#,
        )
        .unwrap();
        assert_eq!(config.survey.unwrap(), "P/allWISE/color");
        assert_eq!(config.target.as_deref(), Some("M 31"));
        assert_eq!(config.fov_deg, Some(2.0));
    }

    #[test]
    fn object_form_accepts_missing_fields() {
        let config = EmbedConfig::from_json(r#"{"target": "M 31"}"#).unwrap();
        assert_eq!(config.survey, None);
        assert_eq!(config.target.as_deref(), Some("M 31"));
        assert_eq!(config.fov_deg, None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let config = EmbedConfig::from_json("\n  \"P/DSS2/red\"  \n").unwrap();
        assert_eq!(config.survey.unwrap(), "P/DSS2/red");
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(
            EmbedConfig::from_json("   "),
            Err(ConfigError::Empty)
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EmbedConfig::from_json("{survey:"),
            Err(ConfigError::Malformed(_))
        ));
        // A JSON number is valid JSON but not a supported shape.
        assert!(matches!(
            EmbedConfig::from_json("42"),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn fov_sanitization_rejects_unusable_values() {
        assert_eq!(sanitize_fov(1.5), Some(1.5));
        assert_eq!(sanitize_fov(720.0), Some(MAX_FOV_DEG));
        assert_eq!(sanitize_fov(0.0), None);
        assert_eq!(sanitize_fov(-3.0), None);
        assert_eq!(sanitize_fov(f64::NAN), None);
        assert_eq!(sanitize_fov(f64::INFINITY), None);
    }
}
